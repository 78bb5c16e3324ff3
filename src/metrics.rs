use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing flashcard traffic.
#[derive(Default)]
pub struct CardMetrics {
    cards_ingested: AtomicU64,
    retrievals_served: AtomicU64,
    cards_served: AtomicU64,
}

impl CardMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flashcard accepted and stored by the ingestion service.
    pub fn record_ingest(&self) {
        self.cards_ingested.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a served retrieval and the number of cards it returned.
    pub fn record_retrieval(&self, card_count: u64) {
        self.retrievals_served.fetch_add(1, Ordering::Relaxed);
        self.cards_served.fetch_add(card_count, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cards_ingested: self.cards_ingested.load(Ordering::Relaxed),
            retrievals_served: self.retrievals_served.load(Ordering::Relaxed),
            cards_served: self.cards_served.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of traffic counters used for reporting.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Flashcards stored since startup.
    pub cards_ingested: u64,
    /// Retrieval requests served since startup.
    pub retrievals_served: u64,
    /// Total flashcards returned across all retrievals.
    pub cards_served: u64,
}
