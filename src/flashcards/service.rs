//! Ingestion and retrieval services coordinating validation, classification, and store access.

use crate::{
    classifier::classify,
    config::get_config,
    flashcards::types::{
        CardSubmission, FlashcardError, FlashcardView, RetrieveQuery, SubmitOutcome,
    },
    metrics::{CardMetrics, MetricsSnapshot},
    store::{Flashcard, FlashcardStore, NewFlashcard},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Message returned when a submission misses a required field.
const SUBMISSION_FIELDS_REQUIRED: &str = "student_id, question, and answer are required.";
/// Message returned when a retrieval query misses the student identifier.
const STUDENT_ID_REQUIRED: &str = "student_id is required.";

/// Abstraction over the flashcard services consumed by external surfaces.
#[async_trait]
pub trait FlashcardApi: Send + Sync {
    /// Validate a submission, infer its subject, and persist the card.
    async fn submit(&self, submission: CardSubmission) -> Result<SubmitOutcome, FlashcardError>;

    /// Validate a query and return the matching cards, in full or sampled.
    async fn retrieve(&self, query: RetrieveQuery) -> Result<Vec<FlashcardView>, FlashcardError>;

    /// Retrieve the current metrics snapshot for diagnostics.
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}

/// Coordinates the flashcard request flow on top of a [`FlashcardStore`].
///
/// The service owns the store handle and metrics registry. Construct it once
/// near process start and share it through an `Arc`; it keeps no per-request
/// state of its own.
pub struct FlashcardService<S> {
    store: S,
    metrics: Arc<CardMetrics>,
}

impl<S: FlashcardStore> FlashcardService<S> {
    /// Build a service on top of the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            metrics: Arc::new(CardMetrics::new()),
        }
    }
}

#[async_trait]
impl<S: FlashcardStore> FlashcardApi for FlashcardService<S> {
    async fn submit(&self, submission: CardSubmission) -> Result<SubmitOutcome, FlashcardError> {
        let (student_id, question, answer) = validate_submission(submission)?;
        let subject = classify(&question).to_string();
        let stored = self
            .store
            .create(NewFlashcard {
                student_id,
                question,
                answer,
                subject,
            })
            .await?;

        self.metrics.record_ingest();
        tracing::info!(
            student_id = %stored.student_id,
            subject = %stored.subject,
            card_id = %stored.id,
            "Flashcard stored"
        );
        Ok(SubmitOutcome {
            subject: stored.subject,
        })
    }

    async fn retrieve(&self, query: RetrieveQuery) -> Result<Vec<FlashcardView>, FlashcardError> {
        let student_id = require_value(query.student_id, STUDENT_ID_REQUIRED)?;

        let cards = match query.limit {
            None => self.store.find_all(&student_id).await?,
            Some(raw) => {
                let amount = resolve_sample_limit(&raw, get_config().sample_default_limit);
                self.store.sample(&student_id, amount).await?
            }
        };

        if cards.is_empty() {
            return Err(FlashcardError::NotFound { student_id });
        }

        self.metrics.record_retrieval(cards.len() as u64);
        tracing::debug!(
            student_id = %student_id,
            cards = cards.len(),
            "Flashcards retrieved"
        );
        Ok(cards.into_iter().map(into_view).collect())
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

fn validate_submission(
    submission: CardSubmission,
) -> Result<(String, String, String), FlashcardError> {
    let CardSubmission {
        student_id,
        question,
        answer,
    } = submission;

    match (present(student_id), present(question), present(answer)) {
        (Some(student_id), Some(question), Some(answer)) => Ok((student_id, question, answer)),
        _ => Err(FlashcardError::Validation {
            message: SUBMISSION_FIELDS_REQUIRED.to_string(),
        }),
    }
}

fn require_value(value: Option<String>, message: &str) -> Result<String, FlashcardError> {
    present(value).ok_or_else(|| FlashcardError::Validation {
        message: message.to_string(),
    })
}

/// Treat blank strings the same as missing values; stored text stays untrimmed.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|input| !input.trim().is_empty())
}

/// Parse a raw limit parameter, substituting `default` for anything that is
/// not a positive integer and clamping the result to at least one card.
fn resolve_sample_limit(raw: &str, default: usize) -> usize {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value > 0)
        .map(|value| value as usize)
        .unwrap_or(default)
        .max(1)
}

fn into_view(card: Flashcard) -> FlashcardView {
    FlashcardView {
        question: card.question,
        answer: card.answer,
        subject: card.subject,
    }
}
