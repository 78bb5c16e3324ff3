//! Embedded in-memory flashcard store.

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{
    Flashcard, FlashcardStore, NewFlashcard, StorageError, sampling::sample_indices,
};

/// Store keeping one insertion-ordered partition per student.
///
/// Writes append under a write lock, so each record lands atomically and
/// concurrent ingestions never interleave partial records; reads share a read
/// lock and never block each other. The [`FlashcardStore`] trait is the seam
/// for swapping in a durable backend.
#[derive(Default)]
pub struct MemoryStore {
    partitions: RwLock<HashMap<String, Vec<Flashcard>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashcardStore for MemoryStore {
    async fn create(&self, card: NewFlashcard) -> Result<Flashcard, StorageError> {
        let stored = Flashcard {
            id: Uuid::new_v4(),
            student_id: card.student_id,
            question: card.question,
            answer: card.answer,
            subject: card.subject,
            created_at: OffsetDateTime::now_utc(),
        };

        let mut partitions = self.partitions.write().await;
        partitions
            .entry(stored.student_id.clone())
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self, student_id: &str) -> Result<Vec<Flashcard>, StorageError> {
        let partitions = self.partitions.read().await;
        Ok(partitions.get(student_id).cloned().unwrap_or_default())
    }

    async fn sample(
        &self,
        student_id: &str,
        amount: usize,
    ) -> Result<Vec<Flashcard>, StorageError> {
        debug_assert!(amount > 0, "callers clamp the sample amount first");
        let partitions = self.partitions.read().await;
        let Some(cards) = partitions.get(student_id) else {
            return Ok(Vec::new());
        };

        let picks = sample_indices(&mut rand::thread_rng(), cards.len(), amount);
        Ok(picks.into_iter().map(|index| cards[index].clone()).collect())
    }
}
