//! Flashcard persistence and sampling.

pub mod memory;
pub mod sampling;
pub mod types;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use types::{Flashcard, NewFlashcard, StorageError};

/// Abstraction over flashcard persistence used by the ingestion and retrieval services.
///
/// Implementations must make `create` atomic per record and keep partitions
/// keyed by `student_id` strictly separate. Input validation is the caller's
/// responsibility; a store fails only when its backend fails.
#[async_trait]
pub trait FlashcardStore: Send + Sync {
    /// Persist a new flashcard, assigning its identifier and creation timestamp.
    async fn create(&self, card: NewFlashcard) -> Result<Flashcard, StorageError>;

    /// Return every flashcard for the student in insertion order (oldest first).
    ///
    /// An unknown `student_id` yields an empty vector, never an error.
    async fn find_all(&self, student_id: &str) -> Result<Vec<Flashcard>, StorageError>;

    /// Draw up to `amount` distinct flashcards uniformly at random from the partition.
    ///
    /// Partitions holding fewer than `amount` records are returned whole, in
    /// arbitrary order. `amount` must be at least 1; callers clamp before
    /// delegating to the store.
    async fn sample(
        &self,
        student_id: &str,
        amount: usize,
    ) -> Result<Vec<Flashcard>, StorageError>;
}
