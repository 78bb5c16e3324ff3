//! Record types and error definitions for the flashcard store.

use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// Errors surfaced by flashcard store implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing persistence engine failed or rejected an operation.
    #[error("storage backend failure: {message}")]
    Backend {
        /// Description of the underlying failure.
        message: String,
    },
}

/// Flashcard fields supplied by the ingestion service before storage.
#[derive(Debug, Clone)]
pub struct NewFlashcard {
    /// Identifier of the student who owns the card.
    pub student_id: String,
    /// Question text shown on the front of the card.
    pub question: String,
    /// Answer text shown on the back of the card.
    pub answer: String,
    /// Subject label computed by the classifier; never caller-supplied.
    pub subject: String,
}

/// A flashcard as persisted by a store, with assigned identity and timestamp.
///
/// Records are immutable once created; there is no update operation.
#[derive(Debug, Clone)]
pub struct Flashcard {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// Identifier of the student who owns the card.
    pub student_id: String,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Subject label computed at ingestion time.
    pub subject: String,
    /// Creation timestamp assigned by the store (UTC).
    pub created_at: OffsetDateTime,
}
