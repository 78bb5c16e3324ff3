//! Request, view, and error types for the flashcard services.

use serde::Serialize;
use thiserror::Error;

use crate::store::StorageError;

/// Errors produced by the ingestion and retrieval services.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Caller omitted or blanked a required field or parameter.
    #[error("{message}")]
    Validation {
        /// Caller-facing description of the failed requirement.
        message: String,
    },
    /// A well-formed query matched no stored flashcards.
    #[error("No flashcards found for student_id '{student_id}'.")]
    NotFound {
        /// Partition the query was scoped to.
        student_id: String,
    },
    /// The backing store failed while reading or writing records.
    #[error("Flashcard storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Raw flashcard submission prior to validation.
///
/// Fields stay optional so missing values reach the ingestion service, which
/// owns the required-field check and its caller-facing message.
#[derive(Debug, Default, Clone)]
pub struct CardSubmission {
    /// Identifier of the submitting student.
    pub student_id: Option<String>,
    /// Question text for the front of the card.
    pub question: Option<String>,
    /// Answer text for the back of the card.
    pub answer: Option<String>,
}

/// Acknowledgment returned after a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Subject label inferred from the question.
    pub subject: String,
}

/// Raw retrieval query prior to validation.
#[derive(Debug, Default, Clone)]
pub struct RetrieveQuery {
    /// Partition to read from.
    pub student_id: Option<String>,
    /// Optional raw sample size; values that fail to parse as a positive
    /// integer fall back to the configured default.
    pub limit: Option<String>,
}

/// Caller-facing projection of a stored flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardView {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Subject label inferred at ingestion time.
    pub subject: String,
}
