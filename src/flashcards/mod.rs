//! Flashcard ingestion and retrieval services.

pub mod service;
pub mod types;

pub use service::{FlashcardApi, FlashcardService};
pub use types::{CardSubmission, FlashcardError, FlashcardView, RetrieveQuery, SubmitOutcome};
