#![deny(missing_docs)]

//! Core library for the flashdeck flashcard server.

/// HTTP routing and REST handlers.
pub mod api;
/// Subject inference over question text.
pub mod classifier;
/// Environment-driven configuration management.
pub mod config;
/// Flashcard ingestion and retrieval services.
pub mod flashcards;
/// Structured logging and tracing setup.
pub mod logging;
/// Ingestion and retrieval counters.
pub mod metrics;
/// Flashcard persistence and sampling.
pub mod store;
