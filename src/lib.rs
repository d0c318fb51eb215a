//! Semiotic Agency
//!
//! A rule-based dialogue annotator that tags short utterances with a
//! sheet / first cut / double cut record:
//! - Lexicon-based tokenization and part-of-speech tagging
//! - Table-driven sign and interpretant classification
//! - Context shifting across turns and abductive hypothesis substitution
//! - Canned responses and guidance sentences
//! - Append-only SQLite record store with refinement over history

pub mod config;
pub mod error;
pub mod graph;
pub mod memory;
pub mod nlp;
pub mod orchestrator;

// Re-exports for convenience
pub use config::AnnotatorConfig;
pub use error::{AnnotatorError, Result};
pub use graph::{Record, Schema};
pub use memory::{InMemoryRecordStore, RecordStore, SqliteRecordStore};
pub use orchestrator::{Annotator, Mode, ProcessOutcome, Refinement};
