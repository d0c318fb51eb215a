//! Orchestrator Module
//!
//! Turns an utterance into a record through extraction, table-driven
//! classification, context shifting and hypothesis substitution, then
//! composes the reply and guidance.

pub mod extractor;
pub mod classifier;
pub mod builder;
pub mod context;
pub mod abduction;
pub mod guidance;
pub mod aggregation;
pub mod annotator;

pub use abduction::Mode;
pub use aggregation::Refinement;
pub use annotator::{Annotation, Annotator, ProcessOutcome};
pub use builder::RecordBuilder;
pub use extractor::Extraction;
