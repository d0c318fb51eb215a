//! Error taxonomy for the annotator

use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// A sheet value did not split into its `Immediate: ` / `Dynamic: ` halves
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The record store could not be opened, read or written
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    /// The schema document could not be read or did not have the expected shape
    #[error("Invalid schema: {0}")]
    Schema(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for AnnotatorError {
    fn from(value: rusqlite::Error) -> Self {
        AnnotatorError::StoreUnavailable(format!("{value}"))
    }
}

impl From<tokio::task::JoinError> for AnnotatorError {
    fn from(value: tokio::task::JoinError) -> Self {
        AnnotatorError::StoreUnavailable(format!("store task failed: {value}"))
    }
}

pub type Result<T> = std::result::Result<T, AnnotatorError>;
