use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the delivery-insights pipeline.
///
/// Only representation defects the upstream contract does not tolerate are
/// fatal; recoverable per-field and per-row conditions are absorbed inside
/// the normalizer and never surface as an `Err`.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The dataset file could not be opened or read from disk.
    #[error("Failed to read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be parsed against the known column set.
    #[error("Failed to parse CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// An order-date value did not match the `DD-MM-YYYY` contract.
    #[error("Row {row}: invalid order date \"{value}\" (expected DD-MM-YYYY)")]
    InvalidOrderDate { row: usize, value: String },

    /// The time-taken field's extracted token was missing or non-numeric.
    #[error("Row {row}: time-taken value \"{value}\" has no numeric token")]
    MalformedTimeTaken { row: usize, value: String },

    /// A composite text field had no tokens to extract.
    #[error("Row {row}: column {column} is empty")]
    EmptyField { row: usize, column: &'static str },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PipelineError>;
