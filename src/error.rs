//! Error types for breakeven operations.
//!
//! The cost model and chart geometry are total over their numeric domain and
//! never fail; these errors cover the edges where inputs come in and reports
//! go out.

use thiserror::Error;

/// Result type alias for breakeven operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving inputs or writing results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An input value is outside its allowed domain.
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending field.
        field: String,
        /// Value that was supplied.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Error writing a report, chart or export.
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
