//! Error types for the engine boundary.

/// Result type for boundary operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Error type for boundary operations
///
/// The engine itself is total over its input domain: unknown venue and
/// period labels are absorbed by documented fallbacks. These variants cover
/// the remaining contract violations at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    #[error("Empty selection: {0}")]
    EmptySelection(String),
}
