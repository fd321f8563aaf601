//! Error types for data access.

/// Errors surfaced by cursor consumption and store queries.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A query that requires at least one row matched none.
    #[error("query returned no rows")]
    EmptyResult,

    /// The underlying cursor failed while stepping through rows.
    #[error("cursor read failed: {0}")]
    Cursor(String),

    /// A row could not be mapped into its domain record.
    #[error("row mapping failed: {0}")]
    Mapping(String),
}

pub type DataResult<T> = Result<T, DataError>;
