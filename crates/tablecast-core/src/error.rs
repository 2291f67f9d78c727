//! Error types for tablecast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating table operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// No table with the given name exists in the sheet
    #[error("Table '{table}' not found in sheet '{sheet}'")]
    TableNotFound { table: String, sheet: String },

    /// A row or column index falls outside the table body
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Parallel location/value sequences have different lengths
    #[error("Arity mismatch: {locations} cell locations but {values} cell values")]
    ArityMismatch { locations: usize, values: usize },

    /// Unrecognized operation name in a tool payload
    #[error("Unknown operation: '{0}'")]
    UnknownOperation(String),

    /// A payload is missing a field its operation requires, or carries one
    /// it must not
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The table boundary changed between resolution and submission
    #[error("Table '{table}' was modified concurrently; no requests submitted")]
    ConcurrentModification { table: String },

    /// A sequential batch stopped partway: some requests applied, some did not
    #[error("Partial failure: {applied} of {total} requests applied, then: {message}")]
    PartialFailure {
        applied: usize,
        total: usize,
        message: String,
    },

    /// Transport or auth failure from the backend collaborator
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A table boundary reported by the backend violates its own invariants
    #[error("Invalid table boundary: {0}")]
    InvalidBoundary(String),
}

impl Error {
    /// Stable snake_case token for this error, used as the `error_kind`
    /// field of a tool response.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidAddress(_) => "invalid_address",
            Error::TableNotFound { .. } => "table_not_found",
            Error::IndexOutOfRange(_) => "index_out_of_range",
            Error::ArityMismatch { .. } => "arity_mismatch",
            Error::UnknownOperation(_) => "unknown_operation",
            Error::InvalidPayload(_) => "invalid_payload",
            Error::ConcurrentModification { .. } => "concurrent_modification",
            Error::PartialFailure { .. } => "partial_failure",
            Error::BackendUnavailable(_) => "backend_unavailable",
            Error::InvalidBoundary(_) => "invalid_boundary",
        }
    }
}
