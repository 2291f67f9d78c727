//! Shared payload and response types for tablecast tool invocations.
//!
//! These mirror the tool surface exactly: one JSON object per invocation in,
//! one structured summary object back. Payloads are deliberately loose at
//! this layer (the `operation` field is a plain string, the row fields are
//! all optional); the engine validates them eagerly into typed operations
//! before touching the backend.

use serde::{Deserialize, Serialize};
use tablecast_core::Error;

/// A declarative row edit against a named table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowOperationPayload {
    /// Spreadsheet identity as known to the backend.
    pub spreadsheet_name: String,
    /// Sheet containing the table.
    pub sheet_name: String,
    /// Name of the table to edit.
    pub table_name: String,
    /// One of "append", "insert", or "remove".
    pub operation: String,
    /// Row data for append/insert, outer sequence = rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<String>>>,
    /// Body-relative insertion index for "insert" (0-based, header excluded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,
    /// Body-relative indices for "remove" (0-based, header excluded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_indices: Option<Vec<u32>>,
}

/// A batch of cell writes addressed in A1 notation, body-relative.
///
/// `cell_locations` and `cell_values` are parallel sequences and must have
/// equal length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellUpdatePayload {
    pub spreadsheet_name: String,
    pub sheet_name: String,
    pub table_name: String,
    pub cell_locations: Vec<String>,
    pub cell_values: Vec<String>,
}

/// The structured summary returned for every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Success {
        success: bool,
        /// Number of backend requests applied.
        requests_applied: usize,
    },
    Failure {
        success: bool,
        /// Stable snake_case token identifying the failure, e.g.
        /// "index_out_of_range".
        error_kind: String,
        message: String,
    },
}

impl ToolOutcome {
    /// Successful outcome with the number of backend requests applied.
    pub fn applied(requests_applied: usize) -> Self {
        ToolOutcome::Success {
            success: true,
            requests_applied,
        }
    }

    /// Failure outcome derived from a typed error.
    pub fn failure(error: &Error) -> Self {
        ToolOutcome::Failure {
            success: false,
            error_kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }

    /// Fold a translation result into the wire shape.
    pub fn from_result(result: Result<usize, Error>) -> Self {
        match result {
            Ok(n) => Self::applied(n),
            Err(e) => Self::failure(&e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success { .. })
    }
}
