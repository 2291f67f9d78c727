//! Backend request model
//!
//! A [`BackendRequest`] is one atomic unit of work against the spreadsheet
//! service: write a rectangular range, open a gap of rows, or delete a run
//! of rows. The planners only ever produce these in the order they must be
//! applied; execution belongs to the backend collaborator.

use std::fmt;
use tablecast_core::{a1_range, CellRange};

/// One ordered unit of work for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    /// Overwrite a rectangular range with values. `values` is row-major and
    /// exactly matches the range's dimensions.
    WriteRange {
        sheet: String,
        range: CellRange,
        values: Vec<Vec<String>>,
    },
    /// Insert `count` blank rows before absolute row `start_row`, shifting
    /// that row and everything below it down.
    InsertRows {
        sheet: String,
        start_row: u32,
        count: u32,
    },
    /// Delete `count` rows starting at absolute row `start_row`, shifting
    /// everything below up.
    DeleteRows {
        sheet: String,
        start_row: u32,
        count: u32,
    },
}

impl BackendRequest {
    /// The native range string this request targets, for logging and for
    /// backends that address writes by range reference.
    pub fn range_ref(&self) -> String {
        match self {
            BackendRequest::WriteRange { sheet, range, .. } => {
                a1_range(sheet, range.start, Some(range.end))
            }
            BackendRequest::InsertRows {
                sheet,
                start_row,
                count,
            }
            | BackendRequest::DeleteRows {
                sheet,
                start_row,
                count,
            } => {
                format!(
                    "{}!{}:{}",
                    tablecast_core::quote_sheet_name(sheet),
                    start_row + 1,
                    start_row + count
                )
            }
        }
    }
}

impl fmt::Display for BackendRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendRequest::WriteRange { range, .. } => {
                write!(f, "write {}", self.range_ref())?;
                write!(f, " ({}x{})", range.row_count(), range.col_count())
            }
            BackendRequest::InsertRows { count, .. } => {
                write!(f, "insert {} row(s) at {}", count, self.range_ref())
            }
            BackendRequest::DeleteRows { count, .. } => {
                write!(f, "delete {} row(s) at {}", count, self.range_ref())
            }
        }
    }
}
