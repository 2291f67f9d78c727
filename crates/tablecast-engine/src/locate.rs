//! Table resolution.

use tracing::debug;

use crate::backend::SpreadsheetBackend;
use tablecast_core::{Error, Result, TableBoundary};

/// Resolve the current boundary of a named table.
///
/// Always queries the backend; boundaries are never cached because external
/// edits can move or resize the table between calls.
pub fn locate<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    spreadsheet: &str,
    sheet: &str,
    table: &str,
) -> Result<TableBoundary> {
    let boundary = backend
        .table_boundary(spreadsheet, sheet, table)?
        .ok_or_else(|| Error::TableNotFound {
            table: table.to_string(),
            sheet: sheet.to_string(),
        })?;
    debug!(
        table,
        sheet,
        start_row = boundary.start_row,
        rows = boundary.row_count,
        cols = boundary.col_count,
        "resolved table boundary"
    );
    Ok(boundary)
}
