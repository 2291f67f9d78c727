//! Row operation planning.
//!
//! All indices in a [`RowOperation`] are body-relative; the boundary's
//! header offset is applied here and nowhere else.

use crate::ops::RowOperation;
use crate::request::BackendRequest;
use tablecast_core::{CellRange, Error, Result, TableBoundary};

/// Compute the ordered backend requests for one row operation.
pub fn plan_row_operation(
    boundary: &TableBoundary,
    sheet: &str,
    operation: &RowOperation,
) -> Result<Vec<BackendRequest>> {
    match operation {
        RowOperation::Append { rows } => {
            // New rows land one past the last table row; nothing shifts.
            Ok(vec![write_rows(boundary, sheet, boundary.append_row(), rows)?])
        }
        RowOperation::Insert { at, rows } => {
            let body = boundary.body_row_count();
            if *at > body {
                return Err(Error::IndexOutOfRange(format!(
                    "insert index {} exceeds body row count {}",
                    at, body
                )));
            }
            let target = boundary.body_row_to_absolute(*at);
            // Shift must precede the write, or the write lands on the rows
            // being displaced.
            Ok(vec![
                BackendRequest::InsertRows {
                    sheet: sheet.to_string(),
                    start_row: target,
                    count: rows.len() as u32,
                },
                write_rows(boundary, sheet, target, rows)?,
            ])
        }
        RowOperation::Remove { indices } => {
            let body = boundary.body_row_count();
            for &index in indices {
                if index >= body {
                    return Err(Error::IndexOutOfRange(format!(
                        "remove index {} exceeds body row count {}",
                        index, body
                    )));
                }
            }
            // Absolute rows come from the original boundary, then deletes
            // run top index first so earlier deletions never shift the
            // coordinates of later ones. Contiguous runs collapse into one
            // request.
            let absolute: Vec<u32> = indices
                .iter()
                .map(|&i| boundary.body_row_to_absolute(i))
                .collect();
            let mut runs = coalesce_runs(&absolute);
            runs.reverse();
            Ok(runs
                .into_iter()
                .map(|(start_row, count)| BackendRequest::DeleteRows {
                    sheet: sheet.to_string(),
                    start_row,
                    count,
                })
                .collect())
        }
    }
}

/// Build one full-width write request starting at an absolute row.
///
/// Rows wider than the table are rejected; narrower rows are padded with
/// empty strings so the write stays rectangular.
fn write_rows(
    boundary: &TableBoundary,
    sheet: &str,
    start_row: u32,
    rows: &[Vec<String>],
) -> Result<BackendRequest> {
    if rows.is_empty() {
        return Err(Error::InvalidPayload("no rows to write".into()));
    }
    let width = boundary.col_count as usize;
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() > width {
            return Err(Error::IndexOutOfRange(format!(
                "row data has {} cells but table has {} columns",
                row.len(),
                width
            )));
        }
        let mut padded = row.clone();
        padded.resize(width, String::new());
        values.push(padded);
    }
    Ok(BackendRequest::WriteRange {
        sheet: sheet.to_string(),
        range: CellRange::from_indices(
            start_row,
            boundary.start_col,
            start_row + rows.len() as u32 - 1,
            boundary.start_col + boundary.col_count - 1,
        ),
        values,
    })
}

/// Collapse sorted absolute rows into (start, count) runs, ascending.
fn coalesce_runs(sorted: &[u32]) -> Vec<(u32, u32)> {
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for &row in sorted {
        match runs.last_mut() {
            Some((start, count)) if *start + *count == row => *count += 1,
            _ => runs.push((row, 1)),
        }
    }
    runs
}
