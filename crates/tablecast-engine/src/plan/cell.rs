//! Cell update planning.
//!
//! Updates address the table body: row 0 of an update is the first row
//! below the header, column 0 is the table's first column. Validation is
//! all-or-nothing: one bad address means zero requests.

use crate::ops::CellUpdate;
use crate::request::BackendRequest;
use tablecast_core::{CellRange, Error, Result, TableBoundary};

/// Compute the write requests for a batch of cell updates.
///
/// Contiguous same-row updates merge into one rectangular write; everything
/// else becomes an individual-cell write.
pub fn plan_cell_updates(
    boundary: &TableBoundary,
    sheet: &str,
    updates: &[CellUpdate],
) -> Result<Vec<BackendRequest>> {
    // Validate the whole batch before building anything.
    for update in updates {
        if update.address.row >= boundary.body_row_count() {
            return Err(Error::IndexOutOfRange(format!(
                "cell {} targets body row {} but table has {} body rows",
                update.address,
                update.address.row,
                boundary.body_row_count()
            )));
        }
        if update.address.col >= boundary.col_count {
            return Err(Error::IndexOutOfRange(format!(
                "cell {} targets column {} but table has {} columns",
                update.address,
                update.address.col,
                boundary.col_count
            )));
        }
    }

    // Absolute sheet coordinates, row-major order for run detection.
    let mut cells: Vec<(u32, u32, &str)> = updates
        .iter()
        .map(|u| {
            (
                boundary.body_row_to_absolute(u.address.row),
                boundary.column_to_absolute(u.address.col),
                u.value.as_str(),
            )
        })
        .collect();
    cells.sort_by_key(|&(row, col, _)| (row, col));

    let mut requests = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        let (row, start_col, _) = cells[i];
        let mut j = i + 1;
        while j < cells.len()
            && cells[j].0 == row
            && cells[j].1 == cells[j - 1].1 + 1
        {
            j += 1;
        }
        let values: Vec<String> = cells[i..j].iter().map(|&(_, _, v)| v.to_string()).collect();
        let end_col = cells[j - 1].1;
        requests.push(BackendRequest::WriteRange {
            sheet: sheet.to_string(),
            range: CellRange::from_indices(row, start_col, row, end_col),
            values: vec![values],
        });
        i = j;
    }
    Ok(requests)
}
