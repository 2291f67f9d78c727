//! Typed operations and eager payload validation.
//!
//! Tool payloads arrive loosely typed (operation name as a string, all row
//! fields optional). Everything is validated here, before any backend call,
//! so a malformed payload can never cause a partial edit.

use std::collections::BTreeSet;

use tablecast_core::{CellAddress, Error, Result};
use tablecast_protocol::{CellUpdatePayload, RowOperationPayload};

/// A validated row edit against a table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOperation {
    /// Add rows after the current last row.
    Append { rows: Vec<Vec<String>> },
    /// Insert rows at a body-relative index, shifting that row and
    /// everything below it down.
    Insert { at: u32, rows: Vec<Vec<String>> },
    /// Remove the rows at the given body-relative indices.
    Remove { indices: BTreeSet<u32> },
}

impl RowOperation {
    /// Validate a raw payload into a typed operation.
    ///
    /// Unknown operation names are rejected outright rather than falling
    /// through to a default; missing or empty required fields are
    /// [`Error::InvalidPayload`].
    pub fn from_payload(payload: &RowOperationPayload) -> Result<Self> {
        match payload.operation.as_str() {
            "append" => Ok(RowOperation::Append {
                rows: require_rows(payload)?,
            }),
            "insert" => {
                let at = payload.row_index.ok_or_else(|| {
                    Error::InvalidPayload("'insert' requires 'row_index'".into())
                })?;
                Ok(RowOperation::Insert {
                    at,
                    rows: require_rows(payload)?,
                })
            }
            "remove" => {
                let indices = payload.row_indices.as_deref().ok_or_else(|| {
                    Error::InvalidPayload("'remove' requires 'row_indices'".into())
                })?;
                if indices.is_empty() {
                    return Err(Error::InvalidPayload(
                        "'remove' requires at least one row index".into(),
                    ));
                }
                // Duplicates collapse here; the planner sees each row once.
                Ok(RowOperation::Remove {
                    indices: indices.iter().copied().collect(),
                })
            }
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

fn require_rows(payload: &RowOperationPayload) -> Result<Vec<Vec<String>>> {
    let rows = payload.data.clone().ok_or_else(|| {
        Error::InvalidPayload(format!("'{}' requires 'data'", payload.operation))
    })?;
    if rows.is_empty() {
        return Err(Error::InvalidPayload(format!(
            "'{}' requires at least one row of data",
            payload.operation
        )));
    }
    Ok(rows)
}

/// A single cell write, addressed relative to the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    /// Body-relative position: row 0 is the first row below the header.
    pub address: CellAddress,
    pub value: String,
}

/// Pair up and parse a cell-update payload.
///
/// The arity check runs before any address parsing, so mismatched sequences
/// fail with [`Error::ArityMismatch`] even when they also contain malformed
/// addresses.
pub fn cell_updates_from_payload(payload: &CellUpdatePayload) -> Result<Vec<CellUpdate>> {
    if payload.cell_locations.len() != payload.cell_values.len() {
        return Err(Error::ArityMismatch {
            locations: payload.cell_locations.len(),
            values: payload.cell_values.len(),
        });
    }
    payload
        .cell_locations
        .iter()
        .zip(&payload.cell_values)
        .map(|(location, value)| {
            Ok(CellUpdate {
                address: CellAddress::parse(location)?,
                value: value.clone(),
            })
        })
        .collect()
}
