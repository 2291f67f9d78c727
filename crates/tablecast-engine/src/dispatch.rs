//! Invocation entry points: payload in, structured outcome out.
//!
//! Each call is stateless: validate the payload, resolve the table fresh,
//! plan, submit. The boundary is a best-effort snapshot; with
//! [`DispatchOptions::verify_boundary`] enabled the table is re-resolved
//! immediately before submission and a mismatch aborts with
//! `ConcurrentModification` instead of writing to stale coordinates.

use tracing::debug;

use crate::backend::{submit_requests, SpreadsheetBackend};
use crate::locate::locate;
use crate::ops::{cell_updates_from_payload, RowOperation};
use crate::plan::{plan_cell_updates, plan_row_operation};
use crate::request::BackendRequest;
use tablecast_core::{Error, Result, TableBoundary};
use tablecast_protocol::{CellUpdatePayload, RowOperationPayload, ToolOutcome};

/// Per-invocation knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    /// Re-resolve the table immediately before submission and abort when
    /// its boundary moved since planning. Costs one extra backend round
    /// trip per call.
    pub verify_boundary: bool,
}

/// Translate and submit a row operation, returning the number of backend
/// requests applied.
pub fn run_row_operation<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    payload: &RowOperationPayload,
    options: DispatchOptions,
) -> Result<usize> {
    // Payload validation happens before any backend traffic.
    let operation = RowOperation::from_payload(payload)?;
    let boundary = locate(
        backend,
        &payload.spreadsheet_name,
        &payload.sheet_name,
        &payload.table_name,
    )?;
    let requests = plan_row_operation(&boundary, &payload.sheet_name, &operation)?;
    submit(backend, payload_identity(payload), boundary, requests, options)
}

/// Translate and submit a batch of cell updates, returning the number of
/// backend requests applied.
pub fn run_cell_update<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    payload: &CellUpdatePayload,
    options: DispatchOptions,
) -> Result<usize> {
    let updates = cell_updates_from_payload(payload)?;
    let boundary = locate(
        backend,
        &payload.spreadsheet_name,
        &payload.sheet_name,
        &payload.table_name,
    )?;
    let requests = plan_cell_updates(&boundary, &payload.sheet_name, &updates)?;
    submit(
        backend,
        (&payload.spreadsheet_name, &payload.sheet_name, &payload.table_name),
        boundary,
        requests,
        options,
    )
}

/// Row-operation entry point in wire shape.
pub fn handle_row_operation<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    payload: &RowOperationPayload,
    options: DispatchOptions,
) -> ToolOutcome {
    ToolOutcome::from_result(run_row_operation(backend, payload, options))
}

/// Cell-update entry point in wire shape.
pub fn handle_cell_update<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    payload: &CellUpdatePayload,
    options: DispatchOptions,
) -> ToolOutcome {
    ToolOutcome::from_result(run_cell_update(backend, payload, options))
}

fn payload_identity(payload: &RowOperationPayload) -> (&str, &str, &str) {
    (
        &payload.spreadsheet_name,
        &payload.sheet_name,
        &payload.table_name,
    )
}

fn submit<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    (spreadsheet, sheet, table): (&str, &str, &str),
    planned_against: TableBoundary,
    requests: Vec<BackendRequest>,
    options: DispatchOptions,
) -> Result<usize> {
    if options.verify_boundary && !requests.is_empty() {
        let current = locate(backend, spreadsheet, sheet, table)?;
        if current != planned_against {
            debug!(table, "boundary moved between planning and submission");
            return Err(Error::ConcurrentModification {
                table: table.to_string(),
            });
        }
    }
    submit_requests(backend, spreadsheet, &requests)
}
