//! End-to-end tests: JSON payload -> locate -> plan -> submit, applied
//! against an in-memory grid so ordering mistakes show up as a wrong final
//! sheet rather than a plausible-looking request list.

use pretty_assertions::assert_eq;
use tablecast_core::{Error, TableBoundary};
use tablecast_engine::{
    handle_cell_update, run_cell_update, run_row_operation, BackendError, BackendRequest,
    DispatchOptions, SpreadsheetBackend,
};
use tablecast_protocol::{CellUpdatePayload, RowOperationPayload, ToolOutcome};

/// A backend holding one table anchored at A1 of one sheet. Requests are
/// applied to a real row-major grid.
struct GridBackend {
    table: String,
    cols: u32,
    has_header: bool,
    rows: Vec<Vec<String>>,
    atomic: bool,
    /// Fail the Nth sequential submit (0-based), simulating a mid-batch
    /// backend error.
    fail_at: Option<usize>,
    submitted: usize,
    locate_calls: usize,
    /// Report one fewer row on the second and later locate calls,
    /// simulating a concurrent external edit.
    drift: bool,
}

impl GridBackend {
    fn new(table: &str, cols: u32, has_header: bool, rows: Vec<Vec<&str>>) -> Self {
        Self {
            table: table.to_string(),
            cols,
            has_header,
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
            atomic: false,
            fail_at: None,
            submitted: 0,
            locate_calls: 0,
            drift: false,
        }
    }

    fn blank_row(&self) -> Vec<String> {
        vec![String::new(); self.cols as usize]
    }

    fn apply(&mut self, request: &BackendRequest) {
        match request {
            BackendRequest::InsertRows {
                start_row, count, ..
            } => {
                for _ in 0..*count {
                    self.rows.insert(*start_row as usize, self.blank_row());
                }
            }
            BackendRequest::DeleteRows {
                start_row, count, ..
            } => {
                let start = *start_row as usize;
                self.rows.drain(start..start + *count as usize);
            }
            BackendRequest::WriteRange { range, values, .. } => {
                while self.rows.len() <= range.end.row as usize {
                    let blank = self.blank_row();
                    self.rows.push(blank);
                }
                for (i, row_values) in values.iter().enumerate() {
                    let row = range.start.row as usize + i;
                    for (j, value) in row_values.iter().enumerate() {
                        self.rows[row][range.start.col as usize + j] = value.clone();
                    }
                }
            }
        }
    }
}

impl SpreadsheetBackend for GridBackend {
    fn table_boundary(
        &mut self,
        _spreadsheet: &str,
        _sheet: &str,
        table: &str,
    ) -> Result<Option<TableBoundary>, BackendError> {
        if table != self.table {
            return Ok(None);
        }
        self.locate_calls += 1;
        let mut row_count = self.rows.len() as u32;
        if self.drift && self.locate_calls > 1 {
            row_count -= 1;
        }
        Ok(Some(
            TableBoundary::new(0, 0, row_count, self.cols, self.has_header)
                .map_err(|e| BackendError::new(e.to_string()))?,
        ))
    }

    fn supports_atomic_batch(&self) -> bool {
        self.atomic
    }

    fn submit_batch(
        &mut self,
        _spreadsheet: &str,
        requests: &[BackendRequest],
    ) -> Result<(), BackendError> {
        for request in requests {
            self.apply(request);
        }
        Ok(())
    }

    fn submit_single(
        &mut self,
        _spreadsheet: &str,
        request: &BackendRequest,
    ) -> Result<(), BackendError> {
        if self.fail_at == Some(self.submitted) {
            return Err(BackendError::new("service unavailable"));
        }
        self.apply(request);
        self.submitted += 1;
        Ok(())
    }
}

fn expenses_backend() -> GridBackend {
    GridBackend::new(
        "Expenses",
        3,
        true,
        vec![
            vec!["Date", "Item", "Cost"],
            vec!["01-02", "Coffee", "4.50"],
            vec!["01-03", "Lunch", "12.00"],
            vec!["01-04", "Taxi", "23.10"],
            vec!["01-05", "Paper", "6.75"],
            vec!["01-06", "Stamps", "2.20"],
        ],
    )
}

fn row_payload(operation: &str) -> RowOperationPayload {
    RowOperationPayload {
        spreadsheet_name: "budget.xlsx".into(),
        sheet_name: "Q1".into(),
        table_name: "Expenses".into(),
        operation: operation.into(),
        data: None,
        row_index: None,
        row_indices: None,
    }
}

fn cell_payload(locations: Vec<&str>, values: Vec<&str>) -> CellUpdatePayload {
    CellUpdatePayload {
        spreadsheet_name: "budget.xlsx".into(),
        sheet_name: "Q1".into(),
        table_name: "Expenses".into(),
        cell_locations: locations.into_iter().map(str::to_string).collect(),
        cell_values: values.into_iter().map(str::to_string).collect(),
    }
}

fn items(backend: &GridBackend) -> Vec<String> {
    backend.rows.iter().skip(1).map(|r| r[1].clone()).collect()
}

#[test]
fn test_append_lands_after_last_row() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("append");
    payload.data = Some(vec![
        vec!["01-07".into(), "Pens".into(), "3.40".into()],
        vec!["01-08".into(), "Toner".into(), "48.00".into()],
    ]);

    let applied =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(applied, 1); // one write, zero shifts
    assert_eq!(backend.rows.len(), 8);
    assert_eq!(backend.rows[6], vec!["01-07", "Pens", "3.40"]);
    assert_eq!(backend.rows[7], vec!["01-08", "Toner", "48.00"]);
}

#[test]
fn test_insert_shifts_existing_rows_down() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("insert");
    payload.row_index = Some(2);
    payload.data = Some(vec![vec!["01-03".into(), "Snacks".into(), "5.00".into()]]);

    run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(
        items(&backend),
        vec!["Coffee", "Lunch", "Snacks", "Taxi", "Paper", "Stamps"]
    );
}

#[test]
fn test_insert_at_body_count_appends() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("insert");
    payload.row_index = Some(5); // body has exactly 5 rows
    payload.data = Some(vec![vec!["01-07".into(), "Pens".into(), "3.40".into()]]);

    run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(backend.rows.last().unwrap()[1], "Pens");
}

#[test]
fn test_insert_past_body_count_fails_cleanly() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("insert");
    payload.row_index = Some(6);
    payload.data = Some(vec![vec!["x".into()]]);

    let err =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange(_)));
    assert_eq!(backend.rows.len(), 6); // nothing applied
}

#[test]
fn test_remove_keeps_surviving_rows() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("remove");
    payload.row_indices = Some(vec![1, 3]);

    run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(items(&backend), vec!["Coffee", "Taxi", "Stamps"]);
}

#[test]
fn test_remove_contiguous_run_is_one_request() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("remove");
    payload.row_indices = Some(vec![2, 1, 1, 3]); // duplicates and unordered

    let applied =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(applied, 1); // one coalesced delete
    assert_eq!(items(&backend), vec!["Coffee", "Stamps"]);
}

#[test]
fn test_remove_rejects_out_of_range_index() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("remove");
    payload.row_indices = Some(vec![0, 5]);

    let err =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange(_)));
    assert_eq!(backend.rows.len(), 6);
}

#[test]
fn test_unknown_operation_never_reaches_backend() {
    let mut backend = expenses_backend();
    let payload = row_payload("truncate");

    let err =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(_)));
    assert_eq!(backend.locate_calls, 0);
}

#[test]
fn test_missing_table() {
    let mut backend = expenses_backend();
    let mut payload = row_payload("append");
    payload.table_name = "Income".into();
    payload.data = Some(vec![vec!["x".into()]]);

    let err =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::TableNotFound { .. }));
}

#[test]
fn test_cell_update_writes_body_relative() {
    let mut backend = expenses_backend();
    // Body B2 is the Item column of the second body row
    let payload = cell_payload(vec!["B2", "C2"], vec!["Dinner", "30.00"]);

    let applied =
        run_cell_update(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(applied, 1); // contiguous pair merges into one write
    assert_eq!(backend.rows[2], vec!["01-03", "Dinner", "30.00"]);
}

#[test]
fn test_cell_update_is_all_or_nothing() {
    let mut backend = expenses_backend();
    let before = backend.rows.clone();
    // Z99 is far outside a 3-column, 5-body-row table
    let payload = cell_payload(vec!["A2", "Z99"], vec!["x", "y"]);

    let outcome = handle_cell_update(&mut backend, &payload, DispatchOptions::default());
    match outcome {
        ToolOutcome::Failure { error_kind, .. } => {
            assert_eq!(error_kind, "index_out_of_range");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(backend.rows, before);
    assert_eq!(backend.submitted, 0);
}

#[test]
fn test_cell_update_arity_mismatch_reported() {
    let mut backend = expenses_backend();
    let payload = cell_payload(vec!["A2", "B2"], vec!["only-one"]);

    let outcome = handle_cell_update(&mut backend, &payload, DispatchOptions::default());
    match outcome {
        ToolOutcome::Failure { error_kind, .. } => assert_eq!(error_kind, "arity_mismatch"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(backend.locate_calls, 0);
}

#[test]
fn test_sequential_partial_failure_reports_applied_count() {
    let mut backend = expenses_backend();
    backend.fail_at = Some(1); // first delete lands, second does not
    let mut payload = row_payload("remove");
    payload.row_indices = Some(vec![0, 2]); // non-contiguous: two requests

    let err =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap_err();
    match err {
        Error::PartialFailure {
            applied,
            total,
            message,
        } => {
            assert_eq!((applied, total), (1, 2));
            assert_eq!(message, "service unavailable");
        }
        other => panic!("expected PartialFailure, got {other:?}"),
    }
    // The descending-order delete of body row 2 (absolute row 3) applied
    assert_eq!(items(&backend), vec!["Coffee", "Lunch", "Paper", "Stamps"]);
}

#[test]
fn test_atomic_backend_applies_everything_at_once() {
    let mut backend = expenses_backend();
    backend.atomic = true;
    let mut payload = row_payload("insert");
    payload.row_index = Some(0);
    payload.data = Some(vec![vec!["01-01".into(), "Badge".into(), "9.99".into()]]);

    let applied =
        run_row_operation(&mut backend, &payload, DispatchOptions::default()).unwrap();
    assert_eq!(applied, 2); // shift + write
    assert_eq!(backend.rows[1][1], "Badge");
}

#[test]
fn test_verify_boundary_detects_concurrent_edit() {
    let mut backend = expenses_backend();
    backend.drift = true;
    let mut payload = row_payload("append");
    payload.data = Some(vec![vec!["01-07".into(), "Pens".into(), "3.40".into()]]);

    let options = DispatchOptions {
        verify_boundary: true,
    };
    let err = run_row_operation(&mut backend, &payload, options).unwrap_err();
    assert!(matches!(err, Error::ConcurrentModification { .. }));
    assert_eq!(backend.rows.len(), 6); // nothing submitted
}

#[test]
fn test_json_payload_round_trip() {
    let mut backend = expenses_backend();
    let payload: RowOperationPayload = serde_json::from_str(
        r#"{
            "spreadsheet_name": "budget.xlsx",
            "sheet_name": "Q1",
            "table_name": "Expenses",
            "operation": "remove",
            "row_indices": [4]
        }"#,
    )
    .unwrap();

    let outcome = tablecast_engine::handle_row_operation(
        &mut backend,
        &payload,
        DispatchOptions::default(),
    );
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["requests_applied"], 1);
    assert_eq!(items(&backend), vec!["Coffee", "Lunch", "Taxi", "Paper"]);
}
