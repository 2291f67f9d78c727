//! # tablecast-engine
//!
//! Translates declarative, tool-style table edits (row append/insert/remove,
//! cell updates by A1 address) into the ordered raw-range requests a
//! spreadsheet backend understands.
//!
//! The engine is purely computational: every entry point is a function of
//! its payload and the backend's answers, with no state retained between
//! calls. The backend itself sits behind the
//! [`SpreadsheetBackend`] trait and is expected to handle auth, transport,
//! and retries on its own.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablecast_engine::{handle_row_operation, DispatchOptions};
//! use tablecast_protocol::RowOperationPayload;
//!
//! let payload: RowOperationPayload = serde_json::from_str(request_json)?;
//! let outcome = handle_row_operation(&mut backend, &payload, DispatchOptions::default());
//! ```

pub mod backend;
pub mod dispatch;
pub mod locate;
pub mod ops;
pub mod plan;
pub mod request;

// Re-exports for convenience
pub use backend::{submit_requests, BackendError, SpreadsheetBackend};
pub use dispatch::{
    handle_cell_update, handle_row_operation, run_cell_update, run_row_operation,
    DispatchOptions,
};
pub use locate::locate;
pub use ops::{cell_updates_from_payload, CellUpdate, RowOperation};
pub use plan::{plan_cell_updates, plan_row_operation};
pub use request::BackendRequest;
