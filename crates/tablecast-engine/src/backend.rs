//! The spreadsheet backend collaborator and the batch submission adapter.
//!
//! The trait is deliberately narrow: resolve a table boundary, report
//! whether multi-request submission is transactional, and apply requests.
//! Everything else (auth, transport, retries) lives behind it.

use thiserror::Error;
use tracing::{debug, info};

use crate::request::BackendRequest;
use tablecast_core::{Error as CoreError, Result, TableBoundary};

/// Transport or service failure reported by a backend.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<BackendError> for CoreError {
    fn from(e: BackendError) -> Self {
        CoreError::BackendUnavailable(e.0)
    }
}

/// The remote spreadsheet service, already authenticated.
///
/// Boundaries returned by [`SpreadsheetBackend::table_boundary`] are
/// snapshots; callers must re-resolve before every operation rather than
/// caching them.
pub trait SpreadsheetBackend {
    /// Resolve the current boundary of a named table, or `None` when no
    /// table with that name exists in the sheet.
    fn table_boundary(
        &mut self,
        spreadsheet: &str,
        sheet: &str,
        table: &str,
    ) -> std::result::Result<Option<TableBoundary>, BackendError>;

    /// Whether [`SpreadsheetBackend::submit_batch`] applies requests as one
    /// transaction. Backends without transactional batching return `false`
    /// and receive requests one at a time via
    /// [`SpreadsheetBackend::submit_single`].
    fn supports_atomic_batch(&self) -> bool;

    /// Apply all requests as a single transaction. Only called when
    /// [`SpreadsheetBackend::supports_atomic_batch`] is true.
    fn submit_batch(
        &mut self,
        spreadsheet: &str,
        requests: &[BackendRequest],
    ) -> std::result::Result<(), BackendError>;

    /// Apply one request. Only called when atomic batching is unsupported.
    fn submit_single(
        &mut self,
        spreadsheet: &str,
        request: &BackendRequest,
    ) -> std::result::Result<(), BackendError>;
}

/// Submit a planned request list, atomically when the backend supports it,
/// otherwise sequentially in planner order.
///
/// Returns the number of requests applied. A sequential failure after some
/// requests already applied surfaces as
/// [`tablecast_core::Error::PartialFailure`] with that count; no rollback is
/// attempted because the backend offers no compensating primitive.
pub fn submit_requests<B: SpreadsheetBackend + ?Sized>(
    backend: &mut B,
    spreadsheet: &str,
    requests: &[BackendRequest],
) -> Result<usize> {
    if requests.is_empty() {
        return Ok(0);
    }

    if backend.supports_atomic_batch() {
        debug!(count = requests.len(), "submitting atomic batch");
        backend.submit_batch(spreadsheet, requests)?;
        info!(applied = requests.len(), spreadsheet, "batch applied");
        return Ok(requests.len());
    }

    // Sequential fallback. Order is load-bearing: the planner computed
    // later requests against coordinates the earlier ones establish.
    for (applied, request) in requests.iter().enumerate() {
        debug!(%request, "submitting");
        if let Err(e) = backend.submit_single(spreadsheet, request) {
            if applied == 0 {
                return Err(CoreError::BackendUnavailable(e.0));
            }
            return Err(CoreError::PartialFailure {
                applied,
                total: requests.len(),
                message: e.0,
            });
        }
    }
    info!(applied = requests.len(), spreadsheet, "batch applied sequentially");
    Ok(requests.len())
}
