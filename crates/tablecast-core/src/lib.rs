//! # tablecast-core
//!
//! Core addressing and table-boundary types for the tablecast translation
//! engine.
//!
//! This crate provides the pure data types shared across tablecast:
//! - [`CellAddress`] and [`CellRange`] - A1-style cell addressing
//! - [`TableBoundary`] - the region a named table occupies within a sheet
//! - [`Error`] - the typed failure taxonomy for every translation path
//!
//! ## Example
//!
//! ```rust
//! use tablecast_core::{CellAddress, TableBoundary};
//!
//! let addr = CellAddress::parse("C10").unwrap();
//! assert_eq!((addr.row, addr.col), (9, 2));
//!
//! let boundary = TableBoundary::new(0, 0, 5, 3, true).unwrap();
//! assert_eq!(boundary.body_row_count(), 4);
//! assert_eq!(boundary.body_row_to_absolute(addr.row), 10);
//! ```

pub mod address;
pub mod boundary;
pub mod error;

// Re-exports for convenience
pub use address::{a1_range, quote_sheet_name, CellAddress, CellRange};
pub use boundary::TableBoundary;
pub use error::{Error, Result};
