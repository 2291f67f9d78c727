//! Operation planners.
//!
//! Given a freshly resolved [`tablecast_core::TableBoundary`] and a
//! validated operation, the planners compute the ordered request list the
//! backend must apply. They never execute anything themselves.

mod cell;
mod row;

pub use cell::plan_cell_updates;
pub use row::plan_row_operation;
