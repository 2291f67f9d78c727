//! Table boundary model
//!
//! A [`TableBoundary`] describes the rectangular region a named table
//! occupies within a sheet at one moment in time. Boundaries are produced
//! fresh by every locate call and never cached: the backend is the source of
//! truth and may change out-of-band between calls.

use crate::error::{Error, Result};

/// The region occupied by a named table: start position, extent, and
/// whether the first row is a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBoundary {
    /// Absolute sheet row of the table's first row (header if present)
    pub start_row: u32,
    /// Absolute sheet column of the table's first column
    pub start_col: u32,
    /// Total rows including the header row
    pub row_count: u32,
    /// Total columns
    pub col_count: u32,
    /// Whether the first row is a header
    pub has_header: bool,
}

impl TableBoundary {
    /// Create a boundary, validating its invariants:
    /// `row_count >= header rows` and `col_count >= 1`.
    pub fn new(
        start_row: u32,
        start_col: u32,
        row_count: u32,
        col_count: u32,
        has_header: bool,
    ) -> Result<Self> {
        if col_count == 0 {
            return Err(Error::InvalidBoundary("column count must be >= 1".into()));
        }
        if has_header && row_count == 0 {
            return Err(Error::InvalidBoundary(
                "table with a header must have at least one row".into(),
            ));
        }
        Ok(Self {
            start_row,
            start_col,
            row_count,
            col_count,
            has_header,
        })
    }

    /// Number of rows occupied by the header (0 or 1)
    pub fn header_offset(&self) -> u32 {
        u32::from(self.has_header)
    }

    /// Number of body rows (total rows minus the header)
    pub fn body_row_count(&self) -> u32 {
        self.row_count - self.header_offset()
    }

    /// Absolute sheet row of body row `index` (0-based, header excluded).
    ///
    /// Does not bounds-check; callers validate against
    /// [`TableBoundary::body_row_count`] first.
    pub fn body_row_to_absolute(&self, index: u32) -> u32 {
        self.start_row + self.header_offset() + index
    }

    /// Absolute sheet row one past the last table row; new appended rows
    /// land here.
    pub fn append_row(&self) -> u32 {
        self.start_row + self.row_count
    }

    /// Absolute sheet column of body column `index` (0-based)
    pub fn column_to_absolute(&self, index: u32) -> u32 {
        self.start_col + index
    }

    /// Whether an absolute sheet row lies within the table body
    pub fn contains_body_row(&self, abs_row: u32) -> bool {
        abs_row >= self.start_row + self.header_offset() && abs_row < self.start_row + self.row_count
    }

    /// Whether an absolute sheet column lies within the table
    pub fn contains_column(&self, abs_col: u32) -> bool {
        abs_col >= self.start_col && abs_col < self.start_col + self.col_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary(start_row: u32, row_count: u32, has_header: bool) -> TableBoundary {
        TableBoundary::new(start_row, 0, row_count, 3, has_header).unwrap()
    }

    #[test]
    fn test_invariants() {
        assert!(TableBoundary::new(0, 0, 5, 0, true).is_err()); // zero columns
        assert!(TableBoundary::new(0, 0, 0, 3, true).is_err()); // header but no rows
        assert!(TableBoundary::new(0, 0, 0, 3, false).is_ok()); // empty headerless table
    }

    #[test]
    fn test_body_row_count_with_header() {
        assert_eq!(boundary(0, 5, true).body_row_count(), 4);
        assert_eq!(boundary(0, 1, true).body_row_count(), 0);
        assert_eq!(boundary(0, 5, false).body_row_count(), 5);
    }

    #[test]
    fn test_body_row_to_absolute() {
        let b = boundary(2, 5, true);
        assert_eq!(b.body_row_to_absolute(0), 3); // first body row is below header
        assert_eq!(b.body_row_to_absolute(3), 6);

        let b = boundary(2, 5, false);
        assert_eq!(b.body_row_to_absolute(0), 2); // no header, body starts at the top
    }

    #[test]
    fn test_append_row() {
        assert_eq!(boundary(0, 5, true).append_row(), 5);
        assert_eq!(boundary(10, 3, false).append_row(), 13);
    }

    #[test]
    fn test_contains_body_row() {
        let b = boundary(2, 5, true);
        assert!(!b.contains_body_row(2)); // header row excluded
        assert!(b.contains_body_row(3));
        assert!(b.contains_body_row(6));
        assert!(!b.contains_body_row(7));
    }

    #[test]
    fn test_contains_column() {
        let b = TableBoundary::new(0, 1, 5, 3, true).unwrap();
        assert!(!b.contains_column(0));
        assert!(b.contains_column(1));
        assert!(b.contains_column(3));
        assert!(!b.contains_column(4));
    }
}
