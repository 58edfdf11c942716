//! Error handling for webtable
//!
//! This module provides a unified error type and result type for all
//! table operations. Malformed markup never produces an error: span
//! attributes fall back to their defaults. Only coordinate lookups and
//! I/O can fail.

use std::fmt;

/// Which coordinate of a lookup fell outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Table error type
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A cell coordinate lies outside the current grid extent
    #[error("Cell ({row}, {column}) is out of range for a {rows}x{columns} table")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A table view was requested for an element that is not a `<table>`
    #[error("Expected a <table> element, found {found}")]
    NotATable { found: String },

    /// IO error (reading HTML input)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn out_of_range(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        TableError::OutOfRange {
            row,
            column,
            rows,
            columns,
        }
    }

    pub fn not_a_table(found: impl Into<String>) -> Self {
        TableError::NotATable {
            found: found.into(),
        }
    }

    /// The offending axis of an out-of-range lookup. The row is reported
    /// when both coordinates are out of range.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            TableError::OutOfRange { row, rows, .. } if row >= rows => Some(Axis::Row),
            TableError::OutOfRange { .. } => Some(Axis::Column),
            _ => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TableError::OutOfRange { .. })
    }
}
