//! Error types for grid construction and coordinate parsing.

/// Errors raised when building a [`CostGrid`](crate::CostGrid) from rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows.
    #[error("grid has no rows")]
    Empty,

    /// The first row has no cells.
    #[error("grid rows have no columns")]
    EmptyRow,

    /// A row length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// The grid is too large to be addressed with `i32` coordinates.
    #[error("grid of {rows}x{cols} cells exceeds the addressable size")]
    TooLarge {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
}

/// Error returned when a `"row,col"` string cannot be parsed into a
/// [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position {input:?}, expected \"row,col\"")]
pub struct ParsePositionError {
    /// The rejected input
    pub input: String,
}
