use thiserror::Error;

/// Errors that can occur when building or accessing a [`Matrix`](crate::Matrix).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row index is outside `[0, rows)`.
    #[error("row {row} is out of range for a matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// A column index is outside `[0, cols)`.
    #[error("column {col} is out of range for a matrix with {cols} columns")]
    ColumnOutOfRange { col: usize, cols: usize },

    /// The left operand's column count differs from the right operand's row count.
    #[error("cannot multiply: left has {left_cols} columns but right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// An integer dot product does not fit the element type.
    #[error("product overflows at ({row}, {col})")]
    Overflow { row: usize, col: usize },
}
