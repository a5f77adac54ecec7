use std::{fmt, ops::Index};

use num_traits::{One, Zero};

use crate::{Element, MatrixError};

/// A rectangular grid of values with dimensions fixed at construction.
///
/// Elements are stored row-major. The element type defaults to `i32`, but any
/// numeric type works for the arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T = i32> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// The column count is taken from the first row. An empty list gives a
    /// `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if any row's length differs from
    /// the first row's.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a matrix from a fixed-size array of rows.
    ///
    /// Array rows always have equal length, so this cannot fail.
    #[must_use]
    pub fn from_array<const R: usize, const C: usize>(rows: [[T; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns a row as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowOutOfRange`] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        self.check_row(row)?;
        Ok(self.row_slice(row))
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row < self.rows {
            Ok(())
        } else {
            Err(MatrixError::RowOutOfRange {
                row,
                rows: self.rows,
            })
        }
    }

    fn check_col(&self, col: usize) -> Result<(), MatrixError> {
        if col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::ColumnOutOfRange {
                col,
                cols: self.cols,
            })
        }
    }

    /// Returns row `row`, which must be in range.
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowOutOfRange`] or
    /// [`MatrixError::ColumnOutOfRange`] if either index is outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.values[row * self.cols + col])
    }

    /// Returns a copy of a column, one element per row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ColumnOutOfRange`] if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Result<Vec<T>, MatrixError> {
        self.check_col(col)?;
        Ok(self.column_iter(col).collect())
    }

    fn column_iter(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.rows).map(move |r| self.values[r * self.cols + col])
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            values: (0..self.cols).flat_map(|c| self.column_iter(c)).collect(),
        }
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Returns a `rows x cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![T::zero(); rows * cols],
        }
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    /// Returns the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.values[i * n + i] = T::one();
        }
        matrix
    }
}

impl<T: Element> Matrix<T> {
    /// Returns the matrix product `self * other`.
    ///
    /// The result has `self.rows()` rows and `other.cols()` columns. Element
    /// `(i, j)` is the dot product of row `i` of `self` and column `j` of
    /// `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols()` differs
    /// from `other.rows()`, or [`MatrixError::Overflow`] if an integer dot
    /// product does not fit the element type.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            log::debug!(
                "rejecting product of {}x{} and {}x{} matrices",
                self.rows,
                self.cols,
                other.rows,
                other.cols,
            );
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: other.rows,
            });
        }

        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols,
        );

        let mut values = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let row = self.row_slice(i);
            for j in 0..other.cols {
                let value = dot(row, other.column_iter(j)).ok_or_else(|| {
                    log::debug!("dot product overflowed at ({i}, {j})");
                    MatrixError::Overflow { row: i, col: j }
                })?;
                values.push(value);
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            values,
        })
    }
}

/// Sum of pairwise products, or `None` on overflow.
fn dot<T: Element>(row: &[T], column: impl Iterator<Item = T>) -> Option<T> {
    row.iter()
        .zip(column)
        .try_fold(T::zero(), |sum, (&a, b)| T::checked_mul_add(sum, a, b))
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        if matrix.cols == 0 {
            return (0..matrix.rows).map(|_| Vec::new()).collect();
        }

        let cols = matrix.cols;
        let mut values = matrix.values.into_iter();
        (0..matrix.rows)
            .map(|_| values.by_ref().take(cols).collect())
            .collect()
    }
}

/// Panicking element access by `(row, col)`.
///
/// Use [`Matrix::get`] for a checked lookup.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &self.values[row * self.cols + col]
    }
}

/// Formats each row on its own line, every element followed by a space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for value in self.row_slice(r) {
                write!(f, "{value} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
