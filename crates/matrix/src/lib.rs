//! A fixed-size, row-major dense matrix.
//!
//! [`Matrix`] is rectangular by construction: [`Matrix::new`] rejects ragged
//! rows, and [`Matrix::multiply`] rejects operands whose inner dimensions
//! differ. Element, row, and column access is bounds-checked and reports
//! [`MatrixError`] instead of panicking. Integer products that overflow are
//! reported as [`MatrixError::Overflow`] rather than wrapping.
//!
//! # Example
//!
//! ```
//! use tutorials_matrix::Matrix;
//!
//! let a = Matrix::from_array([[0, 3, 5], [5, 5, 2]]);
//! let b = Matrix::from_array([[3, 4], [3, -2], [4, -2]]);
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product, Matrix::from_array([[29, -16], [38, 6]]));
//! ```
//!
//! # Features
//!
//! - `serde`: serializes a matrix as a list of rows. Deserialization goes
//!   through [`Matrix::new`], so ragged input is rejected. A matrix with no
//!   rows serializes as `[]` regardless of its column count, so a `0 x N`
//!   matrix deserializes as `0 x 0`.

mod element;
mod error;
mod matrix;
#[cfg(feature = "serde")]
mod serialize;

pub use element::Element;
pub use error::MatrixError;
pub use matrix::Matrix;
