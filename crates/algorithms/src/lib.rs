//! Small teaching algorithms over integer sequences.
//!
//! - [`peak`] — finds a one-dimensional peak with a linear scan or with
//!   divide and conquer, plus a maximum finder
//! - [`parity`] — even/odd predicates
//!
//! A position `i` is a peak when its value is not smaller than either
//! neighbor that exists:
//!
//! ```text
//! a[i] >= a[i - 1]   (if i > 0)
//! a[i] >= a[i + 1]   (if i < n - 1)
//! ```

pub mod parity;
pub mod peak;
