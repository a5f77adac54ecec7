//! A monadic `Try` type for computations that may fail.
//!
//! [`Try`] runs a computation eagerly and records its outcome as one of two
//! variants:
//!
//! - [`Try::Success`] — the computation produced a value
//! - [`Try::Failure`] — the computation returned an error or panicked, captured
//!   as an opaque [`Cause`]
//!
//! Once built, a `Try` is chained with [`Try::map`], [`Try::flat_map`], and
//! [`Try::filter`], and finally unwrapped with [`Try::get`],
//! [`Try::unwrap_or`], [`Try::ok_or_else`], [`Try::ok`], or [`Try::unwrap`].
//!
//! # Example
//!
//! ```
//! use tutorials_monads::Try;
//!
//! let doubled = Try::of(|| "21".parse::<i32>())
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 0)
//!     .unwrap_or(0);
//! assert_eq!(doubled, 42);
//!
//! let fallback = Try::of(|| "abc".parse::<i32>()).unwrap_or(-1);
//! assert_eq!(fallback, -1);
//! ```

mod cause;
mod monad;

pub use cause::{Cause, Unchecked};
pub use monad::Try;
