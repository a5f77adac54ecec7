use std::{
    error::Error as StdError,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::{Cause, Unchecked};

/// The outcome of a computation that may fail.
///
/// A `Try` is built once, by running a computation with [`Try::of`] or
/// [`Try::catching`], and is immutable afterwards. Chained operations consume
/// it and produce a new `Try`.
///
/// # Catching
///
/// [`Try::of`], [`Try::catching`], [`Try::map`], and [`Try::try_map`] convert
/// errors and panics raised by the computation into [`Try::Failure`].
/// [`Try::flat_map`] does not: a panic inside its function unwinds to the
/// caller, and the `Try` it returns is passed through as is.
#[derive(Debug)]
#[must_use = "a `Try` may hold a failure that should be handled"]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Cause),
}

impl<T> Try<T> {
    /// Runs `computation` once and captures its outcome.
    ///
    /// An `Err` becomes a [`Cause::Error`] and a panic becomes a
    /// [`Cause::Panic`]. This function never panics itself.
    pub fn of<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::captured(Cause::new(error)),
            Err(payload) => Self::captured(Cause::from_panic(payload)),
        }
    }

    /// Runs an infallible `computation` once, capturing a panic as a failure.
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::captured(Cause::from_panic(payload)),
        }
    }

    /// Wraps a value that is already known.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error that is already known.
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Failure(Cause::new(error))
    }

    fn captured(cause: Cause) -> Self {
        log::debug!("computation failed: {cause}");
        Self::Failure(cause)
    }

    /// Transforms the held value.
    ///
    /// A panic inside `f` becomes a failure. A failure is passed through with
    /// its original cause.
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::catching(|| f(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transforms the held value with a fallible function.
    ///
    /// Both an `Err` and a panic from `f` become a failure.
    pub fn try_map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        match self {
            Self::Success(value) => Try::of(|| f(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Chains a computation that itself returns a `Try`.
    ///
    /// The result of `f` is returned without further wrapping. Unlike
    /// [`Try::map`], a panic inside `f` is not caught.
    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Keeps a success only if its value satisfies `predicate`.
    ///
    /// A rejected value becomes a [`Cause::PredicateMismatch`] failure that
    /// records the value's `Debug` form. A failure is returned unchanged.
    /// Payloads without a `Debug` impl go through [`Try::filter_with`].
    ///
    /// A panic inside `predicate` is not caught.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Debug,
    {
        self.filter_with(predicate, |value| format!("{value:?}"))
    }

    /// Like [`Try::filter`], but `describe` renders a rejected value for the
    /// [`Cause::PredicateMismatch`] message.
    ///
    /// `describe` only runs when `predicate` rejects the value.
    pub fn filter_with<P, D>(self, predicate: P, describe: D) -> Self
    where
        P: FnOnce(&T) -> bool,
        D: FnOnce(&T) -> String,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    let value = describe(&value);
                    log::trace!("filter rejected {value}");
                    Self::Failure(Cause::PredicateMismatch { value })
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Returns the held value, or the original cause of the failure.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Cause`] if this is a failure.
    pub fn get(self) -> Result<T, Cause> {
        self.into_result()
    }

    /// Returns the held value, or `default` if this is a failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the held value, or computes one from the cause.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => f(cause),
        }
    }

    /// Returns the held value, or the error built by `supplier`.
    ///
    /// The original cause is discarded.
    ///
    /// # Errors
    ///
    /// Returns the supplied error if this is a failure.
    pub fn ok_or_else<X, F>(self, supplier: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(supplier()),
        }
    }

    /// Converts into an `Option`, discarding any cause.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns true if this is a success.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_successful()
    }

    /// Returns a reference to the held value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Runs `action` on the held value and returns `self`.
    ///
    /// A panic inside `action` is not caught.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a fallible `action` on the held value.
    ///
    /// # Errors
    ///
    /// Returns the action's error, dropping `self`.
    pub fn try_on_success<E, F>(self, action: F) -> Result<Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        if let Self::Success(value) = &self {
            action(value)?;
        }
        Ok(self)
    }

    /// Runs `action` on the cause and returns `self`.
    ///
    /// A panic inside `action` is not caught.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Cause),
    {
        if let Self::Failure(cause) = &self {
            action(cause);
        }
        self
    }

    /// Runs a fallible `action` on the cause.
    ///
    /// # Errors
    ///
    /// Returns the action's error, dropping `self`.
    pub fn try_on_failure<E, F>(self, action: F) -> Result<Self, E>
    where
        F: FnOnce(&Cause) -> Result<(), E>,
    {
        if let Self::Failure(cause) = &self {
            action(cause)?;
        }
        Ok(self)
    }

    /// Returns the held value, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with an [`Unchecked`] payload wrapping the original cause. The
    /// payload can be recovered with [`std::panic::catch_unwind`], and a
    /// surrounding [`Try::of`] or [`Try::map`] keeps it as the failure's
    /// source.
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => panic::panic_any(Unchecked { source: cause }),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Cause`] if this is a failure.
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }
}

impl<T> Try<Option<T>> {
    /// Converts into an `Option`, treating a `Success(None)` as empty.
    #[must_use]
    pub fn ok_flatten(self) -> Option<T> {
        self.ok().flatten()
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Cause> {
    fn from(attempt: Try<T>) -> Self {
        attempt.into_result()
    }
}
