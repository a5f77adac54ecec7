use std::{any::Any, error::Error as StdError};

use thiserror::Error;

/// The reason a [`Try`](crate::Try) holds no value.
///
/// The monad never inspects a cause itself. Callers that need the original
/// error back can use [`Cause::downcast_ref`] or [`Cause::downcast`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Cause {
    /// A wrapped computation returned an error.
    #[error("{0}")]
    Error(#[source] Box<dyn StdError + Send + Sync>),

    /// A wrapped computation panicked.
    #[error("computation panicked: {message}")]
    Panic { message: String },

    /// The held value was rejected by [`Try::filter`](crate::Try::filter).
    #[error("predicate does not match for {value}")]
    PredicateMismatch { value: String },
}

impl Cause {
    /// Wraps an error returned by a computation.
    ///
    /// Accepts anything convertible into a boxed error, including plain
    /// strings.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Error(error.into())
    }

    /// Builds a cause from the payload of a caught panic.
    ///
    /// An [`Unchecked`] payload raised by [`Try::unwrap`](crate::Try::unwrap)
    /// keeps its inner cause reachable through the error source chain.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Unchecked>() {
            Ok(unchecked) => return Self::Error(unchecked),
            Err(payload) => payload,
        };

        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("non-string panic payload")
        };

        Self::Panic { message }
    }

    /// Returns the wrapped error if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Error(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Consumes the cause and returns the wrapped error if it is of type `E`.
    ///
    /// # Errors
    ///
    /// Returns the cause unchanged if it does not wrap an error of type `E`.
    pub fn downcast<E: StdError + 'static>(self) -> Result<E, Self> {
        match self {
            Self::Error(error) => error.downcast::<E>().map(|e| *e).map_err(Self::Error),
            other => Err(other),
        }
    }

    /// Returns true if the cause is a caught panic.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }

    /// Returns true if the cause was produced by a failed filter.
    #[must_use]
    pub fn is_predicate_mismatch(&self) -> bool {
        matches!(self, Self::PredicateMismatch { .. })
    }
}

/// The panic payload raised by [`Try::unwrap`](crate::Try::unwrap).
///
/// Every failure is flattened into this one kind. The original cause is only
/// available as [`Unchecked::source`].
#[derive(Debug, Error)]
#[error("unchecked failure: {source}")]
pub struct Unchecked {
    #[source]
    pub source: Cause,
}
