//! Extension traits for lifting std `Result` and `Option` values.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, OutcomeExt};
//!
//! let port = "80".parse::<u16>().into_outcome();
//! assert_eq!(*port.get_success(), 80);
//!
//! let cached = Some(3).into_maybe();
//! assert!(cached.is_success());
//! ```

use crate::traits::Dispatch;
use crate::types::{Maybe, Outcome, Signaled, Twin};

/// Extension trait turning a `Result` into one of the outcome shapes.
pub trait OutcomeExt<T, E> {
    /// Converts into an [`Outcome`], keeping both payloads.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into a [`Maybe`], discarding the error payload.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts into a [`Signaled`], placing the error under `signal`.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Err` and `signal` is the descriptor's success
    /// signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::{Binary, BinarySignal, OutcomeExt};
    /// use outcome_rail::Signaled;
    ///
    /// let res: Result<u8, &str> = Err("disk full");
    /// let s: Signaled<u8, Binary<String>> = res.into_signaled(BinarySignal::Failure);
    /// assert_eq!(s.error(), "disk full");
    /// ```
    fn into_signaled<D>(self, signal: D::Signal) -> Signaled<T, D>
    where
        D: Dispatch,
        D::Error: From<E>;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Ok(value) => Maybe::success(value),
            Err(_) => Maybe::none(),
        }
    }

    #[inline]
    #[track_caller]
    fn into_signaled<D>(self, signal: D::Signal) -> Signaled<T, D>
    where
        D: Dispatch,
        D::Error: From<E>,
    {
        match self {
            Ok(value) => Signaled::success(value),
            Err(error) => Signaled::fail(signal, error),
        }
    }
}

/// Extension trait turning an `Option` into one of the outcome shapes.
pub trait OptionExt<T> {
    /// Converts into a [`Maybe`]; `None` becomes the absent state.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts into an [`Outcome`], using `failure` when `None`.
    fn ok_or_failure<F>(self, failure: F) -> Outcome<T, F>;

    /// Converts into a [`Twin`], using `failure` as the payload when `None`.
    fn into_twin_or(self, failure: T) -> Twin<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::success(value),
            None => Maybe::none(),
        }
    }

    #[inline]
    fn ok_or_failure<F>(self, failure: F) -> Outcome<T, F> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(failure),
        }
    }

    #[inline]
    fn into_twin_or(self, failure: T) -> Twin<T> {
        match self {
            Some(value) => Twin::success(value),
            None => Twin::failure(failure),
        }
    }
}
