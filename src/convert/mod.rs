//! Conversions between the outcome shapes and std `Result` / `Option`.
//!
//! The `From` impls here cover every lossless direction. The free functions
//! are named helpers for call sites where a function path reads better than
//! `.into()` (iterator adapters, `map` arguments).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("no")), Err("no"));
//! ```

use crate::traits::{Binary, Dispatch};
use crate::types::{Flag, Maybe, Outcome, Signaled, Slot, Twin};

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, T>> for Twin<T> {
    #[inline]
    fn from(result: Result<T, T>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(value) => Self::failure(value),
        }
    }
}

impl<T> From<Twin<T>> for Result<T, T> {
    #[inline]
    fn from(twin: Twin<T>) -> Self {
        twin.into_result()
    }
}

impl<T> From<Twin<T>> for Outcome<T, T> {
    #[inline]
    fn from(twin: Twin<T>) -> Self {
        twin.into_result().into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::success(value),
            None => Self::none(),
        }
    }
}

impl<T, St: Slot<T>> From<Maybe<T, St>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T, St>) -> Self {
        maybe.into_option()
    }
}

impl<S, F> From<Outcome<S, F>> for Maybe<S> {
    /// Drops the failure payload.
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_success().into()
    }
}

impl From<bool> for Flag {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<Flag> for bool {
    #[inline]
    fn from(flag: Flag) -> Self {
        flag.is_success()
    }
}

impl<S, F: Default> From<Outcome<S, F>> for Signaled<S, Binary<F>> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::success(value),
            Outcome::Failure(error) => Self::fail(Binary::<F>::FAILURE, error),
        }
    }
}

impl<S, D: Dispatch> From<&Signaled<S, D>> for bool {
    /// `true` iff the active signal is the success signal.
    #[inline]
    fn from(signaled: &Signaled<S, D>) -> Self {
        signaled.is_success()
    }
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
/// ```
#[inline]
pub fn outcome_to_result<S, F>(outcome: Outcome<S, F>) -> Result<S, F> {
    outcome.into()
}

/// Converts a `Result` into an `Outcome`.
#[inline]
pub fn result_to_outcome<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    result.into()
}

/// Converts a `Twin` into an `Outcome` with identical payload types.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::twin_to_outcome;
/// use outcome_rail::{Outcome, Twin};
///
/// assert_eq!(twin_to_outcome(Twin::failure(3)), Outcome::Failure(3));
/// ```
#[inline]
pub fn twin_to_outcome<T>(twin: Twin<T>) -> Outcome<T, T> {
    twin.into()
}

/// Converts an `Option` into a `Maybe`.
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    option.into()
}

/// Converts a `Signaled` into a `Result`, pairing the failure signal with its
/// error payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::signaled_to_result;
/// use outcome_rail::traits::{Binary, BinarySignal};
/// use outcome_rail::Signaled;
///
/// let s = Signaled::<u8, Binary<&str>>::fail(BinarySignal::Failure, "gone");
/// assert_eq!(signaled_to_result(s), Err((BinarySignal::Failure, "gone")));
/// ```
#[inline]
pub fn signaled_to_result<S, D: Dispatch>(
    signaled: Signaled<S, D>,
) -> Result<S, (D::Signal, D::Error)> {
    signaled.into_result()
}
