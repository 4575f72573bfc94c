//! Shape-independent queries.

use crate::traits::Dispatch;
use crate::types::{Maybe, Outcome, Signaled, Slot, Twin};

/// The query contract shared by every outcome shape.
///
/// Each shape stores its state differently, but all of them answer the same
/// questions: did it succeed, and what is the success payload if so. Generic
/// code written against `Fallible` works with any of them.
///
/// All methods are total; none of them panics or fails.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::Fallible;
/// use outcome_rail::{Maybe, Outcome, Twin};
///
/// fn first_value<O: Fallible<Success = i32>>(items: &[O]) -> i32 {
///     items.iter().find_map(Fallible::as_success).copied().unwrap_or(-1)
/// }
///
/// assert_eq!(first_value(&[Outcome::<i32, ()>::failure(()), Outcome::success(4)]), 4);
/// assert_eq!(first_value(&[Twin::failure(1), Twin::failure(2)]), -1);
/// assert_eq!(first_value(&[Maybe::success(9)]), 9);
/// ```
pub trait Fallible {
    /// The success payload type.
    type Success;

    /// Returns `true` when a success payload is held.
    fn is_success(&self) -> bool;

    /// Returns the success payload, or `None` on failure.
    fn as_success(&self) -> Option<&Self::Success>;

    /// Returns `true` when no success payload is held.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload, or `fallback` on failure.
    #[inline]
    fn value_or<'a>(&'a self, fallback: &'a Self::Success) -> &'a Self::Success {
        self.as_success().unwrap_or(fallback)
    }
}

impl<S, F> Fallible for Outcome<S, F> {
    type Success = S;

    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }

    #[inline]
    fn as_success(&self) -> Option<&S> {
        Outcome::as_success(self)
    }
}

impl<T> Fallible for Twin<T> {
    type Success = T;

    #[inline]
    fn is_success(&self) -> bool {
        Twin::is_success(self)
    }

    #[inline]
    fn as_success(&self) -> Option<&T> {
        Twin::as_success(self)
    }
}

impl<T, St: Slot<T>> Fallible for Maybe<T, St> {
    type Success = T;

    #[inline]
    fn is_success(&self) -> bool {
        Maybe::is_success(self)
    }

    #[inline]
    fn as_success(&self) -> Option<&T> {
        Maybe::as_success(self)
    }
}

impl<S, D: Dispatch> Fallible for Signaled<S, D> {
    type Success = S;

    #[inline]
    fn is_success(&self) -> bool {
        Signaled::is_success(self)
    }

    #[inline]
    fn as_success(&self) -> Option<&S> {
        Signaled::as_success(self)
    }
}

impl<T, E> Fallible for Result<T, E> {
    type Success = T;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn as_success(&self) -> Option<&T> {
        self.as_ref().ok()
    }
}

impl<T> Fallible for Option<T> {
    type Success = T;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn as_success(&self) -> Option<&T> {
        self.as_ref()
    }
}
