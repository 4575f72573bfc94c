//! The homogeneous shape.

use core::ops::Deref;

use crate::types::{wrong_alternative, NoResult, Side};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An outcome whose success and failure payloads share the type `T`.
///
/// A plain `Result<T, T>` can be built either way, but once it exists there is
/// no way to flip it in place. `Twin` stores a single payload next to an
/// explicit flag and exposes [`set_success`](Self::set_success) and
/// [`set_failure`](Self::set_failure), so code that settles its answer late
/// (the last attempt of a retry loop, say) can overwrite it freely. The last
/// write always wins.
///
/// The default state is a failure holding `T::default()`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Twin;
///
/// let mut status = Twin::<i32>::default();
/// assert!(status.is_failure());
///
/// status.set_success(7);
/// assert_eq!(*status.get_success(), 7);
///
/// status.set_failure(9);
/// assert!(status.is_failure());
/// assert_eq!(*status.get_failure(), 9);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Twin<T> {
    value: T,
    succeeded: bool,
}

impl<T> Twin<T> {
    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { value, succeeded: true }
    }

    /// Creates a failed outcome holding `value`.
    #[inline]
    pub const fn failure(value: T) -> Self {
        Self { value, succeeded: false }
    }

    /// Overwrites the payload and marks the outcome successful.
    #[inline]
    pub fn set_success(&mut self, value: T) {
        self.value = value;
        self.succeeded = true;
    }

    /// Overwrites the payload and marks the outcome failed.
    #[inline]
    pub fn set_failure(&mut self, value: T) {
        self.value = value;
        self.succeeded = false;
    }

    /// Returns `true` if the flag marks a success.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.succeeded
    }

    /// Returns `true` if the flag marks a failure.
    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.succeeded
    }

    /// Returns the payload of a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_success(&self) -> &T {
        if !self.succeeded {
            wrong_alternative(Side::Success);
        }
        &self.value
    }

    /// Returns the payload of a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_failure(&self) -> &T {
        if self.succeeded {
            wrong_alternative(Side::Failure);
        }
        &self.value
    }

    /// Returns the payload if successful, `None` otherwise.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        self.succeeded.then_some(&self.value)
    }

    /// Returns the payload if failed, `None` otherwise.
    #[must_use]
    #[inline]
    pub fn as_failure(&self) -> Option<&T> {
        (!self.succeeded).then_some(&self.value)
    }

    /// Returns the payload if successful, otherwise `fallback`.
    #[must_use]
    #[inline]
    pub fn value_or<'a>(&'a self, fallback: &'a T) -> &'a T {
        if self.succeeded {
            &self.value
        } else {
            fallback
        }
    }

    /// Consumes the outcome, returning the payload if successful and
    /// `fallback` otherwise.
    #[must_use]
    #[inline]
    pub fn into_value_or(self, fallback: T) -> T {
        if self.succeeded {
            self.value
        } else {
            fallback
        }
    }

    /// Returns the payload regardless of which side it belongs to.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Maps the payload while keeping the flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Twin;
    ///
    /// let code = Twin::failure(404u16).map(|c| c.to_string());
    /// assert_eq!(code.get_failure(), "404");
    /// ```
    #[inline]
    pub fn map<U, M>(self, f: M) -> Twin<U>
    where
        M: FnOnce(T) -> U,
    {
        Twin { value: f(self.value), succeeded: self.succeeded }
    }

    /// Converts into `Result<T, T>`.
    #[inline]
    pub fn into_result(self) -> Result<T, T> {
        if self.succeeded {
            Ok(self.value)
        } else {
            Err(self.value)
        }
    }
}

impl<T: Default> Twin<T> {
    /// Moves the success payload out and resets to the default failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Twin;
    ///
    /// let mut t = Twin::success(String::from("answer"));
    /// assert_eq!(t.take_success(), "answer");
    /// assert!(t.is_failure());
    /// assert!(t.get_failure().is_empty());
    /// ```
    #[track_caller]
    pub fn take_success(&mut self) -> T {
        if !self.succeeded {
            wrong_alternative(Side::Success);
        }
        self.succeeded = false;
        core::mem::take(&mut self.value)
    }
}

impl<T: Default> Default for Twin<T> {
    #[inline]
    fn default() -> Self {
        Self::failure(T::default())
    }
}

impl<T: Default> From<NoResult> for Twin<T> {
    #[inline]
    fn from(_: NoResult) -> Self {
        Self::default()
    }
}

impl<T> Deref for Twin<T> {
    type Target = T;

    /// Alias for [`Twin::get_success`].
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.get_success()
    }
}
