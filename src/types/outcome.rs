//! The core two-payload shape.

use core::ops::Deref;

use crate::types::{wrong_alternative, NoResult, Side};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value holding either a success payload `S` or a failure payload `F`.
///
/// `Outcome` is the core shape of the algebra: the two alternatives have
/// distinct types, so the enum discriminant alone tells them apart and no
/// extra flag is stored. When both sides share one type use [`Twin`](crate::Twin),
/// and when failure carries no payload use [`Maybe`](crate::Maybe).
///
/// # Accessor policy
///
/// [`get_success`](Self::get_success), [`get_failure`](Self::get_failure) and
/// [`take_success`](Self::take_success) assume the caller already checked
/// [`is_success`](Self::is_success). Reaching the wrong alternative is a
/// programming error and panics; the total accessors
/// ([`as_success`](Self::as_success), [`value_or`](Self::value_or)) never do.
///
/// # Default state
///
/// A default-constructed outcome is always a failure holding `F::default()`,
/// so an uninitialised outcome can never be mistaken for a success.
///
/// # Type Parameters
///
/// * `S` - The success payload type
/// * `F` - The failure payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, String>::success(42);
/// assert!(ok.is_success());
/// assert_eq!(*ok.get_success(), 42);
///
/// let bad = Outcome::<i32, String>::failure("bad".to_string());
/// assert!(bad.is_failure());
/// assert_eq!(bad.get_failure(), "bad");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<S, F> {
    /// The operation succeeded with a payload.
    Success(S),
    /// The operation failed with a failure payload.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, u8>::success("done");
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<u32, &str>::failure("timeout");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a success payload.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure payload.
    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(42);
    /// assert_eq!(*o.get_success(), 42);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_success(&self) -> &S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => wrong_alternative(Side::Success),
        }
    }

    /// Returns a reference to the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("bad");
    /// assert_eq!(*o.get_failure(), "bad");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_failure(&self) -> &F {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => wrong_alternative(Side::Failure),
        }
    }

    /// Returns the success payload, or `None` for a failure.
    #[must_use]
    #[inline]
    pub const fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, or `None` for a success.
    #[must_use]
    #[inline]
    pub const fn as_failure(&self) -> Option<&F> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Returns the success payload if present, otherwise `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::<i32, &str>::success(3);
    /// let bad = Outcome::<i32, &str>::failure("nope");
    /// assert_eq!(*ok.value_or(&0), 3);
    /// assert_eq!(*bad.value_or(&0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or<'a>(&'a self, fallback: &'a S) -> &'a S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Consumes the outcome, returning the success payload or `fallback`.
    #[must_use]
    #[inline]
    pub fn into_value_or(self, fallback: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Converts `&Outcome<S, F>` into `Outcome<&S, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(o, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_failure<G, M>(self, f: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half), Outcome::Success(4));
    /// assert!(Outcome::success(3).and_then(half).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> Outcome<U, F>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Extracts the success payload, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }
}

impl<S, F: Default> Outcome<S, F> {
    /// Moves the success payload out and demotes the outcome to a failure.
    ///
    /// After the call the outcome holds `F::default()`, so the consumed value
    /// can never be read again through this outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds a failure; a second call after a successful
    /// take therefore panics too.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut o = Outcome::<String, u8>::success("payload".to_string());
    /// assert_eq!(o.take_success(), "payload");
    /// assert!(o.is_failure());
    /// assert_eq!(*o.get_failure(), 0);
    /// ```
    #[track_caller]
    pub fn take_success(&mut self) -> S {
        match core::mem::replace(self, Self::Failure(F::default())) {
            Self::Success(value) => value,
            failed => {
                *self = failed;
                wrong_alternative(Side::Success)
            }
        }
    }
}

impl<S, F: Default> Default for Outcome<S, F> {
    #[inline]
    fn default() -> Self {
        Self::Failure(F::default())
    }
}

impl<S, F: Default> From<NoResult> for Outcome<S, F> {
    #[inline]
    fn from(_: NoResult) -> Self {
        Self::default()
    }
}

impl<S, F> Deref for Outcome<S, F> {
    type Target = S;

    /// Alias for [`Outcome::get_success`].
    #[inline]
    #[track_caller]
    fn deref(&self) -> &S {
        self.get_success()
    }
}
