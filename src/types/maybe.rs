//! The optional shape and its boolean specialization.

use core::fmt::{self, Debug};
use core::marker::PhantomData;
use core::ops::Deref;

use crate::types::{BoolSlot, NoResult, OptionSlot, Slot};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An outcome whose failure carries no information beyond "absent".
///
/// Storage is a single nullable [`Slot`]: a filled slot is a success, an
/// empty one a failure. There is no `get_failure`, because there is nothing to
/// return. The slot type defaults to [`OptionSlot`]; [`Flag`] swaps in
/// [`BoolSlot`] for `bool` payloads.
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let absent = Maybe::<i32>::default();
/// assert!(absent.is_failure());
///
/// let present = Maybe::<i32>::success(5);
/// assert_eq!(*present.get_success(), 5);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "St: Serialize", deserialize = "St: Deserialize<'de>"))
)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T, St = OptionSlot<T>> {
    slot: St,
    #[cfg_attr(feature = "serde", serde(skip))]
    _payload: PhantomData<T>,
}

/// The boolean specialization of [`Maybe`]: exactly one `bool` of storage.
///
/// Success means "holds `true`". Constructing from `false` yields a failure,
/// and [`take_success`](Maybe::take_success) resets the flag to `false`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Flag;
///
/// let mut ready = Flag::from(true);
/// assert!(ready.is_success());
/// assert!(ready.take_success());
/// assert!(ready.is_failure());
/// assert!(!*ready.get_success());
/// ```
pub type Flag = Maybe<bool, BoolSlot>;

impl<T, St: Slot<T>> Maybe<T, St> {
    #[inline]
    const fn from_slot(slot: St) -> Self {
        Self { slot, _payload: PhantomData }
    }

    /// Returns `true` if a success payload is present.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.slot.is_filled()
    }

    /// Returns `true` if the outcome is absent.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.slot.is_filled()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// With the default [`OptionSlot`], panics when the outcome is absent.
    /// [`BoolSlot`] never panics and returns `false` instead.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_success(&self) -> &T {
        self.slot.value()
    }

    /// Returns the success payload, or `None` when absent.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns the success payload if present, otherwise `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let absent = Maybe::<u8>::none();
    /// assert_eq!(*absent.value_or(&9), 9);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or<'a>(&'a self, fallback: &'a T) -> &'a T {
        self.slot.get().unwrap_or(fallback)
    }

    /// Consumes the outcome, returning the payload or `fallback`.
    #[must_use]
    #[inline]
    pub fn into_value_or(self, fallback: T) -> T {
        self.slot.into_value().unwrap_or(fallback)
    }

    /// Moves the success payload out and leaves the outcome absent.
    ///
    /// # Panics
    ///
    /// With the default [`OptionSlot`], panics when the outcome is already
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let mut m = Maybe::<Vec<u8>>::success(vec![1, 2]);
    /// assert_eq!(m.take_success(), vec![1, 2]);
    /// assert!(m.is_failure());
    /// ```
    #[inline]
    #[track_caller]
    pub fn take_success(&mut self) -> T {
        self.slot.take()
    }

    /// Converts into an `Option`, `None` meaning failure.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_value()
    }
}

impl<T> Maybe<T> {
    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::from_slot(OptionSlot::filled(value))
    }

    /// Creates the absent (failure) outcome.
    #[inline]
    pub const fn none() -> Self {
        Self::from_slot(OptionSlot::empty())
    }

    /// Maps the success payload.
    #[inline]
    pub fn map<U, M>(self, f: M) -> Maybe<U>
    where
        M: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Maybe::success(f(value)),
            None => Maybe::none(),
        }
    }

    /// Chains a computation that may itself be absent.
    #[inline]
    pub fn and_then<U, M>(self, f: M) -> Maybe<U>
    where
        M: FnOnce(T) -> Maybe<U>,
    {
        match self.into_option() {
            Some(value) => f(value),
            None => Maybe::none(),
        }
    }
}

impl Flag {
    /// Creates a flag; `true` is the success state.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self::from_slot(BoolSlot::new(value))
    }
}

impl<T, St: Slot<T>> Default for Maybe<T, St> {
    #[inline]
    fn default() -> Self {
        Self::from_slot(St::default())
    }
}

impl<T, St: Slot<T>> From<NoResult> for Maybe<T, St> {
    #[inline]
    fn from(_: NoResult) -> Self {
        Self::default()
    }
}

impl<T, St: Slot<T>> Deref for Maybe<T, St> {
    type Target = T;

    /// Alias for [`Maybe::get_success`].
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.get_success()
    }
}

impl<T: Debug, St: Slot<T>> Debug for Maybe<T, St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("Success").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}
