//! Storage strategies for outcomes whose failure carries no payload.
//!
//! [`Maybe`](crate::Maybe) is generic over a [`Slot`] so the storage can be
//! chosen per payload type. [`OptionSlot`] works for any `T`; [`BoolSlot`]
//! folds the presence flag and a `bool` payload into a single byte, where
//! "holds `true`" is the success state and "holds `false`" the failure state.
use crate::types::{wrong_alternative, Side};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-payload cell that is either filled (success) or empty (failure).
///
/// The default value of every slot is the empty state.
pub trait Slot<T>: Default {
    /// Builds a slot holding `value`.
    fn filled(value: T) -> Self;

    /// Returns `true` if the slot counts as holding a success payload.
    fn is_filled(&self) -> bool;

    /// Returns the stored payload.
    ///
    /// Implementations that cannot produce a value for the empty state panic.
    fn value(&self) -> &T;

    /// Moves the payload out and leaves the slot empty.
    fn take(&mut self) -> T;

    /// Consumes the slot, returning the payload when filled.
    fn into_value(self) -> Option<T>;

    /// Returns the payload when filled.
    #[inline]
    fn get(&self) -> Option<&T> {
        if self.is_filled() {
            Some(self.value())
        } else {
            None
        }
    }
}

/// Nullable slot backed by `Option<T>`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OptionSlot<T>(Option<T>);

impl<T> OptionSlot<T> {
    /// The empty slot.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// A slot holding `value`.
    #[inline]
    pub const fn filled(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> Default for OptionSlot<T> {
    #[inline]
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Slot<T> for OptionSlot<T> {
    #[inline]
    fn filled(value: T) -> Self {
        Self(Some(value))
    }

    #[inline]
    fn is_filled(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    #[track_caller]
    fn value(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => wrong_alternative(Side::Success),
        }
    }

    #[inline]
    #[track_caller]
    fn take(&mut self) -> T {
        match self.0.take() {
            Some(value) => value,
            None => wrong_alternative(Side::Success),
        }
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.0
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

/// One-byte slot for `bool` payloads.
///
/// The stored boolean doubles as the presence flag, so reading an empty slot
/// is not an error: it simply yields `false`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BoolSlot(bool);

impl BoolSlot {
    /// A slot holding `value`; `false` is the empty state.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }
}

impl Slot<bool> for BoolSlot {
    #[inline]
    fn filled(value: bool) -> Self {
        Self(value)
    }

    #[inline]
    fn is_filled(&self) -> bool {
        self.0
    }

    #[inline]
    fn value(&self) -> &bool {
        &self.0
    }

    #[inline]
    fn take(&mut self) -> bool {
        core::mem::replace(&mut self.0, false)
    }

    #[inline]
    fn into_value(self) -> Option<bool> {
        self.0.then_some(true)
    }
}
