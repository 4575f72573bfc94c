//! Descriptors naming the signal set and error payload of a [`Signaled`](crate::Signaled).

use core::fmt::Debug;
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static description of a [`Signaled`](crate::Signaled) outcome type.
///
/// A descriptor names the signal enumeration, which of its values means
/// success, which value a fresh or consumed outcome falls back to, and the
/// error payload stored beside failures. Descriptors are never instantiated;
/// they only exist at the type level. Use [`dispatch!`](crate::dispatch) to
/// declare one without writing the impl by hand.
///
/// `SUCCESS` and `FAILURE` must differ. Every [`Signaled`](crate::Signaled)
/// constructor panics on a descriptor where they are equal, so no value of
/// that type can exist.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::Dispatch;
/// use outcome_rail::Signaled;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Step {
///     Done,
///     Again,
///     Abort,
/// }
///
/// struct StepDispatch;
///
/// impl Dispatch for StepDispatch {
///     type Signal = Step;
///     type Error = String;
///     const SUCCESS: Step = Step::Done;
///     const FAILURE: Step = Step::Abort;
/// }
///
/// let again = Signaled::<u32, StepDispatch>::fail(Step::Again, "busy");
/// assert_eq!(again.signal(), Step::Again);
/// assert_eq!(again.error(), "busy");
/// ```
pub trait Dispatch {
    /// The set of signals an outcome can carry.
    type Signal: Copy + PartialEq + Debug;

    /// The error payload stored beside failure signals; `()` for none.
    type Error: Default;

    /// The signal that marks a success payload as present.
    const SUCCESS: Self::Signal;

    /// The signal used by default construction and after consumption.
    const FAILURE: Self::Signal;
}

/// Signals of the built-in two-state descriptor [`Binary`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BinarySignal {
    /// A payload is present.
    Success,
    /// No payload; the default.
    #[default]
    Failure,
}

/// Descriptor for plain success/failure with an optional error payload `E`.
///
/// `Signaled<S, Binary<E>>` behaves like [`Outcome<S, E>`](crate::Outcome)
/// with the checked accessor policy, and `Signaled<S, Binary>` like
/// [`Maybe<S>`](crate::Maybe).
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{Binary, BinarySignal};
/// use outcome_rail::Signaled;
///
/// let o = Signaled::<u8, Binary<&str>>::fail(BinarySignal::Failure, "nope");
/// assert!(o.get_success().is_err());
/// assert_eq!(*o.error(), "nope");
/// ```
pub struct Binary<E = ()>(PhantomData<fn() -> E>);

impl<E: Default> Dispatch for Binary<E> {
    type Signal = BinarySignal;
    type Error = E;
    const SUCCESS: BinarySignal = BinarySignal::Success;
    const FAILURE: BinarySignal = BinarySignal::Failure;
}
