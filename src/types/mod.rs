//! Outcome value types and their storage strategies.
//!
//! Every type in this module holds exactly one of a success payload or a
//! failure indicator. They differ only in how that choice is stored:
//!
//! | Type | Shape | Storage |
//! |------|-------|---------|
//! | [`Outcome<S, F>`] | distinct success/failure types | tagged enum |
//! | [`Twin<T>`] | success and failure share `T` | payload + flag |
//! | [`Maybe<T>`] | failure carries nothing | nullable slot |
//! | [`Flag`] | `bool` success, no failure payload | one `bool` |
//! | [`Signaled<S, D>`] | arbitrary signal set, optional error | slot + signal + error |
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Flag, Maybe, Outcome, Twin};
//!
//! let parsed: Outcome<i32, &str> = Outcome::success(42);
//! assert_eq!(*parsed.get_success(), 42);
//!
//! let mut attempt = Twin::<u8>::default();
//! attempt.set_success(7);
//! assert!(attempt.is_success());
//!
//! let cached: Maybe<i32> = Maybe::none();
//! assert_eq!(*cached.value_or(&0), 0);
//!
//! assert!(Flag::from(true).is_success());
//! ```
use smallvec::SmallVec;

pub mod maybe;
pub mod outcome;
pub mod signaled;
pub mod slot;
pub mod twin;

pub use maybe::*;
pub use outcome::*;
pub use signaled::*;
pub use slot::*;
pub use twin::*;

/// SmallVec-backed collection used when failures are accumulated.
///
/// Uses inline storage for one element, which covers the common case of a
/// single failing item without touching the heap.
pub type FailureVec<F> = SmallVec<[F; 1]>;

/// Marker accepted by every outcome type to build its default failure state.
///
/// Converting it with `From`/`Into` is equivalent to calling `Default::default`
/// but reads better at call sites that mean "there is no result".
///
/// # Examples
///
/// ```
/// use outcome_rail::{Maybe, Outcome, NO_RESULT};
///
/// let missing: Outcome<u32, String> = NO_RESULT.into();
/// assert!(missing.is_failure());
///
/// let absent: Maybe<u32> = NO_RESULT.into();
/// assert!(absent.is_failure());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoResult;

/// The [`NoResult`] marker value.
pub const NO_RESULT: NoResult = NoResult;

/// Which side of an outcome an accessor expected to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Success,
    Failure,
}

/// Aborts an unchecked accessor that found the other alternative.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn wrong_alternative(expected: Side) -> ! {
    match expected {
        Side::Success => panic!("called a success accessor on an outcome holding a failure"),
        Side::Failure => panic!("called a failure accessor on an outcome holding a success"),
    }
}
