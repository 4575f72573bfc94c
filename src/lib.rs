//! A result algebra: value types holding either a success payload or a
//! failure indicator, with storage chosen per shape.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! | Shape | Type | Wrong-side access |
//! |-------|------|-------------------|
//! | `S` vs `F` | [`Outcome`] | panics |
//! | `T` vs `T` | [`Twin`] | panics |
//! | `T` vs nothing | [`Maybe`] | panics |
//! | `bool` vs nothing | [`Flag`] | returns `false` |
//! | signal set + error | [`Signaled`] | returns [`AccessError`] |
//!
//! # Examples
//!
//! ## Core Outcome
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut o: Outcome<i32, String> = Outcome::success(42);
//! assert_eq!(*o.get_success(), 42);
//!
//! // Taking the payload leaves a failure behind.
//! assert_eq!(o.take_success(), 42);
//! assert!(o.is_failure());
//! ```
//!
//! ## Homogeneous Outcome
//!
//! ```
//! use outcome_rail::Twin;
//!
//! let mut last = Twin::<u32>::default();
//! for attempt in 1..=3 {
//!     if attempt == 3 {
//!         last.set_success(attempt);
//!     } else {
//!         last.set_failure(attempt);
//!     }
//! }
//! assert_eq!(*last.get_success(), 3);
//! ```
//!
//! ## Dispatch Signals
//!
//! ```
//! use outcome_rail::{dispatch, signal, Signaled};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Net {
//!     Ok,
//!     Retry,
//!     Fatal,
//! }
//!
//! dispatch! {
//!     struct NetDispatch: Net {
//!         success = Net::Ok,
//!         failure = Net::Fatal,
//!         error = String,
//!     }
//! }
//!
//! let o: Signaled<u32, NetDispatch> = signal!(Net::Retry, "timeout");
//! assert_eq!(o.signal(), Net::Retry);
//! assert!(o.get_success().is_err());
//! assert_eq!(o.error(), "timeout");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcome shapes and std `Result` / `Option`
pub mod convert;
/// Iteration and collection over outcomes
pub mod iter;
/// Macros for declaring dispatch descriptors and building signaled outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Dispatch descriptors and the shared query contract
pub mod traits;
/// Outcome types and storage strategies
pub mod types;

pub use traits::{Dispatch, Fallible, OptionExt, OutcomeExt};
pub use types::{
    AccessError, BoolSlot, FailureVec, Flag, Maybe, NoResult, OptionSlot, Outcome, Signaled, Slot,
    Twin, NO_RESULT,
};
