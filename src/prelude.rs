//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     match id {
//!         1 => Outcome::success("root"),
//!         _ => Outcome::failure(format!("unknown id {id}")),
//!     }
//! }
//!
//! assert_eq!(*lookup(1).value_or(&"nobody"), "root");
//! assert!(lookup(2).is_failure());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`dispatch!`], [`signal!`]
//! - **Types**: [`Outcome`], [`Twin`], [`Maybe`], [`Flag`], [`Signaled`], [`NoResult`]
//! - **Traits**: [`Dispatch`], [`Fallible`], [`OutcomeExt`], [`OptionExt`]

// Macros
pub use crate::{dispatch, signal};

// Core types
pub use crate::types::{
    AccessError, FailureVec, Flag, Maybe, NoResult, Outcome, Signaled, Twin, NO_RESULT,
};

// Traits
pub use crate::traits::{Binary, BinarySignal, Dispatch, Fallible, OptionExt, OutcomeExt};
