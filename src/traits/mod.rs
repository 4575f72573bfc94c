//! Core traits shared by the outcome shapes.
//!
//! - [`Dispatch`]: static descriptor behind [`Signaled`](crate::Signaled)
//! - [`Fallible`]: the query contract every shape implements
//! - [`OutcomeExt`] / [`OptionExt`]: lift std `Result` and `Option` values
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Fallible, OutcomeExt};
//! use outcome_rail::Outcome;
//!
//! fn describe<O: Fallible>(o: &O) -> &'static str {
//!     if o.is_success() { "ok" } else { "failed" }
//! }
//!
//! let parsed: Outcome<u16, _> = "8080".parse::<u16>().into_outcome();
//! assert_eq!(describe(&parsed), "ok");
//! ```

pub mod dispatch;
pub mod fallible;
pub mod outcome_ext;

pub use dispatch::{Binary, BinarySignal, Dispatch};
pub use fallible::Fallible;
pub use outcome_ext::{OptionExt, OutcomeExt};
