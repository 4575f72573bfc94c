//! Declarative helpers for the dispatch-tag outcome.
//!
//! - [`macro@crate::dispatch`] - Declares a zero-sized descriptor type and its
//!   [`Dispatch`](crate::traits::Dispatch) impl in one go.
//! - [`macro@crate::signal`] - Builds a [`Signaled`](crate::Signaled) from a
//!   signal and a variadic list of error-constructor arguments.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{dispatch, signal, Signaled};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! pub enum Fetch {
//!     Hit,
//!     Miss,
//!     Stale,
//! }
//!
//! dispatch! {
//!     /// Cache lookups; a miss carries no error payload.
//!     pub struct CacheDispatch: Fetch {
//!         success = Fetch::Hit,
//!         failure = Fetch::Miss,
//!     }
//! }
//!
//! let miss: Signaled<u64, CacheDispatch> = signal!();
//! assert_eq!(miss.signal(), Fetch::Miss);
//! assert!(miss.has_error());
//!
//! let stale: Signaled<u64, CacheDispatch> = signal!(Fetch::Stale);
//! assert_eq!(stale.signal(), Fetch::Stale);
//! ```

/// Declares a dispatch descriptor.
///
/// Expands to a unit struct implementing [`Dispatch`](crate::traits::Dispatch)
/// with the given signal type, success and default-failure signals, and error
/// payload type. Omitting `error` selects `()`.
///
/// # Syntax
///
/// ```text
/// dispatch! {
///     $(#[attr])* $vis struct Name: SignalType {
///         success = <const expr>,
///         failure = <const expr>,
///         error = ErrorType,   // optional
///     }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::Dispatch;
/// use outcome_rail::dispatch;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Http {
///     Ok,
///     NotFound,
///     Internal,
/// }
///
/// dispatch! {
///     struct HttpDispatch: Http {
///         success = Http::Ok,
///         failure = Http::Internal,
///         error = String,
///     }
/// }
///
/// assert_eq!(<HttpDispatch as Dispatch>::SUCCESS, Http::Ok);
/// assert_eq!(<HttpDispatch as Dispatch>::FAILURE, Http::Internal);
/// ```
#[macro_export]
macro_rules! dispatch {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $signal:ty {
            success = $success:expr,
            failure = $failure:expr,
            error = $error:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::traits::Dispatch for $name {
            type Signal = $signal;
            type Error = $error;
            const SUCCESS: $signal = $success;
            const FAILURE: $signal = $failure;
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $signal:ty {
            success = $success:expr,
            failure = $failure:expr $(,)?
        }
    ) => {
        $crate::dispatch! {
            $(#[$meta])*
            $vis struct $name : $signal {
                success = $success,
                failure = $failure,
                error = (),
            }
        }
    };
}

/// Builds a [`Signaled`](crate::Signaled) outcome from a signal and optional
/// error-constructor arguments.
///
/// # Syntax
///
/// - `signal!()` - default failure signal, default error
/// - `signal!(sig)` - `sig` with a default error
/// - `signal!(sig, arg)` - error built with `From<arg>`
/// - `signal!(sig, a, b, ...)` - error built with `From<(a, b, ...)>`
///
/// The target type comes from inference, usually a `let` annotation or the
/// enclosing function's return type. A success signal is rejected at runtime
/// because it needs a payload; use [`Signaled::success`](crate::Signaled::success).
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{Binary, BinarySignal};
/// use outcome_rail::{signal, Signaled};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Rejected {
///     field: &'static str,
///     code: u16,
/// }
///
/// impl From<(&'static str, u16)> for Rejected {
///     fn from((field, code): (&'static str, u16)) -> Self {
///         Self { field, code }
///     }
/// }
///
/// let r: Signaled<(), Binary<Rejected>> = signal!(BinarySignal::Failure, "email", 422u16);
/// assert_eq!(r.error(), &Rejected { field: "email", code: 422 });
/// ```
///
/// A descriptor whose error type is `()` accepts no arguments; this does not
/// compile:
///
/// ```compile_fail
/// use outcome_rail::traits::{Binary, BinarySignal};
/// use outcome_rail::{signal, Signaled};
///
/// let _: Signaled<u8, Binary> = signal!(BinarySignal::Failure, "x");
/// ```
#[macro_export]
macro_rules! signal {
    () => {
        $crate::Signaled::new()
    };
    ($signal:expr $(,)?) => {
        $crate::Signaled::from_signal($signal)
    };
    ($signal:expr, $arg:expr $(,)?) => {
        $crate::Signaled::fail($signal, $arg)
    };
    ($signal:expr, $($arg:expr),+ $(,)?) => {
        $crate::Signaled::fail($signal, ($($arg),+))
    };
}
