//! The dispatch-tag shape with checked access.

use core::fmt::{self, Debug, Display};

use crate::traits::Dispatch;
use crate::types::{NoResult, OptionSlot, Slot};

/// Error returned when a [`Signaled`] success accessor finds another signal.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{Binary, BinarySignal};
/// use outcome_rail::Signaled;
///
/// let o = Signaled::<u8, Binary>::new();
/// let err = o.get_success().unwrap_err();
/// assert_eq!(err.signal(), BinarySignal::Failure);
/// assert_eq!(err.expected(), BinarySignal::Success);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessError<Sig> {
    signal: Sig,
    expected: Sig,
}

impl<Sig: Copy> AccessError<Sig> {
    /// The signal the outcome actually held.
    #[inline]
    pub const fn signal(&self) -> Sig {
        self.signal
    }

    /// The success signal the accessor required.
    #[inline]
    pub const fn expected(&self) -> Sig {
        self.expected
    }
}

impl<Sig: Debug> Display for AccessError<Sig> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "success payload requested but outcome holds signal {:?} (expected {:?})",
            self.signal, self.expected
        )
    }
}

impl<Sig: Debug> core::error::Error for AccessError<Sig> {}

/// An outcome tagged by a signal from an arbitrary enumeration.
///
/// `Signaled` generalises the other shapes along two axes: the descriptor `D`
/// chooses the signal set (one success signal, one default failure signal, any
/// number of others) and the error payload type, which may be `()`.
///
/// Storage is a nullable success slot, the active signal and an error slot
/// that is default-constructed up front and overwritten by failing
/// constructors. The slot is filled exactly when the signal is
/// [`D::SUCCESS`](Dispatch::SUCCESS).
///
/// Unlike the other shapes, asking for a success payload that is not there is
/// a recoverable error: [`get_success`](Self::get_success) and
/// [`take_success`](Self::take_success) return [`AccessError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{dispatch, signal, Signaled};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Io {
///     Ok,
///     Retry,
///     Fatal,
/// }
///
/// dispatch! {
///     struct IoDispatch: Io {
///         success = Io::Ok,
///         failure = Io::Fatal,
///         error = String,
///     }
/// }
///
/// let o: Signaled<Vec<u8>, IoDispatch> = signal!(Io::Retry, "timeout");
/// assert_eq!(o.signal(), Io::Retry);
/// assert!(!o.is_success());
/// assert_eq!(o.error(), "timeout");
/// ```
#[must_use]
pub struct Signaled<S, D: Dispatch> {
    value: OptionSlot<S>,
    signal: D::Signal,
    error: D::Error,
}

impl<S, D: Dispatch> Signaled<S, D> {
    /// Creates a successful outcome holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor's success and failure signals are equal.
    #[inline]
    #[track_caller]
    pub fn success(value: S) -> Self {
        Self::check_descriptor();
        Self { value: OptionSlot::filled(value), signal: D::SUCCESS, error: D::Error::default() }
    }

    /// Creates the default failure: [`D::FAILURE`](Dispatch::FAILURE) with a
    /// default error payload.
    #[inline]
    pub fn new() -> Self {
        Self::from_signal(D::FAILURE)
    }

    /// Creates a failure carrying `signal` and a default error payload.
    ///
    /// # Panics
    ///
    /// Panics if `signal` is the success signal, which requires a payload.
    #[inline]
    #[track_caller]
    pub fn from_signal(signal: D::Signal) -> Self {
        Self::fail(signal, D::Error::default())
    }

    /// Creates a failure carrying `signal`, building the error payload in
    /// place from `args`.
    ///
    /// `args` is anything the error type converts from: a single value, or a
    /// tuple for multi-argument constructors. When the error type is `()`,
    /// only `()` converts, so passing real arguments does not compile. The
    /// [`signal!`](crate::signal) macro packs a variadic argument list.
    ///
    /// # Panics
    ///
    /// Panics if `signal` is the success signal, or if the descriptor's
    /// success and failure signals are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::{Binary, BinarySignal};
    /// use outcome_rail::Signaled;
    ///
    /// #[derive(Default, Debug, PartialEq)]
    /// struct Timeout {
    ///     host: String,
    ///     millis: u64,
    /// }
    ///
    /// impl From<(&str, u64)> for Timeout {
    ///     fn from((host, millis): (&str, u64)) -> Self {
    ///         Self { host: host.to_string(), millis }
    ///     }
    /// }
    ///
    /// let o = Signaled::<(), Binary<Timeout>>::fail(BinarySignal::Failure, ("db", 250u64));
    /// assert_eq!(o.error().millis, 250);
    /// ```
    #[inline]
    #[track_caller]
    pub fn fail<A>(signal: D::Signal, args: A) -> Self
    where
        D::Error: From<A>,
    {
        Self::check_descriptor();
        assert!(signal != D::SUCCESS, "a success signal needs a success payload");
        Self { value: OptionSlot::default(), signal, error: D::Error::from(args) }
    }

    /// Returns the active signal.
    #[must_use]
    #[inline]
    pub fn signal(&self) -> D::Signal {
        self.signal
    }

    /// Returns `true` iff the active signal is the success signal.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.signal == D::SUCCESS
    }

    /// Returns `true` for any signal other than the success signal.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if the active signal is not the success signal.
    ///
    /// This is the meaningful error view for descriptors whose error type is
    /// `()`.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        self.is_failure()
    }

    /// Returns the error payload.
    ///
    /// While the outcome is successful this is the default error instance, so
    /// consult [`signal`](Self::signal) or [`is_success`](Self::is_success) to
    /// know whether it is meaningful.
    #[must_use]
    #[inline]
    pub fn error(&self) -> &D::Error {
        &self.error
    }

    /// Returns the success payload.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] carrying the active signal when it is not the
    /// success signal.
    #[inline]
    pub fn get_success(&self) -> Result<&S, AccessError<D::Signal>> {
        match self.value.get() {
            Some(value) => Ok(value),
            None => Err(self.access_error()),
        }
    }

    /// Returns the success payload, or `None` for any other signal.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&S> {
        self.value.get()
    }

    /// Moves the success payload out and demotes the outcome to the default
    /// failure signal with a default error payload.
    ///
    /// Calling it again returns an error instead of the old value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the active signal is not the success
    /// signal; the outcome is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::{Binary, BinarySignal};
    /// use outcome_rail::Signaled;
    ///
    /// let mut o = Signaled::<String, Binary>::success("v".into());
    /// assert_eq!(o.take_success().unwrap(), "v");
    /// assert_eq!(o.signal(), BinarySignal::Failure);
    /// assert!(o.take_success().is_err());
    /// ```
    pub fn take_success(&mut self) -> Result<S, AccessError<D::Signal>> {
        if self.is_failure() {
            return Err(self.access_error());
        }
        let value = self.value.take();
        self.signal = D::FAILURE;
        self.error = D::Error::default();
        #[cfg(feature = "tracing")]
        tracing::trace!(signal = ?self.signal, "success payload consumed");
        Ok(value)
    }

    /// Returns the success payload if present, otherwise `fallback`.
    #[must_use]
    #[inline]
    pub fn value_or<'a>(&'a self, fallback: &'a S) -> &'a S {
        self.value.get().unwrap_or(fallback)
    }

    /// Replaces the state with a success holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor's success and failure signals are equal.
    #[inline]
    #[track_caller]
    pub fn set_success(&mut self, value: S) {
        Self::check_descriptor();
        self.value = OptionSlot::filled(value);
        self.signal = D::SUCCESS;
        self.error = D::Error::default();
    }

    /// Replaces the state with a failure carrying `signal` and an error built
    /// from `args`.
    ///
    /// # Panics
    ///
    /// Panics if `signal` is the success signal.
    #[track_caller]
    pub fn set_failure<A>(&mut self, signal: D::Signal, args: A)
    where
        D::Error: From<A>,
    {
        *self = Self::fail(signal, args);
    }

    /// Maps the success payload, keeping signal and error.
    #[inline]
    pub fn map<U, M>(self, f: M) -> Signaled<U, D>
    where
        M: FnOnce(S) -> U,
    {
        Signaled {
            value: match self.value.into_value() {
                Some(value) => OptionSlot::filled(f(value)),
                None => OptionSlot::default(),
            },
            signal: self.signal,
            error: self.error,
        }
    }

    /// Converts into a std `Result`, pairing the failure signal with its error.
    #[inline]
    pub fn into_result(self) -> Result<S, (D::Signal, D::Error)> {
        match self.value.into_value() {
            Some(value) => Ok(value),
            None => Err((self.signal, self.error)),
        }
    }

    // Consuming a success demotes it to `D::FAILURE`, which must not read as
    // a success again.
    #[inline]
    #[track_caller]
    fn check_descriptor() {
        assert!(
            D::SUCCESS != D::FAILURE,
            "dispatch descriptor uses the same signal for success and failure"
        );
    }

    #[cold]
    fn access_error(&self) -> AccessError<D::Signal> {
        #[cfg(feature = "tracing")]
        tracing::debug!(signal = ?self.signal, "success payload requested from non-success outcome");
        AccessError { signal: self.signal, expected: D::SUCCESS }
    }
}

impl<S, D: Dispatch> Default for Signaled<S, D> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D: Dispatch> From<NoResult> for Signaled<S, D> {
    #[inline]
    fn from(_: NoResult) -> Self {
        Self::new()
    }
}

impl<S: Clone, D: Dispatch> Clone for Signaled<S, D>
where
    D::Error: Clone,
{
    fn clone(&self) -> Self {
        Self { value: self.value.clone(), signal: self.signal, error: self.error.clone() }
    }
}

impl<S: PartialEq, D: Dispatch> PartialEq for Signaled<S, D>
where
    D::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.signal == other.signal && self.value == other.value && self.error == other.error
    }
}

impl<S: Eq, D: Dispatch> Eq for Signaled<S, D>
where
    D::Signal: Eq,
    D::Error: Eq,
{
}

impl<S: Debug, D: Dispatch> Debug for Signaled<S, D>
where
    D::Error: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Signaled");
        out.field("signal", &self.signal);
        match self.value.get() {
            Some(value) => out.field("value", value),
            None => out.field("error", &self.error),
        };
        out.finish()
    }
}
