use outcome_rail::traits::{Binary, BinarySignal, Dispatch};
use outcome_rail::{dispatch, signal, AccessError, Signaled, NO_RESULT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Io {
    Ok,
    Retry,
    Fatal,
}

dispatch! {
    struct IoDispatch: Io {
        success = Io::Ok,
        failure = Io::Fatal,
        error = String,
    }
}

dispatch! {
    struct BareDispatch: Io {
        success = Io::Ok,
        failure = Io::Fatal,
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
struct Timeout {
    host: String,
    millis: u64,
}

impl From<(&str, u64)> for Timeout {
    fn from((host, millis): (&str, u64)) -> Self {
        Self { host: host.to_string(), millis }
    }
}

#[test]
fn tag_with_argument_builds_error_in_place() {
    let o: Signaled<u32, IoDispatch> = Signaled::fail(Io::Retry, "timeout");

    assert_eq!(o.signal(), Io::Retry);
    assert!(!o.is_success());
    assert!(!bool::from(&o));
    assert_eq!(o.error(), "timeout");
}

#[test]
fn multiple_arguments_round_trip_through_error_constructor() {
    let o: Signaled<(), Binary<Timeout>> = signal!(BinarySignal::Failure, "db", 250u64);

    assert_eq!(o.signal(), BinarySignal::Failure);
    assert_eq!(o.error(), &Timeout { host: "db".into(), millis: 250 });
}

#[test]
fn zero_arguments_yield_default_failure() {
    let o = Signaled::<u32, IoDispatch>::new();
    assert_eq!(o.signal(), Io::Fatal);
    assert_eq!(o.error(), "");

    let d = Signaled::<u32, IoDispatch>::default();
    assert_eq!(d, o);

    let marked: Signaled<u32, IoDispatch> = NO_RESULT.into();
    assert_eq!(marked.signal(), <IoDispatch as Dispatch>::FAILURE);
}

#[test]
fn success_payload_is_readable() {
    let o = Signaled::<u32, IoDispatch>::success(7);

    assert!(o.is_success());
    assert!(bool::from(&o));
    assert_eq!(o.signal(), Io::Ok);
    assert_eq!(o.get_success(), Ok(&7));
    assert_eq!(*o.value_or(&0), 7);
}

#[test]
fn error_on_success_is_the_default_instance() {
    let o = Signaled::<u32, IoDispatch>::success(1);
    assert_eq!(o.error(), "");
    assert!(!o.has_error());
}

#[test]
fn get_success_on_failure_is_recoverable() {
    let o: Signaled<u32, IoDispatch> = signal!(Io::Retry, "busy");

    let err = o.get_success().unwrap_err();
    assert_eq!(err.signal(), Io::Retry);
    assert_eq!(err.expected(), Io::Ok);
    assert_eq!(*o.value_or(&99), 99);
}

#[test]
fn access_error_displays_signals() {
    let o = Signaled::<u8, BareDispatch>::from_signal(Io::Retry);
    let err: AccessError<Io> = o.get_success().unwrap_err();

    let text = err.to_string();
    assert!(text.contains("Retry"));
    assert!(text.contains("Ok"));

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), text);
}

#[test]
fn take_success_demotes_and_is_idempotent() {
    let mut o = Signaled::<String, IoDispatch>::success("body".into());

    assert_eq!(o.take_success().unwrap(), "body");
    assert_eq!(o.signal(), Io::Fatal);
    assert!(!o.is_success());
    assert_eq!(o.error(), "");

    let again = o.take_success().unwrap_err();
    assert_eq!(again.signal(), Io::Fatal);
}

#[test]
fn take_success_on_failure_leaves_state_untouched() {
    let mut o: Signaled<String, IoDispatch> = signal!(Io::Retry, "later");

    assert!(o.take_success().is_err());
    assert_eq!(o.signal(), Io::Retry);
    assert_eq!(o.error(), "later");
}

#[test]
fn unit_error_descriptor_reports_failure_as_bool() {
    let ok = Signaled::<u8, BareDispatch>::success(1);
    let retry: Signaled<u8, BareDispatch> = signal!(Io::Retry);

    assert!(!ok.has_error());
    assert!(retry.has_error());
}

#[test]
fn setters_replace_state() {
    let mut o = Signaled::<u32, IoDispatch>::new();

    o.set_success(5);
    assert_eq!(o.get_success(), Ok(&5));
    assert_eq!(o.error(), "");

    o.set_failure(Io::Retry, "again");
    assert_eq!(o.signal(), Io::Retry);
    assert_eq!(o.error(), "again");
    assert!(o.get_success().is_err());
}

#[test]
#[should_panic(expected = "success signal needs a success payload")]
fn failing_with_success_signal_panics() {
    let _ = Signaled::<u32, IoDispatch>::fail(Io::Ok, "nope");
}

#[test]
fn map_and_into_result_keep_signal() {
    let ok = Signaled::<u32, IoDispatch>::success(2).map(|x| x * 3);
    assert_eq!(ok.into_result(), Ok(6));

    let bad: Signaled<u32, IoDispatch> = signal!(Io::Retry, "x");
    let mapped = bad.map(|x| x + 1);
    assert_eq!(mapped.into_result(), Err((Io::Retry, "x".to_string())));
}

#[test]
fn debug_shows_value_or_error() {
    let ok = Signaled::<u8, IoDispatch>::success(1);
    assert!(format!("{ok:?}").contains("value"));

    let bad: Signaled<u8, IoDispatch> = signal!(Io::Retry, "oops");
    let text = format!("{bad:?}");
    assert!(text.contains("Retry"));
    assert!(text.contains("oops"));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lone {
    Only,
    Other,
}

dispatch! {
    struct SameSignalDispatch: Lone {
        success = Lone::Only,
        failure = Lone::Only,
    }
}

#[test]
#[should_panic(expected = "same signal for success and failure")]
fn descriptor_with_equal_signals_rejects_success() {
    let _ = Signaled::<u8, SameSignalDispatch>::success(1);
}

#[test]
#[should_panic(expected = "same signal for success and failure")]
fn descriptor_with_equal_signals_rejects_failure() {
    let _ = Signaled::<u8, SameSignalDispatch>::fail(Lone::Other, ());
}

#[test]
#[should_panic(expected = "same signal for success and failure")]
fn descriptor_with_equal_signals_rejects_default() {
    let _ = Signaled::<u8, SameSignalDispatch>::new();
}

#[cfg(feature = "tracing")]
mod tracing_events {
    use super::{Io, IoDispatch};
    use outcome_rail::Signaled;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    #[derive(Clone, Default)]
    struct LevelCounter {
        debug: Arc<AtomicUsize>,
        trace: Arc<AtomicUsize>,
    }

    impl Subscriber for LevelCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            if event.metadata().target() != "outcome_rail::types::signaled" {
                return;
            }
            let level = *event.metadata().level();
            if level == Level::DEBUG {
                self.debug.fetch_add(1, Ordering::SeqCst);
            } else if level == Level::TRACE {
                self.trace.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    #[test]
    fn consuming_and_missing_emit_events() {
        let counter = LevelCounter::default();

        tracing::subscriber::with_default(counter.clone(), || {
            let mut o = Signaled::<u8, IoDispatch>::success(3);
            assert_eq!(o.take_success(), Ok(3));
            assert!(o.get_success().is_err());
        });

        assert_eq!(counter.trace.load(Ordering::SeqCst), 1);
        assert_eq!(counter.debug.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn total_accessor_stays_silent() {
        let counter = LevelCounter::default();

        tracing::subscriber::with_default(counter.clone(), || {
            let o = Signaled::<u8, IoDispatch>::from_signal(Io::Retry);
            assert_eq!(o.as_success(), None);
        });

        assert_eq!(counter.debug.load(Ordering::SeqCst), 0);
    }
}
