use outcome_rail::traits::Dispatch;
use outcome_rail::{dispatch, signal, Signaled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Job {
    Done,
    Queued,
    Throttled,
    Crashed,
}

dispatch! {
    /// Job runner outcomes.
    pub struct JobDispatch: Job {
        success = Job::Done,
        failure = Job::Crashed,
        error = JobError,
    }
}

dispatch! {
    pub struct SilentJobDispatch: Job {
        success = Job::Done,
        failure = Job::Queued,
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct JobError {
    reason: String,
    attempt: u32,
    retry_after: Option<u64>,
}

impl From<&str> for JobError {
    fn from(reason: &str) -> Self {
        Self { reason: reason.to_string(), ..Self::default() }
    }
}

impl From<(&str, u32)> for JobError {
    fn from((reason, attempt): (&str, u32)) -> Self {
        Self { reason: reason.to_string(), attempt, retry_after: None }
    }
}

impl From<(&str, u32, u64)> for JobError {
    fn from((reason, attempt, retry_after): (&str, u32, u64)) -> Self {
        Self { reason: reason.to_string(), attempt, retry_after: Some(retry_after) }
    }
}

#[test]
fn dispatch_declares_descriptor_constants() {
    assert_eq!(<JobDispatch as Dispatch>::SUCCESS, Job::Done);
    assert_eq!(<JobDispatch as Dispatch>::FAILURE, Job::Crashed);
    assert_eq!(<SilentJobDispatch as Dispatch>::FAILURE, Job::Queued);
}

#[test]
fn signal_without_arguments_is_default_failure() {
    let o: Signaled<(), JobDispatch> = signal!();
    assert_eq!(o.signal(), Job::Crashed);
    assert_eq!(o.error(), &JobError::default());
}

#[test]
fn signal_with_only_a_tag_keeps_default_error() {
    let o: Signaled<(), SilentJobDispatch> = signal!(Job::Throttled);
    assert_eq!(o.signal(), Job::Throttled);
    assert!(o.has_error());
}

#[test]
fn signal_forwards_one_two_or_three_arguments() {
    let one: Signaled<(), JobDispatch> = signal!(Job::Throttled, "slow down");
    assert_eq!(one.error().reason, "slow down");

    let two: Signaled<(), JobDispatch> = signal!(Job::Throttled, "slow down", 2u32);
    assert_eq!(two.error().attempt, 2);

    let three: Signaled<(), JobDispatch> = signal!(Job::Queued, "full", 3u32, 60u64,);
    assert_eq!(three.signal(), Job::Queued);
    assert_eq!(three.error().retry_after, Some(60));
}
