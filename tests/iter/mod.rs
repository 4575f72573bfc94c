use outcome_rail::iter::{count_successes, first_success};
use outcome_rail::{FailureVec, Maybe, Outcome, Twin};

#[test]
fn outcome_iterates_like_an_option() {
    let ok = Outcome::<i32, &str>::success(1);
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&1]);

    let bad = Outcome::<i32, &str>::failure("x");
    assert_eq!(bad.iter().count(), 0);

    let mut ok = ok;
    for value in &mut ok {
        *value += 1;
    }
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn collect_accumulates_every_failure() {
    let items = vec![Outcome::<i32, &str>::success(1), Outcome::failure("a"), Outcome::failure("b")];
    let collected: Outcome<Vec<i32>, FailureVec<&str>> = items.into_iter().collect();

    assert_eq!(collected.get_failure().as_slice(), &["a", "b"]);
}

#[test]
fn collect_without_failures_gathers_values() {
    let items = vec![Outcome::<i32, &str>::success(1), Outcome::success(2)];
    let collected: Outcome<Vec<i32>, FailureVec<&str>> = items.into_iter().collect();

    assert_eq!(collected, Outcome::Success(vec![1, 2]));
}

#[test]
fn fallible_helpers_work_across_shapes() {
    let twins = [Twin::failure(1), Twin::success(2), Twin::success(3)];
    assert_eq!(count_successes(&twins), 2);
    assert_eq!(first_success(&twins), Some(&2));

    let none: [Maybe<u8>; 2] = [Maybe::none(), Maybe::none()];
    assert_eq!(first_success(&none), None);
}
