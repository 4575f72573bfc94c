use outcome_rail::{Maybe, NO_RESULT};

#[test]
fn default_is_absent() {
    let m = Maybe::<i32>::default();

    assert!(!m.is_success());
    assert!(m.is_failure());
    assert_eq!(m.as_success(), None);
    assert_eq!(Maybe::<i32>::from(NO_RESULT), m);
}

#[test]
fn success_holds_payload() {
    let m = Maybe::<i32>::success(5);

    assert!(m.is_success());
    assert_eq!(*m.get_success(), 5);
    assert_eq!(*m, 5);
}

#[test]
fn value_or_uses_fallback_when_absent() {
    let absent = Maybe::<&str>::none();
    let present = Maybe::success("here");

    assert_eq!(*absent.value_or(&"gone"), "gone");
    assert_eq!(*present.value_or(&"gone"), "here");
    assert_eq!(absent.into_value_or("x"), "x");
}

#[test]
fn take_success_leaves_absent() {
    let mut m = Maybe::success(String::from("v"));

    assert_eq!(m.take_success(), "v");
    assert!(m.is_failure());
}

#[test]
#[should_panic(expected = "success accessor")]
fn get_success_on_absent_panics() {
    let m = Maybe::<u8>::none();
    let _ = m.get_success();
}

#[test]
#[should_panic(expected = "success accessor")]
fn take_success_twice_panics() {
    let mut m = Maybe::success(1u8);
    let _ = m.take_success();
    let _ = m.take_success();
}

#[test]
fn map_and_and_then_propagate_absence() {
    let m = Maybe::success(2).map(|x| x * 10);
    assert_eq!(m.into_option(), Some(20));

    let chained = Maybe::success(2).and_then(|_| Maybe::<i32>::none());
    assert!(chained.is_failure());

    let none = Maybe::<i32>::none().map(|x| x + 1);
    assert_eq!(none.into_option(), None);
}

#[test]
fn debug_shows_state() {
    assert_eq!(format!("{:?}", Maybe::success(1)), "Success(1)");
    assert_eq!(format!("{:?}", Maybe::<i32>::none()), "Absent");
}

#[test]
#[cfg(feature = "serde")]
fn serde_matches_option_representation() {
    let present = Maybe::success(3u8);
    assert_eq!(serde_json::to_string(&present).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Maybe::<u8>::none()).unwrap(), "null");

    let back: Maybe<u8> = serde_json::from_str("3").unwrap();
    assert_eq!(back, present);
}
