use outcome_rail::{Flag, NO_RESULT};

#[test]
fn true_is_success() {
    let f = Flag::from(true);

    assert!(f.is_success());
    assert!(*f.get_success());
}

#[test]
fn false_is_failure() {
    let f = Flag::from(false);

    assert!(!f.is_success());
    assert!(!*f.get_success());
    assert_eq!(f, Flag::default());
    assert_eq!(f, Flag::from(NO_RESULT));
}

#[test]
fn take_success_returns_value_and_resets() {
    let mut f = Flag::from(true);

    assert!(f.take_success());
    assert!(f.is_failure());
    assert!(!f.take_success());
}

#[test]
fn storage_is_a_single_byte() {
    assert_eq!(std::mem::size_of::<Flag>(), std::mem::size_of::<bool>());
}

#[test]
fn converts_back_to_bool() {
    assert!(bool::from(Flag::from(true)));
    assert!(!bool::from(Flag::default()));
    assert_eq!(Flag::from(true).into_option(), Some(true));
    assert_eq!(Flag::from(false).into_option(), None);
}

#[test]
#[cfg(feature = "serde")]
fn serde_uses_the_bare_bool() {
    let ready = Flag::new(true);
    let json = serde_json::to_string(&ready).unwrap();
    assert_eq!(json, "true");

    let back: Flag = serde_json::from_str("false").unwrap();
    assert!(back.is_failure());
    let back: Flag = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ready);
}
