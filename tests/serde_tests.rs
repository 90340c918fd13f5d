#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support in carton.
//!
//! `Identity` serializes transparently as its payload. `Maybe` and `Outcome`
//! serialize as externally tagged enums.

use carton::control::{Maybe, Outcome};
use carton::typeclass::Identity;
use rstest::rstest;

// =============================================================================
// Identity
// =============================================================================

#[rstest]
fn test_identity_serializes_as_payload() {
    let wrapped = Identity::new(42);
    assert_eq!(serde_json::to_string(&wrapped).unwrap(), "42");
}

#[rstest]
fn test_identity_json_roundtrip() {
    let wrapped = Identity::new(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&wrapped).unwrap();
    let restored: Identity<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(wrapped, restored);
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
#[case(Maybe::Present(7), r#"{"Present":7}"#)]
#[case(Maybe::Absent, r#""Absent""#)]
fn test_maybe_json_shape(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&maybe).unwrap(), expected);
}

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = Maybe::present("fern".to_string());
    let absent: Maybe<String> = Maybe::absent();

    let restored_present: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&present).unwrap()).unwrap();
    let restored_absent: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&absent).unwrap()).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

// =============================================================================
// Outcome
// =============================================================================

#[rstest]
#[case(Outcome::Success(1), r#"{"Success":1}"#)]
#[case(Outcome::Failure("Access denied".to_string()), r#"{"Failure":"Access denied"}"#)]
fn test_outcome_json_shape(#[case] outcome: Outcome<i32, String>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&outcome).unwrap(), expected);
}

#[rstest]
fn test_outcome_json_roundtrip() {
    let failure: Outcome<i32, String> = Outcome::failure("error".to_string());
    let json = serde_json::to_string(&failure).unwrap();
    let restored: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(failure, restored);
}

#[rstest]
fn test_unknown_variant_is_rejected() {
    let parsed: Result<Outcome<i32, String>, _> = serde_json::from_str(r#"{"Pending":1}"#);
    assert!(parsed.is_err());
}
