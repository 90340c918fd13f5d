//! Integration tests for the Outcome container.
//!
//! Outcome represents a computation that either succeeded or failed:
//! - `Success(T)`: Contains the result
//! - `Failure(E)`: Contains the error that stopped the computation
//!
//! The tests model a small user/post lookup where access control can fail,
//! and check that failures travel through a chain unchanged.

#![cfg(feature = "control")]

use std::cell::Cell;

use carton::control::Outcome;
use carton::typeclass::Monad;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Post {
    id: u32,
    title: &'static str,
}

fn lookup_posts(user_id: u32) -> Outcome<Vec<Post>, String> {
    if user_id == 0 {
        Outcome::failure("Access denied".to_string())
    } else {
        Outcome::success(vec![
            Post { id: 1, title: "Watering schedules" },
            Post { id: 2, title: "Repotting succulents" },
        ])
    }
}

fn render(outcome: Outcome<Vec<Post>, String>) -> Vec<String> {
    outcome.fold(
        |error| vec![error],
        |posts| posts.into_iter().map(|post| post.title.to_string()).collect(),
    )
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn success_and_failure_are_explicit() {
    let success: Outcome<i32, String> = Outcome::success(1);
    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    assert_eq!(success, Outcome::Success(1));
    assert_eq!(failure, Outcome::Failure("nope".to_string()));
}

#[rstest]
fn from_result_preserves_case() {
    let parsed: Outcome<i32, _> = Outcome::from("12".parse::<i32>());
    assert_eq!(parsed.success_value(), Some(12));

    let rejected: Outcome<i32, _> = Outcome::from("twelve".parse::<i32>());
    assert!(rejected.is_failure());
}

// =============================================================================
// User Posts
// =============================================================================

#[rstest]
#[case(User { id: 0 }, vec!["Access denied".to_string()])]
#[case(
    User { id: 1 },
    vec!["Watering schedules".to_string(), "Repotting succulents".to_string()]
)]
fn posts_for_user(#[case] user: User, #[case] expected: Vec<String>) {
    let outcome = Outcome::<User, String>::success(user)
        .map(|user| user.id)
        .flat_map(lookup_posts);
    assert_eq!(render(outcome), expected);
}

#[rstest]
fn denied_user_gets_error_through_fold() {
    let user = User { id: 0 };
    let message = Outcome::<User, String>::success(user)
        .map(|user| user.id)
        .flat_map(lookup_posts)
        .fold(|error| error, |posts| format!("{} posts", posts.len()));
    assert_eq!(message, "Access denied");
}

#[rstest]
fn permitted_user_gets_two_posts() {
    let user = User { id: 1 };
    let posts = Outcome::<User, String>::success(user)
        .map(|user| user.id)
        .and_then(lookup_posts)
        .get_or_else(|_| Vec::new());
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[1].id, 2);
}

// =============================================================================
// Error Propagation
// =============================================================================

#[rstest]
fn failure_is_never_overwritten_by_later_steps() {
    let later = Cell::new(0);
    let result: Outcome<usize, String> = Outcome::<u32, String>::success(0)
        .flat_map(lookup_posts)
        .flat_map(|posts| {
            later.set(later.get() + 1);
            Outcome::failure(format!("{} posts were unexpected", posts.len()))
        })
        .map(|message: String| {
            later.set(later.get() + 1);
            message.len()
        });

    assert_eq!(result, Outcome::Failure("Access denied".to_string()));
    assert_eq!(later.get(), 0);
}

#[rstest]
fn map_failure_leaves_success_alone() {
    let success: Outcome<i32, String> = Outcome::success(5);
    let relabelled: Outcome<i32, usize> = success.map_failure(|error| error.len());
    assert_eq!(relabelled, Outcome::Success(5));
}

#[rstest]
fn then_keeps_original_failure() {
    let failure: Outcome<i32, &str> = Outcome::failure("first");
    assert_eq!(failure.then(Outcome::success("second")), Outcome::Failure("first"));
}

#[rstest]
fn into_result_interoperates_with_question_mark() {
    fn total(values: &[&str]) -> Result<i32, std::num::ParseIntError> {
        let mut sum = 0;
        for value in values {
            sum += Outcome::from(value.parse::<i32>()).into_result()?;
        }
        Ok(sum)
    }

    assert_eq!(total(&["1", "2", "3"]), Ok(6));
    assert!(total(&["1", "x"]).is_err());
}
