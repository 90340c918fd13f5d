//! The three walkthrough scenarios.
//!
//! - [`next_char_from_number_string`]: an [`Identity`] pipeline over a
//!   number string
//! - [`common_name_label`]: a [`Maybe`] built from a nullable field with a
//!   lazy fallback
//! - [`feed_for`]: an [`Outcome`] chain where access control can fail

use std::fmt;

use carton::control::{Maybe, Outcome};
use carton::typeclass::Identity;

use crate::domain::{Fixtures, Plant, Post, User};
use crate::error::NotesError;

/// Label used for plants without a common name.
pub const NO_COMMON_NAME: &str = "Plant has no common name";

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scenario {
    /// Identity container over a number string.
    Identity,
    /// Optional container over plant records.
    Optional,
    /// Outcome container over user posts.
    Outcome,
    /// Every scenario in order.
    All,
}

// =============================================================================
// Identity
// =============================================================================

/// Trims `input`, parses it, increments it and returns the character with
/// that code.
///
/// # Errors
///
/// Returns `NotesError::InvalidNumber` if the trimmed input is not a
/// non-negative whole number, and `NotesError::NoNextCharacter` if its
/// successor is not a character code.
///
/// # Examples
///
/// ```rust
/// use carton_notes::scenarios::next_char_from_number_string;
///
/// assert_eq!(next_char_from_number_string(" 64").unwrap(), "A");
/// ```
pub fn next_char_from_number_string(input: &str) -> Result<String, NotesError> {
    Identity::wrap(input)
        .map(str::trim)
        .map(|trimmed| {
            Outcome::from(trimmed.parse::<u32>()).map_failure(|source| {
                NotesError::InvalidNumber {
                    input: trimmed.to_string(),
                    source,
                }
            })
        })
        .map(|parsed| {
            parsed.and_then(|number| {
                Outcome::from_nullable(number.checked_add(1).and_then(char::from_u32), || {
                    NotesError::NoNextCharacter(number)
                })
            })
        })
        .map(|character| character.map(String::from))
        .fold(Outcome::into_result)
}

// =============================================================================
// Optional
// =============================================================================

/// Returns the upper-cased common name of `plant`, or [`NO_COMMON_NAME`].
pub fn common_name_label(plant: &Plant) -> String {
    Maybe::from_nullable(plant.common_name.as_deref())
        .map(str::to_uppercase)
        .get_or_else(|| {
            tracing::debug!(plant = %plant.name, "falling back to default label");
            NO_COMMON_NAME.to_string()
        })
}

// =============================================================================
// Outcome
// =============================================================================

/// What a user sees when opening their feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// The lookup failed with this message.
    Denied(String),
    /// The user's posts.
    Posts(Vec<Post>),
}

impl fmt::Display for Feed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied(message) => write!(formatter, "{message}"),
            Self::Posts(posts) => {
                let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
                write!(formatter, "[{}]", titles.join(", "))
            }
        }
    }
}

/// Finds a user by id.
pub fn find_user(fixtures: &Fixtures, user_id: u32) -> Outcome<&User, NotesError> {
    Outcome::from_nullable(
        fixtures.users.iter().find(|user| user.id == user_id),
        || NotesError::UnknownUser(user_id),
    )
}

/// Returns the posts written by `user_id`.
///
/// The guest account (id `0`) is refused with `NotesError::AccessDenied`.
pub fn lookup_posts(fixtures: &Fixtures, user_id: u32) -> Outcome<Vec<Post>, NotesError> {
    if user_id == 0 {
        return Outcome::failure(NotesError::AccessDenied);
    }
    Outcome::success(
        fixtures
            .posts
            .iter()
            .filter(|post| post.author_id == user_id)
            .cloned()
            .collect(),
    )
}

/// Builds the feed for `user_id`.
pub fn feed_for(fixtures: &Fixtures, user_id: u32) -> Feed {
    find_user(fixtures, user_id)
        .map(|user| user.id)
        .flat_map(|id| lookup_posts(fixtures, id))
        .fold(
            |error| {
                tracing::debug!(user_id, %error, "feed lookup failed");
                Feed::Denied(error.to_string())
            },
            Feed::Posts,
        )
}

// =============================================================================
// Reports
// =============================================================================

/// Runs `scenario` and returns one line per result.
///
/// # Errors
///
/// Propagates the identity scenario error for malformed `input`.
pub fn report(
    scenario: Scenario,
    input: &str,
    fixtures: &Fixtures,
) -> Result<Vec<String>, NotesError> {
    let mut lines = Vec::new();

    if matches!(scenario, Scenario::Identity | Scenario::All) {
        let character = next_char_from_number_string(input)?;
        lines.push(format!("identity: {input:?} -> {character}"));
    }

    if matches!(scenario, Scenario::Optional | Scenario::All) {
        lines.extend(
            fixtures
                .plants
                .iter()
                .map(|plant| format!("optional: {} -> {}", plant.name, common_name_label(plant))),
        );
    }

    if matches!(scenario, Scenario::Outcome | Scenario::All) {
        lines.extend(fixtures.users.iter().map(|user| {
            format!("outcome: user {} -> {}", user.id, feed_for(fixtures, user.id))
        }));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" 64", "A")]
    #[case("96\n", "a")]
    #[case("47", "0")]
    fn next_char_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(next_char_from_number_string(input).unwrap(), expected);
    }

    #[rstest]
    #[case("sixty-four")]
    #[case("-1")]
    #[case("")]
    fn next_char_rejects_non_numbers(#[case] input: &str) {
        let error = next_char_from_number_string(input).unwrap_err();
        assert!(matches!(error, NotesError::InvalidNumber { .. }));
    }

    #[rstest]
    #[case(55_295)]
    #[case(u32::MAX)]
    fn next_char_rejects_non_characters(#[case] number: u32) {
        let error = next_char_from_number_string(&number.to_string()).unwrap_err();
        assert!(matches!(error, NotesError::NoNextCharacter(n) if n == number));
    }

    #[rstest]
    fn feed_display() {
        let posts = Feed::Posts(vec![
            Post {
                id: 1,
                title: "a".to_string(),
                author_id: 1,
            },
            Post {
                id: 2,
                title: "b".to_string(),
                author_id: 1,
            },
        ]);
        assert_eq!(posts.to_string(), "[a, b]");
        assert_eq!(Feed::Denied("Access denied".to_string()).to_string(), "Access denied");
    }

    #[rstest]
    fn unknown_user_is_reported_in_feed() {
        let fixtures = Fixtures::embedded().unwrap();
        assert_eq!(feed_for(&fixtures, 99), Feed::Denied("Unknown user: 99".to_string()));
    }
}
