//! Error types for the notes walkthrough.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The user is not allowed to read posts.
    #[error("Access denied")]
    AccessDenied,

    /// No user with the given id exists in the fixtures.
    #[error("Unknown user: {0}")]
    UnknownUser(u32),

    /// The identity scenario input is not a whole number.
    #[error("Invalid number input '{input}'")]
    InvalidNumber {
        /// The trimmed input.
        input: String,
        /// The underlying parse error.
        #[source]
        source: ParseIntError,
    },

    /// The successor of the parsed number is not a character code.
    #[error("No character follows code {0}")]
    NoNextCharacter(u32),

    /// The fixture file could not be read.
    #[error("Failed to read fixtures from {}", path.display())]
    FixtureIo {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fixture document is not valid.
    #[error("Failed to parse fixtures: {0}")]
    FixtureParse(#[from] serde_json::Error),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn access_denied_display() {
        assert_eq!(NotesError::AccessDenied.to_string(), "Access denied");
    }

    #[rstest]
    fn unknown_user_display() {
        assert_eq!(NotesError::UnknownUser(7).to_string(), "Unknown user: 7");
    }

    #[rstest]
    fn invalid_number_keeps_source() {
        let source = "x".parse::<u32>().unwrap_err();
        let error = NotesError::InvalidNumber {
            input: "x".to_string(),
            source,
        };
        assert_eq!(error.to_string(), "Invalid number input 'x'");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[rstest]
    fn config_error_is_transparent() {
        let error = NotesError::from(ConfigError::InvalidValue {
            key: "CARTON_NOTES_FIXTURES".to_string(),
            message: "must not be empty".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Invalid value for CARTON_NOTES_FIXTURES: must not be empty"
        );
    }
}
