//! Runtime configuration for the notes walkthrough.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.
//!
//! # Environment Variables
//!
//! - `CARTON_NOTES_LOG`: tracing filter directive (optional, default:
//!   `info,carton_notes=debug`)
//! - `CARTON_NOTES_FIXTURES`: path to a fixture document (optional, the
//!   embedded fixtures are used when unset)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the log filter directive.
pub const LOG_VAR: &str = "CARTON_NOTES_LOG";

/// Environment variable holding the fixture path.
pub const FIXTURES_VAR: &str = "CARTON_NOTES_FIXTURES";

/// Filter directive used when `CARTON_NOTES_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,carton_notes=debug";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Notes configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesConfig {
    /// Tracing filter directive.
    pub log_filter: String,
    /// Alternative fixture document, if any.
    pub fixtures_path: Option<PathBuf>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fixtures_path: None,
        }
    }
}

impl NotesConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is not valid
    /// Unicode or if `CARTON_NOTES_FIXTURES` is set to an empty string.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`NotesConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let log_filter =
            get_optional(&lookup, LOG_VAR)?.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let fixtures_path = match get_optional(&lookup, FIXTURES_VAR)? {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: FIXTURES_VAR.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self {
            log_filter,
            fixtures_path,
        })
    }
}

fn get_optional<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}
