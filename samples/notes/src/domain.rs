//! Records used by the scenarios and the fixture document holding them.

use std::fs;
use std::path::Path;

use carton::control::Maybe;
use serde::Deserialize;

use crate::config::NotesConfig;
use crate::error::NotesError;

const EMBEDDED_FIXTURES: &str = include_str!("../fixtures/notes.json");

/// A plant with an optional common name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Botanical name.
    pub name: String,
    /// Common name, missing for many houseplants.
    #[serde(default)]
    pub common_name: Option<String>,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// User id. Id `0` is the guest account.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// A post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post id.
    pub id: u32,
    /// Post title.
    pub title: String,
    /// Id of the writing user.
    pub author_id: u32,
}

/// The fixture document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fixtures {
    /// Plants for the optional-value scenario.
    #[serde(default)]
    pub plants: Vec<Plant>,
    /// Users for the outcome scenario.
    #[serde(default)]
    pub users: Vec<User>,
    /// Posts for the outcome scenario.
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Fixtures {
    /// Parses a fixture document.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::FixtureParse` if the document is not valid.
    pub fn parse(document: &str) -> Result<Self, NotesError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Returns the fixtures compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::FixtureParse` if the embedded document is not valid.
    pub fn embedded() -> Result<Self, NotesError> {
        Self::parse(EMBEDDED_FIXTURES)
    }

    /// Reads and parses a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::FixtureIo` if the file cannot be read and
    /// `NotesError::FixtureParse` if its contents are not valid.
    pub fn from_path(path: &Path) -> Result<Self, NotesError> {
        let document = fs::read_to_string(path).map_err(|source| NotesError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&document)
    }

    /// Loads the fixtures named by `config`, falling back to the embedded ones.
    ///
    /// # Errors
    ///
    /// See [`Fixtures::from_path`] and [`Fixtures::embedded`].
    pub fn load(config: &NotesConfig) -> Result<Self, NotesError> {
        Maybe::from_nullable(config.fixtures_path.as_deref()).fold(Self::embedded, |path| {
            tracing::debug!(path = %path.display(), "loading fixtures from file");
            Self::from_path(path)
        })
    }
}
