//! # Carton Notes
//!
//! A console walkthrough of the carton containers.
//!
//! ## Module Structure
//!
//! - `config`: Environment-driven configuration
//! - `domain`: Plant, user and post records and the fixture document
//! - `error`: The `NotesError` type
//! - `scenarios`: The identity, optional and outcome scenarios
//!
//! ## carton Features Used
//!
//! - `Identity` for a step-by-step value pipeline
//! - `Maybe` for nullable record fields and fixture paths
//! - `Outcome` for lookups that can be refused

#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod scenarios;

pub use config::{ConfigError, NotesConfig};
pub use domain::{Fixtures, Plant, Post, User};
pub use error::NotesError;
pub use scenarios::{Feed, Scenario};
