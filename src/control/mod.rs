//! Two-case containers for absence and failure.
//!
//! This module provides the containers that replace null checks and thrown
//! errors with values:
//!
//! - [`Maybe`]: a value that is either `Present` or `Absent`
//! - [`Outcome`]: a value that is either a `Success` or a `Failure(error)`
//!
//! Both are plain enums. The case is fixed when the container is built and
//! every operation returns a new container. Operations that take a function
//! skip it entirely when the container is in its empty case.
//!
//! # Examples
//!
//! ## Replacing a null check
//!
//! ```rust
//! use carton::control::Maybe;
//!
//! struct Plant {
//!     common_name: Option<&'static str>,
//! }
//!
//! let fern = Plant { common_name: None };
//! let label = Maybe::from_nullable(fern.common_name)
//!     .map(str::to_uppercase)
//!     .get_or_else(|| "Plant has no common name".to_string());
//! assert_eq!(label, "Plant has no common name");
//! ```
//!
//! ## Replacing a thrown error
//!
//! ```rust
//! use carton::control::Outcome;
//!
//! fn posts_for(user_id: u32) -> Outcome<Vec<&'static str>, String> {
//!     if user_id == 0 {
//!         Outcome::failure("Access denied".to_string())
//!     } else {
//!         Outcome::success(vec!["first post", "second post"])
//!     }
//! }
//!
//! let message = posts_for(0).fold(|error| error, |posts| posts.join("\n"));
//! assert_eq!(message, "Access denied");
//! ```

mod maybe;
mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
