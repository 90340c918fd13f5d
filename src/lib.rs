//! # carton
//!
//! Minimal lawful containers for Rust.
//!
//! ## Overview
//!
//! The crate provides three small, immutable, single-slot containers and the
//! type classes that describe how they compose:
//!
//! - **[`Identity`](typeclass::Identity)**: wraps a value and lets it be
//!   transformed step by step
//! - **[`Maybe`](control::Maybe)**: a value that is either `Present` or
//!   `Absent`, in place of null checks
//! - **[`Outcome`](control::Outcome)**: a value that is either a `Success`
//!   or a `Failure` carrying an error, in place of thrown errors
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Applicative`, `Monad`
//!
//! Every operation consumes its receiver and returns a new container. No
//! container is ever mutated after construction.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Identity` container
//! - `control`: The `Maybe` and `Outcome` containers
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use carton::prelude::*;
//!
//! let next = Identity::new(" 64")
//!     .map(str::trim)
//!     .map(|text| text.parse::<u8>().unwrap_or_default())
//!     .map(|code| code + 1)
//!     .fold(|code| char::from(code).to_string());
//! assert_eq!(next, "A");
//!
//! let label = Maybe::from_nullable(None::<&str>)
//!     .map(str::to_uppercase)
//!     .get_or_else(|| "Plant has no common name".to_string());
//! assert_eq!(label, "Plant has no common name");
//!
//! let posts: Outcome<Vec<&str>, &str> = Outcome::failure("Access denied");
//! let rendered = posts.fold(|error| error.to_string(), |titles| titles.join(", "));
//! assert_eq!(rendered, "Access denied");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use carton::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
