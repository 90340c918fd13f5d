//! Type class traits shared by the containers.
//!
//! This module provides the small set of type classes (traits) that describe
//! how a container composes:
//!
//! - [`Functor`]: Mapping over the held value
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations where each step may change the case
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name "the same
//! container holding a different type", which is what `fmap` and `flat_map`
//! need in their signatures.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: The identity container (identity functor)
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use carton::typeclass::{Functor, Identity};
//!
//! let length = Identity::new("hello").fmap(str::len);
//! assert_eq!(length, Identity::new(5));
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use carton::typeclass::{Applicative, Identity, Monad};
//!
//! let doubled = Identity::<()>::pure(21).flat_map(|n| Identity::new(n * 2));
//! assert_eq!(doubled.into_inner(), 42);
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
