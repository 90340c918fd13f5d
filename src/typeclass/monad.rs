//! Monad type class - sequencing computations within a container.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets the result of
//! one step decide the next step without nesting containers. For `Maybe`
//! and `Outcome` this is what gives chains their short-circuiting: once a
//! step produces `Absent` or `Failure`, no later step runs.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use carton::control::Outcome;
//! use carton::typeclass::Monad;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! fn positive(n: i32) -> Outcome<i32, String> {
//!     if n > 0 { Outcome::success(n) } else { Outcome::failure(format!("{n} is not positive")) }
//! }
//!
//! let ok = parse("42").flat_map(positive);
//! assert_eq!(ok, Outcome::success(42));
//!
//! let rejected = parse("-1").flat_map(positive);
//! assert_eq!(rejected, Outcome::failure("-1 is not positive".to_string()));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Outcome};

/// A type class for containers that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a container and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    /// use carton::typeclass::Monad;
    ///
    /// let halved = Maybe::present(10).flat_map(|n| {
    ///     if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() }
    /// });
    /// assert_eq!(halved, Maybe::present(5));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is in its empty case, that case propagates and `next` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    /// use carton::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("hello")), Maybe::present("hello"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::present("hello")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}
