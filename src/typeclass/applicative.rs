//! Applicative type class - lifting values and combining independent containers.
//!
//! `Applicative` extends [`Functor`] with two abilities:
//!
//! - `pure` lifts a plain value into the container's success case
//! - `map2` combines two independent containers with a binary function
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use carton::control::Maybe;
//! use carton::typeclass::Applicative;
//!
//! let sum = Maybe::present(3).map2(Maybe::present(4), |x, y| x + y);
//! assert_eq!(sum, Maybe::present(7));
//!
//! let missing = Maybe::present(3).map2(Maybe::<i32>::absent(), |x, y| x + y);
//! assert_eq!(missing, Maybe::absent());
//! ```

use super::functor::Functor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Outcome};

/// A type class for containers that can lift values and combine independent
/// computations.
///
/// When either operand of `map2` is in its empty case (`Absent`,
/// `Failure`), the result is in that case too. For `Outcome`, the left
/// operand's failure wins when both fail.
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    /// use carton::typeclass::Applicative;
    ///
    /// let lifted: Outcome<i32, String> = <Outcome<(), String>>::pure(42);
    /// assert_eq!(lifted, Outcome::success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::{Applicative, Identity};
    ///
    /// let joined = Identity::new("a").map2(Identity::new("b"), |x, y| format!("{x}{y}"));
    /// assert_eq!(joined.into_inner(), "ab");
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    /// use carton::typeclass::Applicative;
    ///
    /// assert_eq!(
    ///     Maybe::present(1).product(Maybe::present("one")),
    ///     Maybe::present((1, "one"))
    /// );
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in this container to the value held in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    /// use carton::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::present(5)), Maybe::present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Maybe::Present(function), Maybe::Present(b)) => Maybe::Present(function(b)),
            _ => Maybe::Absent,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Outcome::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Outcome::Success(function), Outcome::Success(b)) => Outcome::Success(function(b)),
            (Outcome::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}
