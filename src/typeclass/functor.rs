//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents containers
//! that can have a function applied to their held value while preserving
//! their shape: an `Absent` stays `Absent`, a `Failure` stays a `Failure`.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use carton::control::Maybe;
//! use carton::typeclass::Functor;
//!
//! let present = Maybe::present(5).fmap(|n| n.to_string());
//! assert_eq!(present, Maybe::present("5".to_string()));
//!
//! // Absent is preserved
//! let absent = Maybe::<i32>::absent().fmap(|n| n.to_string());
//! assert_eq!(absent, Maybe::absent());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Outcome};

/// A type class for containers that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use carton::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Identity::new("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// Containers with no value (`Absent`, `Failure`) return themselves
    /// without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::{Functor, Identity};
    ///
    /// let x = Identity::new(5);
    /// assert_eq!(x.fmap(|n| n * 2), Identity::new(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the container must stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::{Functor, Identity};
    ///
    /// let x = Identity::new("hello".to_string());
    /// let y: Identity<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Identity::new(5));
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    /// use carton::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    /// use carton::typeclass::Functor;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(5);
    /// assert_eq!(success.void(), Outcome::success(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fmap_transforms_value() {
        let result = Identity::new(20).fmap(|n| n + 1);
        assert_eq!(result, Identity::new(21));
    }

    #[rstest]
    fn identity_fmap_ref_keeps_original() {
        let original = Identity::new(vec![1, 2, 3]);
        let length = original.fmap_ref(Vec::len);
        assert_eq!(length, Identity::new(3));
        assert_eq!(original.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_void_discards_value() {
        assert_eq!(Identity::new("value").void(), Identity::new(()));
    }

    #[cfg(feature = "control")]
    #[rstest]
    #[case(Maybe::present(4), Maybe::present(8))]
    #[case(Maybe::absent(), Maybe::absent())]
    fn maybe_fmap_doubles_present_value(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_fmap_ref_on_absent_is_absent() {
        let absent: Maybe<String> = Maybe::absent();
        assert_eq!(absent.fmap_ref(String::len), Maybe::absent());
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn outcome_fmap_ref_clones_failure() {
        let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
        let mapped = failure.fmap_ref(|n| n + 1);
        assert_eq!(mapped, Outcome::failure("boom".to_string()));
        assert_eq!(failure, Outcome::failure("boom".to_string()));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn outcome_replace_on_success() {
        let success: Outcome<i32, String> = Outcome::success(1);
        assert_eq!(success.replace('x'), Outcome::success('x'));
    }
}
