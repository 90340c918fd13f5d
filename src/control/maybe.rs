//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Present(A)` or `Absent`. It is built from a
//! possibly-missing raw value with [`Maybe::from_nullable`] (or
//! [`Maybe::from_sentinel`] when a designated value means "missing"), and
//! then transformed without ever checking for the missing case by hand:
//! `map` and `flat_map` skip their function on `Absent`, and
//! `get_or_else` only runs its fallback on `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use carton::control::Maybe;
//!
//! let greeting = Maybe::from_nullable(Some("ada"))
//!     .map(|name| format!("hello, {name}"))
//!     .get_or_else(|| "hello, stranger".to_string());
//! assert_eq!(greeting, "hello, ada");
//!
//! // A designated sentinel value also means "missing"
//! let port = Maybe::from_sentinel(0_u16, &0).get_or(8080);
//! assert_eq!(port, 8080);
//! ```

use std::fmt;

use crate::control::Outcome;
use crate::typeclass::TypeConstructor;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `A` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use carton::control::Maybe;
///
/// let present = Maybe::present(21).map(|n| n * 2);
/// assert_eq!(present, Maybe::Present(42));
///
/// let absent = Maybe::<i32>::absent().map(|n| n * 2);
/// assert!(absent.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Present` container.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates an `Absent` container.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Builds a container from a nullable value.
    ///
    /// `None` becomes `Absent`; `Some(value)` becomes `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::Present(3));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Builds a container from a value that may equal a "missing" marker.
    ///
    /// Returns `Absent` when `value == *sentinel`, otherwise `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_sentinel(-1, &-1), Maybe::Absent);
    /// assert_eq!(Maybe::from_sentinel(7, &-1), Maybe::Present(7));
    /// ```
    #[inline]
    pub fn from_sentinel(value: A, sentinel: &A) -> Self
    where
        A: PartialEq,
    {
        if value == *sentinel {
            Self::Absent
        } else {
            Self::Present(value)
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the present value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// let name = Maybe::present(String::from("fern"));
    /// assert_eq!(name.as_ref().map(|text| text.len()), Maybe::Present(4));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// If this is `Present(v)`, returns `Present(function(v))`.
    /// If this is `Absent`, returns `Absent` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// assert_eq!(Maybe::present("fern").map(str::len), Maybe::Present(4));
    /// assert_eq!(Maybe::<&str>::absent().map(str::len), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a function that itself may produce `Absent`.
    ///
    /// `Absent` short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// let parsed = Maybe::present("12")
    ///     .flat_map(|text| Maybe::from_nullable(text.parse::<i32>().ok()));
    /// assert_eq!(parsed, Maybe::Present(12));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Keeps the present value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|n| n % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::present(3).filter(|n| n % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Fold and Extraction
    // =========================================================================

    /// Eliminates the container by calling exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(describe(Maybe::present(3)), "3");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_absent: F, on_present: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(A) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the present value, or the result of `fallback`.
    ///
    /// `fallback` runs only when the container is `Absent`, so it may carry
    /// side effects such as logging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).get_or_else(|| 0), 1);
    /// assert_eq!(Maybe::absent().get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the present value, or `default`.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns `self` if present, otherwise the container built by `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Maybe;
    ///
    /// let nickname: Maybe<&str> = Maybe::absent();
    /// assert_eq!(nickname.or_else(|| Maybe::present("ada")), Maybe::Present("ada"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Outcome`], using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::{Maybe, Outcome};
    ///
    /// let missing: Maybe<i32> = Maybe::absent();
    /// assert_eq!(missing.ok_or("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<A, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Outcome`], building the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Default for Maybe<A> {
    /// Returns `Absent`.
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}
