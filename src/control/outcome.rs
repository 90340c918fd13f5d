//! Outcome type - a success or a failure carrying an error.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It models "errors
//! as values": a fallible step returns an `Outcome` instead of unwinding,
//! and a chain of steps built with [`Outcome::map`] and
//! [`Outcome::flat_map`] stops at the first `Failure`. The error that
//! stopped the chain is carried to the end untouched, where
//! [`Outcome::fold`] turns either case into a single result type.
//!
//! # Examples
//!
//! ```rust
//! use carton::control::Outcome;
//!
//! fn parse(text: &str) -> Outcome<u8, String> {
//!     Outcome::from(text.trim().parse::<u8>()).map_failure(|error| error.to_string())
//! }
//!
//! let report = parse(" 41 ")
//!     .map(|n| n + 1)
//!     .fold(|error| format!("error: {error}"), |n| format!("value: {n}"));
//! assert_eq!(report, "value: 42");
//!
//! let report = parse("many")
//!     .map(|n| n + 1)
//!     .fold(|error| format!("error: {error}"), |n| format!("value: {n}"));
//! assert_eq!(report, "error: invalid digit found in string");
//! ```

use std::fmt;

use crate::typeclass::TypeConstructor;

/// A value that is either a success or a failure.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use carton::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(21);
/// assert_eq!(success.map(|n| n * 2), Outcome::Success(42));
///
/// let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
/// assert_eq!(failure.map(|n| n * 2), Outcome::Failure("boom".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds an outcome from a nullable value.
    ///
    /// `Some(value)` becomes `Success(value)`; `None` becomes a `Failure`
    /// whose error is produced by `on_absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let colors = [("red", "#ff0000"), ("blue", "#0000ff")];
    /// let lookup = |name: &str| {
    ///     Outcome::from_nullable(
    ///         colors.iter().find(|(key, _)| *key == name).map(|(_, hex)| *hex),
    ///         || format!("no color named {name}"),
    ///     )
    /// };
    /// assert_eq!(lookup("blue"), Outcome::Success("#0000ff"));
    /// assert_eq!(lookup("teal"), Outcome::Failure("no color named teal".to_string()));
    /// ```
    #[inline]
    pub fn from_nullable<F>(value: Option<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(on_absent()),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the payload of either case.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns `Some(value)` for a `Success`, otherwise `None`.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns `Some(error)` for a `Failure`, otherwise `None`.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// A `Failure` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let success: Outcome<&str, ()> = Outcome::success("fern");
    /// assert_eq!(success.map(str::len), Outcome::Success(4));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure payload.
    ///
    /// A `Success` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("denied");
    /// assert_eq!(failure.map_failure(str::len), Outcome::Failure(6));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// For `Success(v)` the result is `function(v)`, with no nesting. A
    /// `Failure` is returned unchanged and `function` is not called, so a
    /// chain stops at its first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(Outcome::success(8).flat_map(halve).flat_map(halve), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::success(6).flat_map(halve).flat_map(halve),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(function)
    }

    /// Recovers from a failure with a step that may itself fail.
    ///
    /// A `Success` is returned unchanged and `recovery` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let cached: Outcome<&str, &str> = Outcome::failure("cache miss");
    /// let fetched: Outcome<&str, ()> = cached.or_else(|_| Outcome::success("fresh"));
    /// assert_eq!(fetched, Outcome::Success("fresh"));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, recovery: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the outcome by calling exactly one of two handlers.
    ///
    /// Both handlers return the same type, so the two cases meet in a single
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("Access denied".to_string());
    /// assert_eq!(failure.fold(|error| error, |n| n.to_string()), "Access denied");
    ///
    /// let success: Outcome<i32, String> = Outcome::success(7);
    /// assert_eq!(success.fold(|error| error, |n| n.to_string()), "7");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, or derives one from the error.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}
