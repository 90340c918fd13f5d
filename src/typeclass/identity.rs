//! Identity container - the identity functor.
//!
//! `Identity` is the simplest possible container: it holds exactly one value
//! and adds no behaviour of its own. It exists so a computation can be
//! written as a left-to-right chain of small transformations instead of a
//! nest of function calls:
//!
//! ```rust
//! use carton::typeclass::Identity;
//!
//! let next_char = Identity::new(" 64 ")
//!     .map(str::trim)
//!     .map(|text| text.parse::<u32>().unwrap_or_default())
//!     .map(|code| code + 1)
//!     .fold(|code| char::from_u32(code).map(String::from).unwrap_or_default());
//! assert_eq!(next_char, "A");
//! ```
//!
//! There is no failure case. A panic inside a mapped function propagates to
//! the caller unchanged.

use std::fmt;

use super::TypeConstructor;

/// The identity container - wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use carton::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Wraps a value. Same as [`Identity::new`].
    #[inline]
    pub const fn wrap(value: A) -> Self {
        Self::new(value)
    }

    /// Applies `function` to the held value and wraps the result.
    ///
    /// Chained `map` calls compose: `c.map(f).map(g)` equals
    /// `c.map(|x| g(f(x)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::Identity;
    ///
    /// let shouted = Identity::new("hello").map(str::to_uppercase);
    /// assert_eq!(shouted, Identity::new("HELLO".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies `function` to the held value and returns its container as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::Identity;
    ///
    /// let sum = Identity::new(2).flat_map(|n| Identity::new(n + 3));
    /// assert_eq!(sum, Identity::new(5));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Leaves the container by applying `function` to the held value.
    ///
    /// This is the terminal step of a chain; the result is a raw value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::Identity;
    ///
    /// let length = Identity::new("four").fold(str::len);
    /// assert_eq!(length, 4);
    /// ```
    #[inline]
    pub fn fold<R, F>(self, function: F) -> R
    where
        F: FnOnce(A) -> R,
    {
        function(self.0)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carton::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // Basic functionality tests
    // =========================================================================

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_wrap_matches_new() {
        assert_eq!(Identity::wrap("value"), Identity::new("value"));
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_map_calls_function_once() {
        let calls = Cell::new(0);
        let result = Identity::new(1).map(|n| {
            calls.set(calls.get() + 1);
            n * 10
        });
        assert_eq!(result, Identity::new(10));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn identity_map_changes_type() {
        let result: Identity<String> = Identity::new(7).map(|n| format!("#{n}"));
        assert_eq!(result.into_inner(), "#7");
    }

    #[rstest]
    fn identity_fold_exits_container() {
        let total: usize = Identity::new(vec![1, 2, 3]).fold(|values| values.len());
        assert_eq!(total, 3);
    }

    #[rstest]
    fn identity_fold_with_identity_returns_value() {
        assert_eq!(Identity::new('z').fold(|c| c), 'z');
    }

    #[rstest]
    fn identity_flat_map_does_not_nest() {
        let result: Identity<i32> = Identity::new(4).flat_map(|n| Identity::new(n * n));
        assert_eq!(result, Identity::new(16));
    }

    #[rstest]
    fn identity_next_char_from_padded_number() {
        let result = Identity::new(" 64")
            .map(str::trim)
            .map(|text| text.parse::<u32>().unwrap())
            .map(|code| code + 1)
            .fold(|code| char::from_u32(code).unwrap().to_string());
        assert_eq!(result, "A");
    }

    #[rstest]
    #[should_panic(expected = "mapped function failed")]
    fn identity_map_propagates_panic() {
        let _ = Identity::new(1).map(|_: i32| -> i32 { panic!("mapped function failed") });
    }

    // =========================================================================
    // Derive and conversion tests
    // =========================================================================

    #[rstest]
    fn identity_default_works() {
        let default_int: Identity<i32> = Identity::default();
        assert_eq!(default_int.into_inner(), 0);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    #[case(42, "Identity(42)")]
    #[case(-1, "Identity(-1)")]
    fn identity_display(#[case] value: i32, #[case] expected: &str) {
        assert_eq!(Identity::new(value).to_string(), expected);
    }

    #[rstest]
    fn identity_ord_works() {
        assert!(Identity::new(1) < Identity::new(2));
    }
}
