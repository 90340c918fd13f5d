//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the constructor through an associated type
//! family, so a trait like [`Functor`](super::Functor) can say "the same
//! container, now holding `B`".
//!
//! # Example
//!
//! ```rust
//! use carton::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabelled: Identity<String> = relabel(Identity::new(42));
//! assert_eq!(relabelled.into_inner(), String::new());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a constructor applied to some type, for example
/// `Identity<A>` or `Outcome<T, E>`. For two-parameter containers the extra
/// parameter stays fixed: `Outcome<T, E>::WithType<B>` is `Outcome<B, E>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// The bound keeps the result a `TypeConstructor` so transformations can
    /// be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Identity<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }

    #[test]
    fn with_type_of_inner_is_the_original_type() {
        fn assert_same<T: TypeConstructor<Inner = u8, WithType<u8> = T>>() {}

        assert_same::<Identity<u8>>();
    }
}
