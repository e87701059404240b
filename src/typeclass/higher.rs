//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for abstracting over the library's
//! container types. Rust does not natively support Higher-Kinded Types —
//! there is no way to write a trait ranging over `Maybe<_>` and `List<_>`
//! as bare type constructors — so the [`TypeConstructor`] trait uses a
//! Generic Associated Type to stand in for "the same container, holding a
//! different element type".
//!
//! # Example
//!
//! ```rust
//! use monadic::typeclass::TypeConstructor;
//! use monadic::container::Maybe;
//!
//! // Maybe implements TypeConstructor
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rebuilt: Maybe<String> = rebuild(Maybe::Just(42));
//! assert_eq!(rebuilt, Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// Implemented by the closed set of container types in this library:
/// `Identity`, `Maybe`, `Either` and `List`. (`RejectWhen` is excluded —
/// its chaining primitive carries an explicit failure channel and does not
/// fit the single-transform shape; see `container::RejectWhen`.)
///
/// # Associated Types
///
/// - `Inner`: the element type this container currently holds.
/// - `WithType<B>`: the same container shape holding a `B` instead.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The element type this container is applied to.
    ///
    /// For example, for `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same container shape applied to a different element type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result
    /// chainable through further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}
