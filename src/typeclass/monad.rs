//! Monad type class - the uniform chaining contract.
//!
//! This module provides the [`Monad`] trait, the abstract shape every
//! container in this library must satisfy. `bind` is the only required
//! chaining primitive; `map` is a provided method defined purely in terms
//! of `bind` and `unit`, and the per-type `lift`/`lift2` static factories
//! are likewise mechanical wrappers around them.
//!
//! The contract is enforced at compile time: the trait itself cannot be
//! instantiated, and a concrete type that does not supply its own `bind`
//! simply does not compile. There is no runtime capability check.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the
//! function:
//!
//! ```text
//! Self::unit(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `unit` to a monad returns the original monad:
//!
//! ```text
//! m.bind(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! // Chaining Maybe computations
//! let result = just(5).bind(|n| if n > 0 { just(n * 2) } else { nothing() });
//! assert_eq!(result, just(10));
//!
//! // Nothing short-circuits the rest of the chain
//! let result = nothing::<i32>().bind(|n| just(n * 2));
//! assert_eq!(result, nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that support sequencing of computations.
///
/// `bind` is the fundamental operation: it feeds the contained value(s)
/// into a transform that itself produces a container, so each step can
/// decide what the next step looks like. `map` is derived — it wraps a
/// plain value-to-value transform in [`Monad::unit`] and binds it.
///
/// The transform takes `FnMut` rather than `FnOnce` so that a single
/// signature covers the whole closed set of containers: `List` applies the
/// transform once per element.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::unit(a).bind(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.bind(Self::unit) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Monad;
/// use monadic::container::Maybe;
///
/// fn double_positive<M>(wrapped: M) -> M::WithType<i32>
/// where
///     M: Monad<Inner = i32>,
/// {
///     wrapped.bind(|n| M::unit(n * 2))
/// }
///
/// assert_eq!(double_positive(Maybe::Just(21)), Maybe::Just(42));
/// assert_eq!(double_positive(Maybe::<i32>::Nothing), Maybe::Nothing);
/// ```
pub trait Monad: TypeConstructor {
    /// Wraps a plain value in this container shape.
    ///
    /// This is the container constructor the derived operations are built
    /// from: `map` re-wraps through it, and `lift` produces
    /// `value -> unit(transform(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Monad;
    /// use monadic::container::{List, Maybe};
    ///
    /// let wrapped: Maybe<i32> = Maybe::<()>::unit(42);
    /// assert_eq!(wrapped, Maybe::Just(42));
    ///
    /// // For List, unit builds a single-element list
    /// let singleton: List<i32> = List::<()>::unit(42);
    /// assert_eq!(singleton.len(), 1);
    /// ```
    fn unit<B>(value: B) -> Self::WithType<B>;

    /// Applies a container-producing transform to the contained value(s).
    ///
    /// This is the only required chaining primitive. Concrete types give it
    /// their own semantics: `Identity` and `Either` apply the transform to
    /// their (active) value and return its result verbatim, `Maybe` short
    /// circuits on `Nothing`, and `List` applies it per element and
    /// flattens one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let result = just(5).bind(|n| just(n + 3));
    /// assert_eq!(result, just(8));
    /// ```
    fn bind<B, F>(self, transform: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Applies a plain transform to the contained value(s), re-wrapping the
    /// result.
    ///
    /// Defined as `bind` composed with a container-constructing transform;
    /// concrete types never override it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let result = just(5).map(|n| n + 3);
    /// assert_eq!(result, just(8));
    ///
    /// // Mapping the identity transform changes nothing
    /// let result = list![1, 2, 3].map(|n| n);
    /// assert_eq!(result, list![1, 2, 3]);
    /// ```
    #[inline]
    fn map<B, F>(self, mut transform: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> B,
    {
        self.bind(move |value| Self::unit(transform(value)))
    }
}
