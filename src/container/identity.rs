//! Identity container - always holds exactly one value.
//!
//! `Identity` is the simplest member of the container family: it wraps a
//! single value and adds no behavior beyond the uniform chaining protocol.
//! It doubles as the joining vehicle for every `lift2` in the library —
//! operands are funneled through `Into<Identity<_>>` so that raw values and
//! already-wrapped values can be mixed freely.

use std::fmt;
use std::future::{IntoFuture, Ready};

use crate::typeclass::{Monad, TypeConstructor};

/// A container holding exactly one value.
///
/// The value is always present: absence is not representable in the type,
/// which is what makes `Identity` the base shape the other containers
/// refine. Instances are immutable after construction.
///
/// # Examples
///
/// ```rust
/// use monadic::container::{Identity, identity};
///
/// let wrapped = identity(5);
/// assert_eq!(wrapped.bind(|x| x + 3), 8);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

/// Constructs an [`Identity`] wrapping the given value.
///
/// # Examples
///
/// ```rust
/// use monadic::container::identity;
///
/// assert_eq!(identity(5).into_value(), 5);
/// ```
#[inline]
pub const fn identity<A>(value: A) -> Identity<A> {
    Identity(value)
}

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::container::Identity;
    ///
    /// let wrapped = Identity::new(42);
    /// assert_eq!(wrapped.into_value(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the container and returns the wrapped value.
    #[inline]
    pub fn into_value(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_value(&self) -> &A {
        &self.0
    }

    /// Applies a transform to the wrapped value, returning whatever the
    /// transform returns — no re-wrapping takes place.
    ///
    /// When the transform itself returns a container, this is the monadic
    /// bind; when it returns a plain value, the chain simply ends with that
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::container::identity;
    ///
    /// assert_eq!(identity(5).bind(|x| x + 3), 8);
    ///
    /// // A container-returning transform stays wrapped
    /// let nested = identity(5).bind(|x| identity(x + 3));
    /// assert_eq!(nested, identity(8));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, transform: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        transform(self.0)
    }

    /// Wraps a plain value-to-value transform into one that produces an
    /// `Identity`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::container::{Identity, identity};
    ///
    /// let lifted = Identity::lift(|x: i32| x + 3);
    /// assert_eq!(lifted(5), identity(8));
    /// ```
    pub fn lift<B, F>(transform: F) -> impl Fn(A) -> Identity<B>
    where
        F: Fn(A) -> B,
    {
        move |value| Identity(transform(value))
    }

    /// Wraps a binary transform into one that joins two operands — raw
    /// values or already-wrapped `Identity` values, interchangeably — and
    /// produces an `Identity` of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::container::{Identity, identity};
    ///
    /// let lifted = Identity::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(5, 3), identity(8));
    ///
    /// let lifted = Identity::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(identity(5), identity(3)), identity(8));
    /// ```
    pub fn lift2<B, C, MA, MB, F>(transform: F) -> impl FnOnce(MA, MB) -> Identity<C>
    where
        MA: Into<Identity<A>>,
        MB: Into<Identity<B>>,
        F: FnOnce(A, B) -> C,
    {
        move |first, second| {
            first
                .into()
                .bind(|a| second.into().bind(|b| Identity(transform(a, b))))
        }
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn unit<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn bind<B, F>(self, mut transform: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        transform(self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Continuation bridging: an `Identity` can be awaited directly, resolving
/// to its wrapped value. An async consumer can chain through it without
/// knowing the value was never deferred.
///
/// ```rust,ignore
/// let value = identity(5).await;
/// assert_eq!(value, 5);
/// ```
impl<A> IntoFuture for Identity<A> {
    type Output = A;
    type IntoFuture = Ready<A>;

    fn into_future(self) -> Self::IntoFuture {
        std::future::ready(self.0)
    }
}
