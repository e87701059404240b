//! Either container - a two-slot value whose right slot selects the branch.
//!
//! `Either<A>` always carries a `left` value and may carry a `right` value.
//! When `right` is present it is the active branch; otherwise `left` is.
//! This is a two-slot record, not a sum type: the left value is required by
//! construction and its presence is part of the container's contract.
//!
//! `bind` feeds the active value to the transform and returns the result
//! verbatim, exactly like [`Identity`](crate::container::Identity). (An
//! alternative semantics — re-wrapping the result in a fresh `Either`
//! preserving `left` — was considered and rejected: it cannot be typed
//! without forcing the transform to return the original value type, and the
//! verbatim behavior is what the chaining scenarios in this library rely
//! on.)

use std::fmt;
use std::future::{IntoFuture, Ready};

use crate::typeclass::{Monad, TypeConstructor};

/// A container with a required `left` slot and an optional `right` slot.
///
/// The right value, when present, is the active one: [`value`](Self::value)
/// and [`bind`](Self::bind) both prefer it and fall back to `left`.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let single = either(5);
/// assert_eq!(*single.value(), 5);
/// assert_eq!(single.bind(|x| x + 3), 8);
///
/// let both = either(5).with_right(7);
/// assert_eq!(*both.value(), 7);
/// assert_eq!(both.bind(|x| x + 3), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Either<A> {
    left: A,
    right: Option<A>,
}

/// Constructs an [`Either`] holding only a left value.
///
/// Use [`Either::with_right`] to attach a right value:
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// assert_eq!(*either(5).value(), 5);
/// assert_eq!(*either(5).with_right(7).value(), 7);
/// ```
#[inline]
pub const fn either<A>(left: A) -> Either<A> {
    Either { left, right: None }
}

impl<A> Either<A> {
    /// Creates an `Either` holding only a left value.
    #[inline]
    pub const fn new(left: A) -> Self {
        Self { left, right: None }
    }

    /// Attaches a right value, making it the active branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::container::Either;
    ///
    /// let both = Either::new(5).with_right(7);
    /// assert!(both.is_right_active());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_right(self, right: A) -> Self {
        Self {
            left: self.left,
            right: Some(right),
        }
    }

    /// Returns `true` if a right value is present (the active branch is
    /// right).
    #[inline]
    pub const fn is_right_active(&self) -> bool {
        self.right.is_some()
    }

    /// Returns a reference to the left value. Always present.
    #[inline]
    pub const fn left(&self) -> &A {
        &self.left
    }

    /// Returns a reference to the right value, if present.
    #[inline]
    pub const fn right(&self) -> Option<&A> {
        self.right.as_ref()
    }

    /// Returns a reference to the active value: right if present, else
    /// left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// assert_eq!(*either(5).value(), 5);
    /// assert_eq!(*either(5).with_right(7).value(), 7);
    /// ```
    #[inline]
    pub const fn value(&self) -> &A {
        match &self.right {
            Some(right) => right,
            None => &self.left,
        }
    }

    /// Consumes the container and returns the active value.
    #[inline]
    pub fn into_value(self) -> A {
        match self.right {
            Some(right) => right,
            None => self.left,
        }
    }

    /// Applies a transform to the active value, returning whatever the
    /// transform returns — no re-wrapping takes place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// assert_eq!(either(5).bind(|x| x + 3), 8);
    /// assert_eq!(either(5).with_right(7).bind(|x| x + 3), 10);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, transform: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        transform(self.into_value())
    }

    /// Wraps a plain transform into one that produces an `Either` holding
    /// the result as its left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = Either::lift(|x: i32| x + 3);
    /// assert_eq!(lifted(5), either(8));
    /// ```
    pub fn lift<B, F>(transform: F) -> impl Fn(A) -> Either<B>
    where
        F: Fn(A) -> B,
    {
        move |value| Either::new(transform(value))
    }

    /// Wraps a binary transform into one that joins two operands — raw
    /// values or `Either` values, interchangeably — and produces an
    /// `Either` of the result. A wrapped operand contributes its active
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = Either::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(5, 3), either(8));
    ///
    /// let lifted = Either::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(either(5).with_right(7), either(3)), either(10));
    /// ```
    pub fn lift2<B, C, MA, MB, F>(transform: F) -> impl FnOnce(MA, MB) -> Either<C>
    where
        MA: Into<Either<A>>,
        MB: Into<Either<B>>,
        F: FnOnce(A, B) -> C,
    {
        move |first, second| {
            first
                .into()
                .bind(|a| second.into().bind(|b| Either::new(transform(a, b))))
        }
    }
}

impl<A> TypeConstructor for Either<A> {
    type Inner = A;
    type WithType<B> = Either<B>;
}

impl<A> Monad for Either<A> {
    #[inline]
    fn unit<B>(value: B) -> Either<B> {
        Either::new(value)
    }

    #[inline]
    fn bind<B, F>(self, mut transform: F) -> Either<B>
    where
        F: FnMut(A) -> Either<B>,
    {
        transform(self.into_value())
    }
}

impl<A> From<A> for Either<A> {
    fn from(left: A) -> Self {
        Self::new(left)
    }
}

impl<A: fmt::Display> fmt::Display for Either<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), formatter)
    }
}

/// Continuation bridging: an `Either` can be awaited directly, resolving to
/// its active value.
///
/// ```rust,ignore
/// let value = either(5).with_right(7).await;
/// assert_eq!(value, 7);
/// ```
impl<A> IntoFuture for Either<A> {
    type Output = A;
    type IntoFuture = Ready<A>;

    fn into_future(self) -> Self::IntoFuture {
        std::future::ready(self.into_value())
    }
}
