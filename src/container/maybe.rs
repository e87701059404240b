//! Maybe container - an optional value with first-success choice.
//!
//! `Maybe<A>` is a tagged union of two variants: `Just(value)` when a value
//! is present and the payload-free `Nothing` when it is absent. `Nothing`
//! plays the role the original design gave a process-wide sentinel object:
//! it is a single, immutable, shareable empty element, and comparing a
//! payload-free variant is identity comparison.
//!
//! `Maybe` is the library's canonical [`MonadPlus`]: `Nothing` is the zero
//! element and [`plus`](MonadPlus::plus) picks the first `Just`.
//!
//! Deliberately absent: `Maybe` cannot be awaited. A definite absence must
//! be branched on explicitly rather than silently flowing through an async
//! consumer's success path — see the compile-time assertion at the bottom
//! of this module. The async entry point is
//! [`bridge::maybe_deferred`](crate::bridge::maybe_deferred), which resolves
//! a deferred computation into a `Maybe`, absorbing failure into `Nothing`.

use std::fmt;

use crate::typeclass::{Monad, MonadPlus, TypeConstructor};

/// An optional value: either `Just(value)` or the empty `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let present = maybe(Some(5));
/// assert_eq!(present, just(5));
/// assert_eq!(present.value(), Some(&5));
///
/// let absent: Maybe<i32> = maybe(None);
/// assert!(absent.is_nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// The shared empty element; absorbing for `bind`, identity for `plus`.
    #[default]
    Nothing,
}

/// Constructs a [`Maybe`] from an optional value: `Some` becomes `Just`,
/// `None` becomes `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// assert_eq!(maybe(Some(5)), just(5));
/// assert_eq!(maybe::<i32>(None), nothing());
/// ```
#[inline]
pub fn maybe<A>(value: Option<A>) -> Maybe<A> {
    match value {
        Some(value) => Maybe::Just(value),
        None => Maybe::Nothing,
    }
}

/// Constructs a `Just` directly from a present value.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// assert_eq!(just(5).value(), Some(&5));
/// ```
#[inline]
pub const fn just<A>(value: A) -> Maybe<A> {
    Maybe::Just(value)
}

/// Returns the empty element.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// assert!(nothing::<i32>().is_nothing());
/// ```
#[inline]
#[must_use]
pub const fn nothing<A>() -> Maybe<A> {
    Maybe::Nothing
}

impl<A> Maybe<A> {
    /// Returns `true` if a value is present.
    ///
    /// `is_just` and [`is_nothing`](Self::is_nothing) are mutually
    /// exclusive and exhaustive.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is the empty element.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the contained value, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// assert_eq!(just(5).value(), Some(&5));
    /// assert_eq!(nothing::<i32>().value(), None);
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into the native optional type.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Applies a `Maybe`-producing transform to the contained value.
    ///
    /// `Just` feeds its value to the transform and returns the result
    /// verbatim; `Nothing` absorbs any transform and stays `Nothing` — the
    /// monadic short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let result = just(5).bind(|n| just(n + 3));
    /// assert_eq!(result, just(8));
    ///
    /// let skipped = nothing::<i32>().bind(|n| just(n + 3));
    /// assert_eq!(skipped, nothing());
    /// ```
    #[inline]
    pub fn bind<B, F>(self, transform: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => transform(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Wraps a plain transform into one that produces a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = Maybe::lift(|x: i32| x + 3);
    /// assert_eq!(lifted(5), just(8));
    /// ```
    pub fn lift<B, F>(transform: F) -> impl Fn(A) -> Maybe<B>
    where
        F: Fn(A) -> B,
    {
        move |value| Maybe::Just(transform(value))
    }

    /// Wraps a binary transform into one that joins two operands — raw
    /// values or `Maybe` values, interchangeably — and produces a `Maybe`
    /// of the result. An empty operand empties the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = Maybe::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(5, 3), just(8));
    ///
    /// let lifted = Maybe::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(just(5), nothing()), nothing());
    /// ```
    pub fn lift2<B, C, MA, MB, F>(transform: F) -> impl FnOnce(MA, MB) -> Maybe<C>
    where
        MA: Into<Maybe<A>>,
        MB: Into<Maybe<B>>,
        F: FnOnce(A, B) -> C,
    {
        move |first, second| {
            first
                .into()
                .bind(|a| second.into().bind(|b| Maybe::Just(transform(a, b))))
        }
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn unit<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn bind<B, F>(self, mut transform: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => transform(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> MonadPlus for Maybe<A> {
    #[inline]
    fn zero() -> Self {
        Self::Nothing
    }

    /// First-success choice: a `Just` wins, `Nothing` yields to the other
    /// operand.
    #[inline]
    fn plus(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }
}

impl<A> From<A> for Maybe<A> {
    fn from(value: A) -> Self {
        Self::Just(value)
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => fmt::Display::fmt(value, formatter),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// Continuation bridging is deliberately absent: a definite absence must be
// branched on, not silently chained through an async consumer's success
// path.
static_assertions::assert_not_impl_any!(Maybe<i32>: std::future::IntoFuture);
static_assertions::assert_not_impl_any!(Maybe<String>: std::future::IntoFuture);
