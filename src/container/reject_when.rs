//! RejectWhen container - a guarded value with an explicit failure channel.
//!
//! `RejectWhen<A, E>` wraps a value together with a guard predicate and an
//! error factory. Every `bind` re-evaluates the predicate against the
//! current value: a match is turned into a domain error via the factory and
//! routed through the chain's `reject` callback — an expected outcome
//! flowing through a designated channel, not an exceptional condition.
//!
//! The guard composes across shapes. [`bind`](RejectWhen::bind) handles a
//! plain wrapped value; [`bind_inner`](RejectWhen::bind_inner) descends into
//! a wrapped [`Maybe`]; and the [`bridge`](crate::bridge) module rebuilds
//! the guard around the resolved value of a deferred computation, so a
//! guarded check can transparently wait for a pending result before
//! testing it.
//!
//! Unlike the other containers, the chaining primitive here takes two
//! callbacks, so `RejectWhen` does not implement the single-transform
//! [`Monad`](crate::typeclass::Monad) trait; it satisfies the uniform
//! protocol through its own `bind`/`map`/`lift`/`lift2`.

use std::fmt;
use std::future::{IntoFuture, Ready};

use crate::container::{Identity, Maybe};

/// A boxed guard predicate, re-evaluated against the value on every bind.
type Guard<A> = Box<dyn Fn(&A) -> bool>;

/// A boxed factory turning a rejected value into a domain error.
type ErrorFactory<A, E> = Box<dyn Fn(&A) -> E>;

/// A value guarded by a predicate and an error factory.
///
/// On [`bind`](Self::bind), the predicate is tested against the wrapped
/// value: a match produces `error(value)` through the `reject` callback,
/// otherwise the value flows into the `transform` callback. Both callbacks
/// return verbatim, so the chain decides what a rejection becomes.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let guarded = reject_when(
///     |value: &i32| *value < 0,
///     |value: &i32| format!("rejected: {value}"),
///     5,
/// );
/// let outcome = guarded.bind(|value| format!("accepted: {value}"), |error| error);
/// assert_eq!(outcome, "accepted: 5");
/// ```
pub struct RejectWhen<A, E> {
    value: A,
    when: Guard<A>,
    error: ErrorFactory<A, E>,
}

/// Constructs a [`RejectWhen`] from a guard predicate, an error factory and
/// a value.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let guarded = reject_when(
///     |value: &i32| *value == 0,
///     |_: &i32| String::from("zero is not allowed"),
///     0,
/// );
/// let outcome = guarded.bind(|value| Ok(value), |error| Err(error));
/// assert_eq!(outcome, Err(String::from("zero is not allowed")));
/// ```
#[inline]
pub fn reject_when<A, E, W, F>(when: W, error: F, value: A) -> RejectWhen<A, E>
where
    W: Fn(&A) -> bool + 'static,
    F: Fn(&A) -> E + 'static,
{
    RejectWhen::new(when, error, value)
}

impl<A, E> RejectWhen<A, E> {
    /// Creates a guarded value. The guard and the error factory are stored
    /// boxed and re-used across [`map`](Self::map) steps.
    pub fn new<W, F>(when: W, error: F, value: A) -> Self
    where
        W: Fn(&A) -> bool + 'static,
        F: Fn(&A) -> E + 'static,
    {
        Self {
            value,
            when: Box::new(when),
            error: Box::new(error),
        }
    }

    /// Returns a reference to the wrapped value. The guard is not
    /// evaluated.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Consumes the container and returns the wrapped value, discarding
    /// the guard.
    #[inline]
    pub fn into_value(self) -> A {
        self.value
    }

    /// Tests the guard and routes the value to one of two callbacks.
    ///
    /// 1. If `when(value)` holds, `reject(error(value))` is invoked and its
    ///    result returned verbatim — the terminal failure path.
    /// 2. Otherwise `transform(value)` is invoked and its result returned
    ///    verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let guard_negative = |value: &i32| *value < 0;
    /// let describe = |value: &i32| format!("rejected: {value}");
    ///
    /// let passed = reject_when(guard_negative, describe, 5)
    ///     .bind(|value| value + 3, |_| -1);
    /// assert_eq!(passed, 8);
    ///
    /// let rejected = reject_when(guard_negative, describe, -5)
    ///     .bind(|value| format!("accepted: {value}"), |error| error);
    /// assert_eq!(rejected, "rejected: -5");
    /// ```
    pub fn bind<R, T, J>(self, transform: T, reject: J) -> R
    where
        T: FnOnce(A) -> R,
        J: FnOnce(E) -> R,
    {
        if (self.when)(&self.value) {
            return reject((self.error)(&self.value));
        }
        transform(self.value)
    }

    /// Keeps the guard and transforms the wrapped value.
    ///
    /// The guard is re-checked on the next bind, not here — a transform may
    /// move the value into or out of the rejected region.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let guarded = reject_when(
    ///     |value: &i32| *value < 0,
    ///     |value: &i32| format!("rejected: {value}"),
    ///     5,
    /// );
    ///
    /// // Still passing after the transform
    /// let outcome = guarded.map(|value| value + 1).bind(|value| value, |_| -1);
    /// assert_eq!(outcome, 6);
    /// ```
    #[must_use]
    pub fn map<T>(self, transform: T) -> Self
    where
        T: FnOnce(A) -> A,
    {
        Self {
            value: transform(self.value),
            when: self.when,
            error: self.error,
        }
    }

    /// Wraps a plain transform into a reusable guarded constructor: each
    /// call produces a fresh `RejectWhen` around the transformed input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    /// use monadic::container::RejectWhen;
    ///
    /// let lifted = RejectWhen::lift(
    ///     |value: &i32| *value < 0,
    ///     |value: &i32| format!("rejected: {value}"),
    ///     |value: i32| value + 3,
    /// );
    ///
    /// let outcome = lifted(5).bind(|value| value, |_| -1);
    /// assert_eq!(outcome, 8);
    /// ```
    pub fn lift<V, W, F, T>(when: W, error: F, transform: T) -> impl Fn(V) -> Self
    where
        W: Fn(&A) -> bool + Clone + 'static,
        F: Fn(&A) -> E + Clone + 'static,
        T: Fn(V) -> A,
    {
        move |value| Self::new(when.clone(), error.clone(), transform(value))
    }

    /// Wraps a binary transform into a reusable guarded constructor that
    /// joins two operands — raw values or `Identity`-wrapped values,
    /// interchangeably — before applying the transform and guarding the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    /// use monadic::container::RejectWhen;
    ///
    /// let lifted = RejectWhen::lift2(
    ///     |value: &i32| *value < 0,
    ///     |value: &i32| format!("rejected: {value}"),
    ///     |x: i32, y: i32| x + y,
    /// );
    ///
    /// let outcome = lifted(identity(5), 3).bind(|value| value, |_| -1);
    /// assert_eq!(outcome, 8);
    /// ```
    pub fn lift2<X, Y, MA, MB, W, F, T>(
        when: W,
        error: F,
        transform: T,
    ) -> impl FnOnce(MA, MB) -> Self
    where
        MA: Into<Identity<X>>,
        MB: Into<Identity<Y>>,
        W: Fn(&A) -> bool + 'static,
        F: Fn(&A) -> E + 'static,
        T: FnOnce(X, Y) -> A,
    {
        move |first, second| {
            let joined = first
                .into()
                .bind(|x| second.into().bind(|y| Identity(transform(x, y))));
            Self::new(when, error, joined.into_value())
        }
    }
}

impl<A, E> RejectWhen<Maybe<A>, E> {
    /// Tests the guard, then descends into the wrapped [`Maybe`]: a `Just`
    /// feeds its value to `transform`, while a `Nothing` that slipped past
    /// the guard still cannot produce a value and is routed through
    /// `reject(error(value))`.
    ///
    /// This composes guard checks across nested containers — typically a
    /// guard over emptiness wrapped around an optional result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let guard_nothing = |value: &Maybe<i32>| value.is_nothing();
    /// let describe = |_: &Maybe<i32>| String::from("value rejected");
    ///
    /// let passed = reject_when(guard_nothing, describe, maybe(Some(5)))
    ///     .bind_inner(|value| Ok(value), |error| Err(error));
    /// assert_eq!(passed, Ok(5));
    ///
    /// let rejected = reject_when(guard_nothing, describe, maybe(None))
    ///     .bind_inner(|value| Ok(value), |error| Err(error));
    /// assert_eq!(rejected, Err(String::from("value rejected")));
    /// ```
    pub fn bind_inner<R, T, J>(self, transform: T, reject: J) -> R
    where
        T: FnOnce(A) -> R,
        J: FnOnce(E) -> R,
    {
        if (self.when)(&self.value) {
            return reject((self.error)(&self.value));
        }
        match self.value {
            Maybe::Just(value) => transform(value),
            Maybe::Nothing => reject((self.error)(&Maybe::Nothing)),
        }
    }
}

impl<A: fmt::Debug, E> fmt::Debug for RejectWhen<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RejectWhen")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<A: fmt::Display, E> fmt::Display for RejectWhen<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, formatter)
    }
}

/// Continuation bridging: awaiting a guarded value resolves it through the
/// guard — `Ok(value)` when the guard passes, `Err(error(value))` when it
/// rejects.
///
/// ```rust,ignore
/// let outcome = reject_when(|v: &i32| *v < 0, |v: &i32| *v, 5).await;
/// assert_eq!(outcome, Ok(5));
/// ```
impl<A, E> IntoFuture for RejectWhen<A, E> {
    type Output = Result<A, E>;
    type IntoFuture = Ready<Result<A, E>>;

    fn into_future(self) -> Self::IntoFuture {
        std::future::ready(self.bind(Ok, Err))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_guard_decides_the_channel(value in any::<i32>()) {
            let outcome = reject_when(
                |value: &i32| *value < 0,
                |value: &i32| *value,
                value,
            )
            .bind(Ok, Err);

            if value < 0 {
                prop_assert_eq!(outcome, Err(value));
            } else {
                prop_assert_eq!(outcome, Ok(value));
            }
        }

        #[test]
        fn prop_map_identity_preserves_outcome(value in any::<i32>()) {
            let plain = reject_when(|value: &i32| *value < 0, |value: &i32| *value, value)
                .bind(Ok, Err);
            let mapped = reject_when(|value: &i32| *value < 0, |value: &i32| *value, value)
                .map(|value| value)
                .bind(Ok, Err);
            prop_assert_eq!(plain, mapped);
        }
    }
}
