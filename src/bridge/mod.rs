//! Adapters between containers and deferred computations.
//!
//! A deferred computation is anything satisfying the minimal "eventually
//! produces a value or fails" interface: `Future<Output = Result<T, E>>`.
//! The adapters here are explicit, named conversions — a value is never
//! inspected at runtime to discover whether it happens to be pending.
//!
//! Three bridges are provided:
//!
//! - [`maybe_deferred`]: resolves a deferred optional value into a
//!   [`Maybe`], absorbing failure into `Nothing`. The failure reason is
//!   discarded by design; callers that need it should guard a plain
//!   `Result` future instead.
//! - [`bind_deferred`] / [`bind_deferred_inner`]: rebuild a guard around
//!   the resolved value of a deferred computation and bind it, so a
//!   guarded check transparently waits for a pending result before testing
//!   its predicate. Upstream failure propagates on the deferred
//!   computation's own failure channel.
//! - `IntoFuture` on `Identity`, `Either` and `RejectWhen` (defined next to
//!   each type): a monadic value can be `.await`ed by an async consumer
//!   without knowing it was never deferred.
//!
//! Nothing here spawns or blocks: containers either compute synchronously
//! or hand the rest of the chain to the host's cooperative scheduler by
//! returning a future. Cancellation is not supported — once a chain is
//! polled it runs to completion or failure; dropping an unpolled future is
//! the host's concern.
//!
//! # Examples
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! futures::executor::block_on(async {
//!     // A deferred success resolves into Just
//!     let resolved = maybe_deferred(async { Ok::<_, String>(Some(5)) }).await;
//!     assert_eq!(resolved, just(5));
//!
//!     // A deferred failure is absorbed into Nothing
//!     let absorbed = maybe_deferred(async { Err::<Option<i32>, _>("boom") }).await;
//!     assert_eq!(absorbed, nothing());
//! });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use crate::container::{Maybe, RejectWhen, maybe};

/// A boxed deferred computation: eventually a value or a failure.
pub type Deferred<T, E> = BoxFuture<'static, Result<T, E>>;

/// Erases a deferred computation into the boxed [`Deferred`] form.
///
/// # Examples
///
/// ```rust
/// use monadic::bridge::{Deferred, defer};
///
/// let deferred: Deferred<i32, String> = defer(async { Ok(5) });
/// ```
pub fn defer<F, T, E>(future: F) -> Deferred<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    future.boxed()
}

pin_project! {
    /// Future returned by [`maybe_deferred`].
    ///
    /// Resolves to `maybe(value)` when the underlying computation succeeds
    /// and to `Nothing` when it fails. The future itself never fails.
    pub struct Absorb<F> {
        #[pin]
        deferred: F,
    }
}

impl<F, A, E> Future for Absorb<F>
where
    F: Future<Output = Result<Option<A>, E>>,
{
    type Output = Maybe<A>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match futures::ready!(this.deferred.poll(context)) {
            Ok(value) => Poll::Ready(maybe(value)),
            Err(_) => Poll::Ready(Maybe::Nothing),
        }
    }
}

/// Resolves a deferred optional value into a [`Maybe`], absorbing failure
/// into `Nothing`.
///
/// Success re-enters the [`maybe`](crate::container::maybe) factory, so a
/// successfully resolved `None` also becomes `Nothing`. The failure reason
/// is discarded — asynchronous failure becomes emptiness, not a propagated
/// error.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// futures::executor::block_on(async {
///     let resolved = maybe_deferred(async { Ok::<_, String>(Some(5)) }).await;
///     assert_eq!(resolved, just(5));
///
///     let empty = maybe_deferred(async { Ok::<_, String>(None::<i32>) }).await;
///     assert_eq!(empty, nothing());
/// });
/// ```
pub fn maybe_deferred<F, A, E>(deferred: F) -> Absorb<F>
where
    F: Future<Output = Result<Option<A>, E>>,
{
    Absorb { deferred }
}

/// Rebuilds a guard around the resolved value of a deferred computation
/// and binds it.
///
/// The guard is constructed only after the deferred value arrives, so the
/// predicate always tests the resolved value. Upstream failure propagates
/// on the deferred computation's own failure channel and never reaches the
/// guard.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// futures::executor::block_on(async {
///     let outcome = bind_deferred(
///         |value: &i32| *value < 0,
///         |value: &i32| format!("rejected: {value}"),
///         async { Ok::<_, String>(5) },
///         |value| value + 3,
///         |_| -1,
///     )
///     .await;
///     assert_eq!(outcome, Ok(8));
/// });
/// ```
pub async fn bind_deferred<A, E, Fail, R, D, W, F, T, J>(
    when: W,
    error: F,
    deferred: D,
    transform: T,
    reject: J,
) -> Result<R, Fail>
where
    D: Future<Output = Result<A, Fail>>,
    W: Fn(&A) -> bool + 'static,
    F: Fn(&A) -> E + 'static,
    T: FnOnce(A) -> R,
    J: FnOnce(E) -> R,
{
    let value = deferred.await?;
    Ok(RejectWhen::new(when, error, value).bind(transform, reject))
}

/// Rebuilds a guard around a deferred [`Maybe`] and binds through it.
///
/// Like [`bind_deferred`], but the resolved value is itself a container:
/// after the guard passes, the transform receives the value inside a
/// `Just`, and a resolved `Nothing` is routed through `reject` (see
/// [`RejectWhen::bind_inner`]).
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
/// use std::convert::Infallible;
///
/// futures::executor::block_on(async {
///     let outcome = bind_deferred_inner(
///         |value: &Maybe<i32>| value.is_nothing(),
///         |_: &Maybe<i32>| String::from("value rejected"),
///         async { Ok::<_, Infallible>(just(5)) },
///         |value| Ok(value),
///         |error| Err(error),
///     )
///     .await;
///     assert_eq!(outcome, Ok(Ok(5)));
/// });
/// ```
pub async fn bind_deferred_inner<A, E, Fail, R, D, W, F, T, J>(
    when: W,
    error: F,
    deferred: D,
    transform: T,
    reject: J,
) -> Result<R, Fail>
where
    D: Future<Output = Result<Maybe<A>, Fail>>,
    W: Fn(&Maybe<A>) -> bool + 'static,
    F: Fn(&Maybe<A>) -> E + 'static,
    T: FnOnce(A) -> R,
    J: FnOnce(E) -> R,
{
    let value = deferred.await?;
    Ok(RejectWhen::new(when, error, value).bind_inner(transform, reject))
}
