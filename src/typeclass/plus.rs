//! Zero/plus structure - monads with an absorbing empty element and choice.
//!
//! Some containers carry a monoid structure on top of their monadic
//! contract: a designated empty element (`zero`) and an associative
//! combination operator (`plus`) with `zero` as its identity. `Maybe` uses
//! it for first-success choice, `List` for concatenation.
//!
//! # Laws
//!
//! All `MonadPlus` implementations must satisfy these laws:
//!
//! ## Absorption
//!
//! `zero` absorbs any bind, and binding into `zero` yields `zero`:
//!
//! ```text
//! zero.bind(f) == zero
//! m.bind(|_| zero) == zero
//! ```
//!
//! ## Left Identity Law
//!
//! ```text
//! zero.plus(m) == m
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.plus(zero) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.plus(n.plus(o)) == (m.plus(n)).plus(o)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! // First-success choice over optional values
//! let found = nothing().plus(just(5)).plus(just(7));
//! assert_eq!(found, just(5));
//!
//! // Concatenation over lists
//! let combined = list![1, 2].plus(list![3]);
//! assert_eq!(combined, list![1, 2, 3]);
//! ```

use super::monad::Monad;

/// A type class for monads with an absorbing zero element and an
/// associative choice operator.
///
/// # Laws
///
/// In addition to the monad laws:
///
/// ```text
/// zero.bind(f) == zero
/// m.bind(|_| zero) == zero
/// zero.plus(m) == m
/// m.plus(zero) == m
/// m.plus(n.plus(o)) == (m.plus(n)).plus(o)
/// ```
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
/// use monadic::container::Maybe;
///
/// let zero: Maybe<i32> = Maybe::zero();
/// assert_eq!(zero, nothing());
/// assert_eq!(zero.plus(just(42)), just(42));
/// ```
pub trait MonadPlus: Monad + Sized {
    /// Returns the empty element of this container.
    ///
    /// `zero` is absorbing for `bind` and the identity for `plus`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    /// use monadic::container::{List, Maybe};
    ///
    /// assert_eq!(Maybe::<i32>::zero(), nothing());
    /// assert!(List::<i32>::zero().is_empty());
    /// ```
    fn zero() -> Self;

    /// Combines two containers with choice semantics.
    ///
    /// For `Maybe` this is "first success": a `Just` on the left wins and
    /// the right operand is only consulted when the left is `Nothing`. For
    /// `List` it is concatenation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// assert_eq!(just(5).plus(just(7)), just(5));
    /// assert_eq!(nothing().plus(just(7)), just(7));
    /// ```
    #[must_use]
    fn plus(self, other: Self) -> Self;
}
