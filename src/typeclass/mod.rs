//! Type class traits - the abstract contract behind the containers.
//!
//! This module provides the trait layer every container in the library is
//! checked against:
//!
//! - [`TypeConstructor`]: Generic-Associated-Type emulation of
//!   higher-kinded types, so one trait can range over all container shapes
//! - [`Monad`]: the uniform chaining contract (`unit` + `bind` required,
//!   `map` derived)
//! - [`MonadPlus`]: the optional zero/plus monoid structure (`Maybe`,
//!   `List`)
//!
//! The abstract contract is never instantiable on its own, and a concrete
//! type missing its `bind` is a compile error — the construction-time
//! capability checks of a dynamic language become type-system facts here.
//!
//! # Examples
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! // One generic function, statically dispatched over the closed set
//! fn add_three<M: Monad<Inner = i32>>(wrapped: M) -> M::WithType<i32> {
//!     wrapped.map(|n| n + 3)
//! }
//!
//! assert_eq!(add_three(identity(5)), identity(8));
//! assert_eq!(add_three(just(5)), just(8));
//! assert_eq!(add_three(list![5, 7, 11]), list![8, 10, 14]);
//! ```

mod higher;
mod monad;
mod plus;

pub use higher::TypeConstructor;
pub use monad::Monad;
pub use plus::MonadPlus;
