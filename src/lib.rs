//! # monadic
//!
//! A small algebraic data type library providing a family of monadic
//! containers with a uniform `bind`/`map`/`lift`/`lift2` protocol and
//! transparent interop with deferred (async) computations.
//!
//! ## Overview
//!
//! The library is built around a closed set of container types, all
//! satisfying the same chaining contract:
//!
//! - [`Identity`](container::Identity): always holds exactly one value
//! - [`Maybe`](container::Maybe): an optional value (`Just`/`Nothing`) with
//!   first-success choice
//! - [`Either`](container::Either): a two-slot container whose right slot,
//!   when present, selects the active branch
//! - [`List`](container::List): zero or more ordered values with
//!   flattening `bind` and concatenation
//! - [`RejectWhen`](container::RejectWhen): a guarded value that routes to a
//!   failure callback whenever its predicate matches
//!
//! The [`typeclass`] module defines the abstract contract (`Monad`,
//! `MonadPlus`); the [`bridge`] module adapts containers to and from
//! deferred computations so that a monadic chain can absorb an asynchronous
//! sub-computation without the caller changing code paths.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the trait layer and all container types (default)
//! - `async`: deferred-computation adapters built on `futures` (default)
//! - `serde`: `Serialize`/`Deserialize` for the pure data containers
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let sum = identity(5).bind(|x| x + 3);
//! assert_eq!(sum, 8);
//!
//! let first = maybe(None).plus(just(7));
//! assert_eq!(first, just(7));
//!
//! let flattened = list![5, 7, 11].bind(|x| list![x + 3]);
//! assert_eq!(flattened, list![8, 10, 14]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, their factory functions, and the traits
/// that supply `map` and `plus`.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::container::*;

    #[cfg(feature = "typeclass")]
    pub use crate::list;

    #[cfg(feature = "async")]
    pub use crate::bridge::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod container;

#[cfg(feature = "async")]
pub mod bridge;
