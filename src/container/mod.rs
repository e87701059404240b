//! Concrete container types - the closed set behind the uniform protocol.
//!
//! Every type here satisfies the `bind`/`map`/`lift`/`lift2` contract:
//!
//! - [`Identity`]: always holds exactly one value
//! - [`Maybe`]: `Just`/`Nothing`, with first-success [`plus`]
//! - [`Either`]: required left slot, optional right slot selecting the
//!   active branch
//! - [`List`]: zero or more ordered values, flattening `bind`,
//!   concatenating [`plus`]
//! - [`RejectWhen`]: a guarded value with an explicit failure channel
//!
//! `Identity`, `Maybe`, `Either` and `List` implement the
//! [`Monad`](crate::typeclass::Monad) trait and are dispatched statically;
//! `RejectWhen`'s chaining primitive takes an extra `reject` callback and
//! lives outside the trait.
//!
//! Each type also exposes a lowercase factory function mirroring its name
//! (`identity`, `maybe`/`just`/`nothing`, `either`, `reject_when`) plus the
//! [`list!`](crate::list) macro.
//!
//! [`plus`]: crate::typeclass::MonadPlus::plus

mod either;
mod identity;
mod list;
mod maybe;
mod reject_when;

pub use either::{Either, either};
pub use identity::{Identity, identity};
pub use list::{IntoList, List};
pub use maybe::{Maybe, just, maybe, nothing};
pub use reject_when::{RejectWhen, reject_when};
