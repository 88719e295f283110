//! ## Crate layout
//! - `change`: the `Change` record, its `Prefix` path and the closed `Operation` set.
//! - `format`: turning one `Change` into one human-readable line.
//! - `logger`: the two-method `ChangeLogger` contract and its owning/chaining loggers.
//! - `key`: the optional `ChangeKey` capability used for keyed lookups.
//! - `value`: display helpers that generated mutators call to capture values.
//!
//! Generated mutators only ever talk to this crate, usually through the
//! `mutlog` facade.

pub mod change;
pub mod error;
pub mod format;
pub mod key;
pub mod logger;
pub mod value;

pub use change::{Change, Operation, Prefix, PrefixPath};
pub use error::ChangeError;
pub use format::{ChangeFormatter, DefaultFormatter};
pub use key::ChangeKey;
pub use logger::{ChainedLogger, ChangeLogger, DefaultLogger};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        change::{Change, Operation, Prefix, PrefixPath},
        format::{ChangeFormatter, DefaultFormatter},
        key::ChangeKey,
        logger::{ChainedLogger, ChangeLogger, DefaultLogger},
    };
}
