//! ## Crate layout
//! - `build`: mutator synthesis, and the `build!` macro for build scripts.
//! - `Mutable`: derive that registers and checks `#[mutlog(...)]` field attributes.
//! - `schema`: the record model, its loaders and validation.
//! - runtime (crate root): `Change`, `ChangeLogger` and friends, used by
//!   generated mutators through the `::mutlog` path.
//!
//! Typical use: call `mutlog::build!` from `build.rs`, `include!` the file it
//! writes next to your records, then drive the generated `<Root>Mutator` and
//! read back `render_changes()`.

pub use mutlog_build as build;
pub use mutlog_core as core;
pub use mutlog_schema as schema;

pub use mutlog_core::{
    Change, ChangeError, ChangeFormatter, ChangeKey, ChainedLogger, ChangeLogger, DefaultFormatter,
    DefaultLogger, Operation, Prefix, PrefixPath, value,
};

//
// Macros
//

pub use mutlog_build::build;
pub use mutlog_derive::Mutable;

///
/// Prelude
///

pub mod prelude {
    pub use crate::Mutable;
    pub use mutlog_core::prelude::*;
}
