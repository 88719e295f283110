pub mod classify;
pub mod error;
pub mod load;
pub mod node;
pub mod path;
pub mod types;
pub mod validate;

use crate::{load::LoadError, node::SchemaError};
use thiserror::Error as ThisError;

/// Attribute namespace read from record fields (`#[mutlog(...)]`).
pub const FIELD_ATTR: &str = "mutlog";

/// Trait name that marks a record as able to derive its own change key.
pub const KEY_TRAIT: &str = "ChangeKey";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        classify::{CollectionKind, RecordRef, Shape, classify, method_names},
        err,
        error::ErrorTree,
        node::*,
        path::Namespace,
        types::{MapKind, Primitive, RecordDisplay, SetKind},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    LoadError(#[from] LoadError),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),
}
