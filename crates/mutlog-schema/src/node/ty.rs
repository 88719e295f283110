use crate::prelude::*;
use std::fmt;

///
/// TypeDesc
///
/// Structural description of a field's type. Named types are kept as
/// written; whether they refer to a record is decided against the schema.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeDesc {
    Primitive {
        primitive: Primitive,
    },
    Named {
        path: String,
    },
    Boxed {
        inner: Box<Self>,
    },
    Optional {
        inner: Box<Self>,
    },
    Sequence {
        item: Box<Self>,
    },
    Set {
        kind: SetKind,
        item: Box<Self>,
    },
    Map {
        kind: MapKind,
        key: Box<Self>,
        value: Box<Self>,
    },
    Opaque {
        ty: String,
    },
}

impl TypeDesc {
    #[must_use]
    pub const fn primitive(primitive: Primitive) -> Self {
        Self::Primitive { primitive }
    }

    #[must_use]
    pub fn named(path: impl Into<String>) -> Self {
        Self::Named { path: path.into() }
    }

    #[must_use]
    pub fn boxed(inner: Self) -> Self {
        Self::Boxed {
            inner: Box::new(inner),
        }
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional {
            inner: Box::new(inner),
        }
    }

    #[must_use]
    pub fn sequence(item: Self) -> Self {
        Self::Sequence {
            item: Box::new(item),
        }
    }

    #[must_use]
    pub fn set(kind: SetKind, item: Self) -> Self {
        Self::Set {
            kind,
            item: Box::new(item),
        }
    }

    #[must_use]
    pub fn map(kind: MapKind, key: Self, value: Self) -> Self {
        Self::Map {
            kind,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn opaque(ty: impl Into<String>) -> Self {
        Self::Opaque { ty: ty.into() }
    }

    /// Strip any number of `Box` layers.
    #[must_use]
    pub fn unboxed(&self) -> &Self {
        match self {
            Self::Boxed { inner } => inner.unboxed(),
            other => other,
        }
    }

}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive { primitive } => write!(f, "{primitive}"),
            Self::Named { path } => f.write_str(path),
            Self::Boxed { inner } => write!(f, "Box<{inner}>"),
            Self::Optional { inner } => write!(f, "Option<{inner}>"),
            Self::Sequence { item } => write!(f, "Vec<{item}>"),
            Self::Set { kind, item } => {
                write!(f, "std::collections::{}<{item}>", kind.type_name())
            }
            Self::Map { kind, key, value } => {
                write!(f, "std::collections::{}<{key}, {value}>", kind.type_name())
            }
            Self::Opaque { ty } => f.write_str(ty),
        }
    }
}

///
/// TESTS
///
