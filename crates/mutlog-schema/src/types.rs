use crate::prelude::*;
use std::fmt;

///
/// Primitive
///
/// Built-in value types. Fields of these types are always scalar.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Char,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    String,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl Primitive {
    pub const ALL: [Self; 17] = [
        Self::Bool,
        Self::Char,
        Self::F32,
        Self::F64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::Isize,
        Self::String,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::Usize,
    ];

    /// Rust spelling of the type, e.g. `u32` or `String`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::String => "String",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
        }
    }

    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == ident)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// SetKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    BTree,
    Hash,
}

impl SetKind {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::BTree => "BTreeSet",
            Self::Hash => "HashSet",
        }
    }

    /// Iteration order of the set is stable and meaningful.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::BTree)
    }
}

///
/// MapKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKind {
    BTree,
    Hash,
}

impl MapKind {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::BTree => "BTreeMap",
            Self::Hash => "HashMap",
        }
    }

    /// Iteration order of the map is stable and meaningful.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::BTree)
    }
}

///
/// RecordDisplay
///
/// How a record value is captured into a change string.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDisplay {
    /// The record implements `Display`.
    Display,
    /// The record derives `Debug`.
    Debug,
    /// Neither; the value renders as `Name{..}`.
    #[default]
    Unformatted,
}

///
/// TESTS
///
