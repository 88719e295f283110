use crate::error::ChangeError;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// Operation
///
/// Closed set of change kinds. The kind is fixed by the mutated field's shape,
/// never picked ad hoc by the caller.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Sequence append or map insert.
    Added,
    /// Sequence removal or map delete.
    Removed,
    /// Direct replacement of a scalar value.
    Updated,
    /// Whole collection replaced, or an optional value made present.
    Set,
    /// Collection emptied, or an optional value made absent.
    Cleared,
}

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::Added,
        Self::Removed,
        Self::Updated,
        Self::Set,
        Self::Cleared,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Updated => "updated",
            Self::Set => "set",
            Self::Cleared => "cleared",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ChangeError::UnknownOperation(s.to_string()))
    }
}

///
/// Prefix
///
/// One segment of the path from the root record to a mutated field.
/// `key` is only set when the segment addresses an element of a keyed
/// collection. An empty `name` marks the root segment, which never renders.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Prefix {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
}

impl Prefix {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            name: String::new(),
            key: String::new(),
        }
    }

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: String::new(),
        }
    }

    #[must_use]
    pub fn with_key(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}[{}]", self.name, self.key)
        }
    }
}

///
/// PrefixPath
///
/// Ordered root-to-leaf prefix segments attached to a change.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, Hash, IntoIterator, PartialEq, Serialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct PrefixPath(Vec<Prefix>);

impl PrefixPath {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attach a segment in front of the existing path.
    pub fn push_front(&mut self, prefix: Prefix) {
        self.0.insert(0, prefix);
    }

    /// Render the non-root segments space-joined, with a trailing space.
    /// Returns an empty string when only root segments are present.
    #[must_use]
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .filter(|prefix| !prefix.is_root())
            .map(ToString::to_string)
            .collect();

        if parts.is_empty() {
            String::new()
        } else {
            format!("{} ", parts.join(" "))
        }
    }
}

impl From<Vec<Prefix>> for PrefixPath {
    fn from(prefixes: Vec<Prefix>) -> Self {
        Self(prefixes)
    }
}

impl FromIterator<Prefix> for PrefixPath {
    fn from_iter<I: IntoIterator<Item = Prefix>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// Change
///
/// One recorded mutation. Values are captured as display strings at the
/// moment of mutation, so later edits never rewrite history.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Change {
    #[serde(default, skip_serializing_if = "PrefixPath::is_empty")]
    pub prefix: PrefixPath,

    pub field_name: String,
    pub operation: Operation,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub old_value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub new_value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
}

impl Change {
    #[must_use]
    pub fn new(field_name: impl Into<String>, operation: Operation) -> Self {
        Self {
            prefix: PrefixPath::new(),
            field_name: field_name.into(),
            operation,
            old_value: String::new(),
            new_value: String::new(),
            key: String::new(),
        }
    }

    #[must_use]
    pub fn with_old_value(mut self, value: impl Into<String>) -> Self {
        self.old_value = value.into();
        self
    }

    #[must_use]
    pub fn with_new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = value.into();
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Field name as rendered: `field` or `field[key]`.
    #[must_use]
    pub fn field_label(&self) -> String {
        if self.key.is_empty() {
            self.field_name.clone()
        } else {
            format!("{}[{}]", self.field_name, self.key)
        }
    }
}

///
/// TESTS
///
