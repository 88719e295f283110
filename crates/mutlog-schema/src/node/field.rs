use crate::prelude::*;
use convert_case::{Case, Casing};
use derive_more::{Deref, DerefMut, IntoIterator};

///
/// FieldList
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct FieldList(#[into_iterator(owned, ref)] Vec<Field>);

impl FieldList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.0.iter().find(|f| f.ident == ident)
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// Field
///
/// `ident` is the Rust identifier; the logged name defaults to its
/// PascalCase form unless `rename` overrides it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub ident: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,

    pub ty: TypeDesc,
}

impl Field {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            ident: ident.into(),
            rename: None,
            ty,
        }
    }

    #[must_use]
    pub fn with_rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Name used in change records.
    #[must_use]
    pub fn log_name(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| default_log_name(&self.ident))
    }

    /// Identifier without a raw `r#` marker, for building method names.
    #[must_use]
    pub fn bare_ident(&self) -> &str {
        self.ident.trim_start_matches("r#")
    }
}

/// PascalCase form of a field identifier (`year_of_birth` → `YearOfBirth`).
#[must_use]
pub fn default_log_name(ident: &str) -> String {
    ident.trim_start_matches("r#").to_case(Case::Pascal)
}

///
/// TESTS
///
