use crate::prelude::*;
use std::fmt;

///
/// Namespace
///
/// Module path the schema's records live in (e.g. `acme` or `model::acme`).
/// Type paths that point back into it are stripped to their bare identifier;
/// any other qualifier is preserved.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.trim().trim_start_matches("crate::").trim_end_matches("::");

        Self(path.to_string())
    }

    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove a leading `self::`, `crate::<ns>::` or `<ns>::` qualifier.
    #[must_use]
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        let path = path.trim();

        if let Some(rest) = path.strip_prefix("self::") {
            return rest;
        }

        if let Some(rest) = path.strip_prefix("crate::") {
            if self.is_root() {
                return rest;
            }

            return self.strip_own(rest).unwrap_or(path);
        }

        self.strip_own(path).unwrap_or(path)
    }

    /// Bare local identifier for `path`, or `None` if it still carries a
    /// foreign qualifier after stripping.
    #[must_use]
    pub fn local_ident<'a>(&self, path: &'a str) -> Option<&'a str> {
        let stripped = self.strip(path);

        (!stripped.contains("::")).then_some(stripped)
    }

    fn strip_own<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return None;
        }

        path.strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_prefix("::"))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_namespace_is_stripped() {
        let ns = Namespace::new("acme");

        assert_eq!(ns.strip("Address"), "Address");
        assert_eq!(ns.strip("acme::Address"), "Address");
        assert_eq!(ns.strip("self::Address"), "Address");
        assert_eq!(ns.strip("crate::acme::Address"), "Address");
    }

    #[test]
    fn foreign_qualifiers_are_preserved() {
        let ns = Namespace::new("acme");

        assert_eq!(ns.strip("chrono::NaiveDate"), "chrono::NaiveDate");
        assert_eq!(ns.strip("crate::billing::Invoice"), "crate::billing::Invoice");
        assert_eq!(ns.strip("acmecorp::Thing"), "acmecorp::Thing");
        assert_eq!(ns.local_ident("chrono::NaiveDate"), None);
        assert_eq!(ns.local_ident("acme::Vat"), Some("Vat"));
    }

    #[test]
    fn nested_namespace_and_crate_root() {
        let nested = Namespace::new("crate::model::acme");
        assert_eq!(nested.as_str(), "model::acme");
        assert_eq!(nested.strip("crate::model::acme::Vat"), "Vat");
        assert_eq!(nested.strip("model::acme::Vat"), "Vat");

        let root = Namespace::root();
        assert_eq!(root.strip("crate::Vat"), "Vat");
        assert_eq!(root.strip("acme::Vat"), "acme::Vat");
    }
}
