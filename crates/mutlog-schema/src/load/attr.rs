use crate::FIELD_ATTR;
use darling::{FromMeta, ast::NestedMeta};
use syn::Attribute;

///
/// FieldAttrs
///
/// `#[mutlog(rename = "...", skip)]` on a record field.
///

#[derive(Debug, Default, FromMeta)]
pub struct FieldAttrs {
    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,
}

impl FieldAttrs {
    /// Merge every `#[mutlog(...)]` attribute on a field; later values win.
    pub fn from_attrs(attrs: &[Attribute]) -> darling::Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(FIELD_ATTR)) {
            let list = attr.meta.require_list()?;
            let items = NestedMeta::parse_meta_list(list.tokens.clone())?;
            let parsed = Self::from_list(&items)?;

            if parsed.rename.is_some() {
                out.rename = parsed.rename;
            }
            out.skip |= parsed.skip;
        }

        Ok(out)
    }
}

/// True if a `#[derive(...)]` list on the item names `trait_name`.
#[must_use]
pub fn derives(attrs: &[Attribute], trait_name: &str) -> bool {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("derive"))
        .any(|attr| {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta
                    .path
                    .segments
                    .last()
                    .is_some_and(|seg| seg.ident == trait_name)
                {
                    found = true;
                }
                Ok(())
            });

            found
        })
}

///
/// TESTS
///
