use crate::BuildError;
use convert_case::{Case, Casing};
use mutlog_schema::node::Field;
use proc_macro2::Ident;
use quote::format_ident;

/// File the `build!` macro writes for `root`, e.g. `acme_mutator.rs`.
#[must_use]
pub fn output_file_name(root: &str) -> String {
    let ident = root.rsplit("::").next().unwrap_or(root);

    format!("{}_mutator.rs", ident.to_case(Case::Snake))
}

/// `Acme` → `AcmeMutator`
pub fn mutator_ident(record: &str) -> Ident {
    format_ident!("{record}Mutator")
}

/// `update_<field>`, `mutate_<field>`, ...
pub fn method_ident(op: &str, field: &Field) -> Ident {
    format_ident!("{op}_{}", field.bare_ident())
}

/// `mutate_<field>_at`, `mutate_<field>_with`, ...
pub fn method_ident_suffixed(op: &str, field: &Field, suffix: &str) -> Ident {
    format_ident!("{op}_{}_{suffix}", field.bare_ident())
}

/// The struct member for `field`, keeping a raw `r#` marker.
pub fn member_ident(field: &Field) -> Result<Ident, BuildError> {
    syn::parse_str(&field.ident).map_err(|source| BuildError::InvalidSyntax {
        what: "field identifier",
        text: field.ident.clone(),
        source,
    })
}

///
/// TESTS
///
