use crate::prelude::*;
use std::collections::BTreeMap;

/// Field identifiers, logged names and generated method names must all be
/// unique within a record.
pub fn validate_field_naming(schema: &Schema, errs: &mut ErrorTree) {
    for record in schema.records() {
        let mut idents: BTreeMap<&str, usize> = BTreeMap::new();
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        let mut methods: BTreeMap<String, &str> = BTreeMap::new();

        for field in &record.fields {
            *idents.entry(field.ident.as_str()).or_default() += 1;

            for method in method_names(schema, field) {
                match methods.insert(method.clone(), field.ident.as_str()) {
                    Some(prev) if prev != field.ident => errs.add_at(
                        record.ident.clone(),
                        format!(
                            "method '{method}' is generated for fields '{prev}' and '{}'",
                            field.ident
                        ),
                    ),
                    _ => {}
                }
            }

            let name = field.log_name();
            if let Some(prev) = names.insert(name.clone(), field.ident.clone()) {
                errs.add_at(
                    record.ident.clone(),
                    format!(
                        "duplicate change name '{name}' for fields '{prev}' and '{}'",
                        field.ident
                    ),
                );
            }
        }

        for (ident, count) in idents {
            if count > 1 {
                errs.add_at(
                    record.ident.clone(),
                    format!("field '{ident}' is declared {count} times"),
                );
            }
        }
    }
}

/// True for a plain or raw Rust identifier.
#[must_use]
pub fn is_rust_ident(ident: &str) -> bool {
    syn::parse_str::<syn::Ident>(ident).is_ok()
}

///
/// TESTS
///
