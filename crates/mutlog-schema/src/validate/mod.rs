//! Schema validation orchestration and shared helpers.

pub mod naming;

use crate::prelude::*;

/// Run full schema validation; every problem is collected before failing.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: per-record structure.
    let mut errors = validate_records(schema);

    // Phase 2: names that must be unique across a record.
    naming::validate_field_naming(schema, &mut errors);

    errors.result()
}

fn validate_records(schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for record in schema.records() {
        let mut errs = ErrorTree::new();

        if !naming::is_rust_ident(&record.ident) {
            err!(errs, "'{}' is not a valid type identifier", record.ident);
        }

        for field in &record.fields {
            validate_field(field, &mut errs);
        }

        errors.merge_at(record.ident.clone(), errs);
    }

    errors
}

fn validate_field(field: &Field, errs: &mut ErrorTree) {
    if !naming::is_rust_ident(&field.ident) {
        errs.add_at(
            field.ident.clone(),
            format!("'{}' is not a valid field identifier", field.ident),
        );
    }

    if field.rename.as_deref().is_some_and(|name| name.trim().is_empty()) {
        errs.add_at(field.ident.clone(), "rename must not be empty");
    }

    validate_type(&field.ty, &field.ident, errs);
}

fn validate_type(ty: &TypeDesc, route: &str, errs: &mut ErrorTree) {
    match ty {
        TypeDesc::Named { path } => {
            if syn::parse_str::<syn::Path>(path).is_err() {
                errs.add_at(route, format!("'{path}' is not a valid type path"));
            }
        }
        TypeDesc::Opaque { ty } => {
            if syn::parse_str::<syn::Type>(ty).is_err() {
                errs.add_at(route, format!("'{ty}' is not a valid type"));
            }
        }
        TypeDesc::Boxed { inner } | TypeDesc::Optional { inner } => {
            validate_type(inner, route, errs);
        }
        TypeDesc::Sequence { item } | TypeDesc::Set { item, .. } => {
            validate_type(item, route, errs);
        }
        TypeDesc::Map { key, value, .. } => {
            validate_type(key, route, errs);
            validate_type(value, route, errs);
        }
        TypeDesc::Primitive { .. } => {}
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeDesc {
        TypeDesc::primitive(Primitive::String)
    }

    #[test]
    fn valid_schema_passes() {
        let schema = Schema::new(Namespace::new("acme"))
            .with_record(
                Record::new("Vat")
                    .with_field(Field::new("number", string()))
                    .with_field(Field::new("r#type", string()))
                    .with_field(Field::new("issued", TypeDesc::opaque("chrono::NaiveDate"))),
            )
            .expect("insert");

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn all_problems_are_reported() {
        let schema = Schema::new(Namespace::root())
            .with_record(
                Record::new("Bad Name")
                    .with_field(Field::new("1st", string()))
                    .with_field(Field::new("ok", string()).with_rename(" "))
                    .with_field(Field::new("link", TypeDesc::named("not a path"))),
            )
            .expect("insert");

        let errs = validate_schema(&schema).expect_err("invalid");
        let flat = errs.flatten();

        assert_eq!(flat.len(), 4, "{errs}");
        assert!(flat.iter().all(|(route, _)| route.starts_with("Bad Name")));
    }
}
