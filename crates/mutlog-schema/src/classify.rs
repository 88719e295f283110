use crate::prelude::*;
use std::fmt;

///
/// CollectionKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CollectionKind {
    Sequence,
    Set(SetKind),
    Map(MapKind),
}

///
/// RecordRef
///
/// A field type that resolves to a schema record, possibly behind a `Box`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordRef {
    pub ident: String,
    pub boxed: bool,
}

///
/// Shape
///
/// How a field is mutated. Exactly one shape applies to every field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// Plain value, replaced as a whole.
    Scalar,

    /// Sequence, set or map of non-record values.
    Collection(CollectionKind),

    /// `Option<T>`; `target` is set when `T` is a record.
    Optional { target: Option<RecordRef> },

    /// A record held directly (or boxed) in the field.
    Embedded(RecordRef),

    /// Sequence or map whose elements are records.
    RecordCollection {
        kind: CollectionKind,
        target: RecordRef,
    },
}

impl Shape {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Collection(_) => "collection",
            Self::Optional { .. } => "optional",
            Self::Embedded(_) => "embedded",
            Self::RecordCollection { .. } => "record_collection",
        }
    }

    /// Record reached through this field, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&RecordRef> {
        match self {
            Self::Embedded(target)
            | Self::RecordCollection { target, .. }
            | Self::Optional {
                target: Some(target),
            } => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a field type against the schema.
///
/// Types that cannot be classified (opaque or unknown named types) fall
/// back to scalar handling.
#[must_use]
pub fn classify(schema: &Schema, ty: &TypeDesc) -> Shape {
    match ty {
        TypeDesc::Primitive { .. } => Shape::Scalar,

        TypeDesc::Opaque { ty } => {
            tracing::debug!(ty = %ty, "opaque type handled as scalar");
            Shape::Scalar
        }

        TypeDesc::Named { .. } | TypeDesc::Boxed { .. } => record_ref(schema, ty).map_or_else(
            || {
                tracing::debug!(ty = %ty, "type is not a known record, handled as scalar");
                Shape::Scalar
            },
            Shape::Embedded,
        ),

        TypeDesc::Optional { inner } => Shape::Optional {
            target: record_ref(schema, inner),
        },

        TypeDesc::Sequence { item } => element_shape(schema, CollectionKind::Sequence, item),

        TypeDesc::Set { kind, .. } => Shape::Collection(CollectionKind::Set(*kind)),

        TypeDesc::Map { kind, value, .. } => {
            element_shape(schema, CollectionKind::Map(*kind), value)
        }
    }
}

/// Resolve `ty` to a record, looking through a single `Box`.
#[must_use]
pub fn record_ref(schema: &Schema, ty: &TypeDesc) -> Option<RecordRef> {
    match ty {
        TypeDesc::Named { path } => schema.resolve(path).map(|record| RecordRef {
            ident: record.ident.clone(),
            boxed: false,
        }),
        TypeDesc::Boxed { inner } => match inner.as_ref() {
            TypeDesc::Named { path } => schema.resolve(path).map(|record| RecordRef {
                ident: record.ident.clone(),
                boxed: true,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Mutator methods generated for `field`, in emission order.
#[must_use]
pub fn method_names(schema: &Schema, field: &Field) -> Vec<String> {
    let shape = classify(schema, &field.ty);
    let keyed = shape
        .target()
        .and_then(|target| schema.get(&target.ident))
        .is_some_and(|record| record.derives_key);

    let mut ops: Vec<(&str, Option<&str>)> = Vec::new();
    match &shape {
        Shape::Scalar => ops.push(("update", None)),
        Shape::Collection(kind) => ops.extend(collection_ops(*kind)),
        Shape::Optional { target } => {
            ops.push(("set", None));
            if target.is_some() {
                ops.push(("mutate", None));
            }
        }
        Shape::Embedded(_) => ops.push(("mutate", None)),
        Shape::RecordCollection { kind, .. } => {
            ops.extend(collection_ops(*kind));
            match kind {
                CollectionKind::Sequence => ops.push(("mutate", Some("at"))),
                CollectionKind::Map(_) => ops.push(("mutate", Some("with"))),
                CollectionKind::Set(_) => {}
            }
            if keyed {
                ops.push(("mutate", Some("by")));
            }
        }
    }

    let ident = field.bare_ident();
    ops.into_iter()
        .map(|(op, suffix)| match suffix {
            Some(suffix) => format!("{op}_{ident}_{suffix}"),
            None => format!("{op}_{ident}"),
        })
        .collect()
}

fn collection_ops(kind: CollectionKind) -> Vec<(&'static str, Option<&'static str>)> {
    match kind {
        CollectionKind::Sequence => vec![("set", None), ("append", None), ("remove", None)],
        CollectionKind::Set(_) => vec![("set", None)],
        CollectionKind::Map(_) => vec![("set", None), ("insert", None), ("remove", None)],
    }
}

fn element_shape(schema: &Schema, kind: CollectionKind, element: &TypeDesc) -> Shape {
    match record_ref(schema, element) {
        Some(target) => Shape::RecordCollection { kind, target },
        None => Shape::Collection(kind),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(Namespace::new("acme"))
            .with_record(Record::new("Address"))
            .and_then(|s| s.with_record(Record::new("Employee").with_key()))
            .expect("valid schema")
    }

    fn string() -> TypeDesc {
        TypeDesc::primitive(Primitive::String)
    }

    #[test]
    fn primitives_and_unknown_types_are_scalar() {
        let schema = schema();

        assert_eq!(classify(&schema, &string()), Shape::Scalar);
        assert_eq!(classify(&schema, &TypeDesc::named("Uuid")), Shape::Scalar);
        assert_eq!(classify(&schema, &TypeDesc::opaque("[u8; 4]")), Shape::Scalar);
        assert_eq!(
            classify(&schema, &TypeDesc::boxed(string())),
            Shape::Scalar
        );
    }

    #[test]
    fn records_are_embedded() {
        let schema = schema();

        assert_eq!(
            classify(&schema, &TypeDesc::named("acme::Address")),
            Shape::Embedded(RecordRef {
                ident: "Address".into(),
                boxed: false
            })
        );
        assert_eq!(
            classify(&schema, &TypeDesc::boxed(TypeDesc::named("Address"))),
            Shape::Embedded(RecordRef {
                ident: "Address".into(),
                boxed: true
            })
        );
    }

    #[test]
    fn optional_reports_record_target() {
        let schema = schema();

        let plain = classify(&schema, &TypeDesc::optional(string()));
        assert_eq!(plain, Shape::Optional { target: None });

        let boxed = classify(
            &schema,
            &TypeDesc::optional(TypeDesc::boxed(TypeDesc::named("Employee"))),
        );
        assert_eq!(boxed.target().map(|t| t.boxed), Some(true));
    }

    #[test]
    fn collections_split_on_element_type() {
        let schema = schema();

        assert_eq!(
            classify(&schema, &TypeDesc::sequence(string())),
            Shape::Collection(CollectionKind::Sequence)
        );
        assert_eq!(
            classify(&schema, &TypeDesc::set(SetKind::BTree, TypeDesc::named("Address"))),
            Shape::Collection(CollectionKind::Set(SetKind::BTree))
        );

        let employees = classify(
            &schema,
            &TypeDesc::map(MapKind::Hash, string(), TypeDesc::named("Employee")),
        );
        assert!(matches!(
            employees,
            Shape::RecordCollection {
                kind: CollectionKind::Map(MapKind::Hash),
                ref target,
            } if target.ident == "Employee"
        ));
    }

    #[test]
    fn method_names_follow_shape() {
        let schema = schema();
        let names = |field: Field| method_names(&schema, &field);

        assert_eq!(names(Field::new("name", string())), vec!["update_name"]);
        assert_eq!(
            names(Field::new("r#type", TypeDesc::optional(TypeDesc::named("Address")))),
            vec!["set_type", "mutate_type"]
        );
        assert_eq!(
            names(Field::new("labels", TypeDesc::set(SetKind::Hash, string()))),
            vec!["set_labels"]
        );
        assert_eq!(
            names(Field::new("employees", TypeDesc::sequence(TypeDesc::named("Employee")))),
            vec![
                "set_employees",
                "append_employees",
                "remove_employees",
                "mutate_employees_at",
                "mutate_employees_by",
            ]
        );
        assert_eq!(
            names(Field::new(
                "offices",
                TypeDesc::map(MapKind::BTree, string(), TypeDesc::named("Address")),
            )),
            vec!["set_offices", "insert_offices", "remove_offices", "mutate_offices_with"]
        );
    }
}
