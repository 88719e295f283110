use mutlog_schema::{
    classify::classify,
    node::{Record, Schema},
};
use std::collections::BTreeSet;

/// Records reachable from `root` through embedded, optional and collection
/// fields, root first, in discovery order. Each record appears once, so
/// cycles and diamonds terminate.
#[must_use]
pub fn reachable<'s>(schema: &'s Schema, root: &'s Record) -> Vec<&'s Record> {
    let mut visited = BTreeSet::new();
    let mut order = Vec::new();

    visit(schema, root, &mut visited, &mut order);

    order
}

fn visit<'s>(
    schema: &'s Schema,
    record: &'s Record,
    visited: &mut BTreeSet<&'s str>,
    order: &mut Vec<&'s Record>,
) {
    if !visited.insert(record.ident.as_str()) {
        return;
    }
    order.push(record);

    for field in &record.fields {
        let shape = classify(schema, &field.ty);

        if let Some(next) = shape.target().and_then(|t| schema.get(&t.ident)) {
            visit(schema, next, visited, order);
        }
    }
}

///
/// TESTS
///
