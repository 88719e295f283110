use crate::prelude::*;
use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, Type};

/// Describe a field's syntactic type.
#[must_use]
pub fn type_desc(ty: &Type) -> TypeDesc {
    match ty {
        Type::Paren(inner) => type_desc(&inner.elem),
        Type::Group(inner) => type_desc(&inner.elem),
        Type::Path(tp) if tp.qself.is_none() => {
            path_desc(&tp.path).unwrap_or_else(|| opaque(ty))
        }
        _ => opaque(ty),
    }
}

fn path_desc(path: &Path) -> Option<TypeDesc> {
    let last = path.segments.last()?;
    let name = last.ident.to_string();

    if path.segments.iter().all(|seg| seg.arguments.is_none()) {
        if let Some(primitive) = primitive(path, &name) {
            return Some(TypeDesc::primitive(primitive));
        }

        return Some(TypeDesc::named(path_string(path)));
    }

    // generic arguments only make sense on the last segment
    let prefix_plain = path
        .segments
        .iter()
        .rev()
        .skip(1)
        .all(|seg| seg.arguments.is_none());
    if !prefix_plain {
        return None;
    }

    let args = type_args(&last.arguments)?;
    let desc = match (name.as_str(), args.as_slice()) {
        ("Option", [inner]) => TypeDesc::optional(type_desc(inner)),
        ("Box", [inner]) => TypeDesc::boxed(type_desc(inner)),
        ("Vec", [item]) => TypeDesc::sequence(type_desc(item)),
        ("BTreeSet", [item]) => TypeDesc::set(SetKind::BTree, type_desc(item)),
        ("HashSet", [item]) => TypeDesc::set(SetKind::Hash, type_desc(item)),
        ("BTreeMap", [key, value]) => {
            TypeDesc::map(MapKind::BTree, type_desc(key), type_desc(value))
        }
        ("HashMap", [key, value]) => {
            TypeDesc::map(MapKind::Hash, type_desc(key), type_desc(value))
        }
        _ => return None,
    };

    Some(desc)
}

// Only bare primitives, plus the fully qualified String paths.
fn primitive(path: &Path, name: &str) -> Option<Primitive> {
    if path.segments.len() == 1 && path.leading_colon.is_none() {
        return Primitive::from_ident(name);
    }

    match path_string(path).trim_start_matches("::") {
        "std::string::String" | "alloc::string::String" => Some(Primitive::String),
        _ => None,
    }
}

fn type_args(args: &PathArguments) -> Option<Vec<&Type>> {
    let PathArguments::AngleBracketed(args) = args else {
        return None;
    };

    args.args
        .iter()
        .map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}

fn path_string(path: &Path) -> String {
    let joined = path
        .segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");

    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

fn opaque(ty: &Type) -> TypeDesc {
    TypeDesc::opaque(compact_tokens(&ty.to_token_stream().to_string()))
}

// Token streams print with spaces around every punct; tighten the common
// ones so the text reads like source.
fn compact_tokens(tokens: &str) -> String {
    [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" < ", "<"),
        ("< ", "<"),
        (" <", "<"),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        ("[ ", "["),
        (" ]", "]"),
        (" ;", ";"),
        ("( ", "("),
        (" )", ")"),
    ]
    .iter()
    .fold(tokens.to_string(), |acc, (from, to)| acc.replace(from, to))
}

///
/// TESTS
///
