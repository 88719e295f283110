//! Build a [`Schema`] from Rust source files or a JSON description.
//!
//! Source loading reads every non-generic struct with named fields as a
//! record and looks at trait impls anywhere in the scanned files to decide
//! how records render (`Display`) and whether they carry their own change
//! key (`ChangeKey`).

mod attr;
mod ty;

pub use attr::{FieldAttrs, derives};
pub use ty::type_desc;

use crate::{KEY_TRAIT, prelude::*, validate::validate_schema};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};
use syn::{Fields, Item, ItemImpl, ItemStruct, Type};
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse '{}': {source}", path.display())]
    Parse { path: PathBuf, source: syn::Error },

    #[error("parse schema '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("field '{record}.{field}': {source}")]
    Attribute {
        record: String,
        field: String,
        source: darling::Error,
    },

    #[error(
        "record '{ident}' is defined in both '{}' and '{}'",
        first.display(),
        second.display()
    )]
    AmbiguousRecord {
        ident: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("no Rust sources found in '{}'", .0.display())]
    NoSources(PathBuf),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Load records from one in-memory source file.
pub fn load_source(source: &str, namespace: Namespace) -> Result<Schema, LoadError> {
    let mut loader = Loader::new();
    loader.add_source(Path::new("<source>"), source)?;

    loader.finish(namespace)
}

/// Load records from one `.rs` file. The namespace defaults to the module
/// the file defines.
pub fn load_file(path: &Path, namespace: Option<Namespace>) -> Result<Schema, LoadError> {
    let mut loader = Loader::new();
    loader.add_file(path)?;

    loader.finish(namespace.unwrap_or_else(|| file_namespace(path)))
}

/// Load records from every `.rs` file directly inside `dir`.
pub fn load_dir(dir: &Path, namespace: Option<Namespace>) -> Result<Schema, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(LoadError::NoSources(dir.to_path_buf()));
    }

    // read_dir order is platform dependent
    files.sort();

    let mut loader = Loader::new();
    for file in &files {
        loader.add_file(file)?;
    }

    loader.finish(namespace.unwrap_or_else(|| dir_namespace(dir)))
}

/// Load a schema serialized as JSON.
pub fn load_json(path: &Path) -> Result<Schema, LoadError> {
    let text = read(path)?;
    let schema: Schema = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    validate_schema(&schema).map_err(SchemaError::Validation)?;

    Ok(schema)
}

/// Dispatch on what `path` is: a directory, a `.json` schema or a `.rs` file.
pub fn load_path(path: &Path, namespace: Option<Namespace>) -> Result<Schema, LoadError> {
    if path.is_dir() {
        return load_dir(path, namespace);
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        let mut schema = load_json(path)?;
        if let Some(namespace) = namespace {
            schema.namespace = namespace;
        }

        return Ok(schema);
    }

    load_file(path, namespace)
}

///
/// Loader
///
/// Accumulates records and trait impls across source files, then settles
/// them into a validated schema.
///

#[derive(Debug, Default)]
pub struct Loader {
    records: Vec<Record>,
    origins: BTreeMap<String, PathBuf>,
    key_impls: BTreeSet<String>,
    display_impls: BTreeSet<String>,
    debug_impls: BTreeSet<String>,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let source = read(path)?;

        self.add_source(path, &source)
    }

    pub fn add_source(&mut self, origin: &Path, source: &str) -> Result<(), LoadError> {
        let file = syn::parse_file(source).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        for item in &file.items {
            match item {
                Item::Struct(item) => {
                    if let Some(record) = scan_struct(item)? {
                        self.push_record(record, origin)?;
                    }
                }
                Item::Impl(item) => self.scan_impl(item),
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply the collected trait impls and validate the result.
    pub fn finish(self, namespace: Namespace) -> Result<Schema, LoadError> {
        let mut schema = Schema::new(namespace);

        for mut record in self.records {
            record.derives_key = self.key_impls.contains(&record.ident);
            if self.display_impls.contains(&record.ident) {
                record.display = RecordDisplay::Display;
            } else if self.debug_impls.contains(&record.ident) {
                record.display = RecordDisplay::Debug;
            }

            schema.insert(record)?;
        }

        validate_schema(&schema).map_err(SchemaError::Validation)?;

        tracing::debug!(
            namespace = %schema.namespace,
            records = schema.len(),
            "schema loaded"
        );

        Ok(schema)
    }

    fn push_record(&mut self, record: Record, origin: &Path) -> Result<(), LoadError> {
        if let Some(first) = self.origins.get(&record.ident) {
            return Err(LoadError::AmbiguousRecord {
                ident: record.ident,
                first: first.clone(),
                second: origin.to_path_buf(),
            });
        }

        tracing::debug!(
            record = %record.ident,
            fields = record.fields.len(),
            origin = %origin.display(),
            "record found"
        );

        self.origins.insert(record.ident.clone(), origin.to_path_buf());
        self.records.push(record);

        Ok(())
    }

    fn scan_impl(&mut self, item: &ItemImpl) {
        let Some((None, trait_path, _)) = &item.trait_ else {
            return;
        };
        let Some(target) = self_ident(&item.self_ty) else {
            return;
        };
        let Some(trait_name) = trait_path.segments.last().map(|s| s.ident.to_string()) else {
            return;
        };

        if trait_name == KEY_TRAIT {
            self.key_impls.insert(target);
        } else if trait_name == "Display" {
            self.display_impls.insert(target);
        } else if trait_name == "Debug" {
            self.debug_impls.insert(target);
        }
    }
}

fn scan_struct(item: &ItemStruct) -> Result<Option<Record>, LoadError> {
    let ident = item.ident.to_string();

    if !item.generics.params.is_empty() {
        tracing::warn!(record = %ident, "skipping generic struct");
        return Ok(None);
    }

    let named = match &item.fields {
        Fields::Named(named) => Some(named),
        Fields::Unit => None,
        Fields::Unnamed(_) => {
            tracing::debug!(record = %ident, "skipping tuple struct");
            return Ok(None);
        }
    };

    let mut record = Record::new(ident.clone());
    if derives(&item.attrs, "Debug") {
        record.display = RecordDisplay::Debug;
    }

    for field in named.into_iter().flat_map(|n| n.named.iter()) {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        let attrs = FieldAttrs::from_attrs(&field.attrs).map_err(|source| {
            LoadError::Attribute {
                record: ident.clone(),
                field: field_ident.to_string(),
                source,
            }
        })?;

        if attrs.skip {
            continue;
        }

        let mut desc = Field::new(field_ident.to_string(), type_desc(&field.ty));
        desc.rename = attrs.rename;
        record.fields.push(desc);
    }

    Ok(Some(record))
}

// `impl Trait for Name`, where Name is a plain non-generic path.
fn self_ident(ty: &Type) -> Option<String> {
    let Type::Path(tp) = ty else {
        return None;
    };
    if tp.qself.is_some() {
        return None;
    }

    let last = tp.path.segments.last()?;
    last.arguments
        .is_none()
        .then(|| last.ident.to_string())
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn file_namespace(path: &Path) -> Namespace {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some("lib" | "main") | None => Namespace::root(),
        Some("mod") => path.parent().map_or_else(Namespace::root, dir_namespace),
        Some(stem) => Namespace::new(stem),
    }
}

fn dir_namespace(dir: &Path) -> Namespace {
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

    match dir.file_name().and_then(|s| s.to_str()) {
        Some("src") | None => Namespace::root(),
        Some(name) => Namespace::new(name),
    }
}

///
/// TESTS
///
