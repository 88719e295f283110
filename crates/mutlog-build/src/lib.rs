//! Mutator synthesis: walk a schema from a root record and emit one
//! change-logging mutator per reachable record type.
//!
//! The emitted source addresses the runtime through
//! [`BuildOptions::runtime_path`] and is meant to be `include!`d into the
//! module the records live in (see the `build!` macro).

mod collect;
mod display;
mod field;
mod macros;
mod mutator;
mod names;
mod ty;

pub use collect::reachable;
pub use names::output_file_name;

use mutlog_schema::{
    load::{LoadError, load_path},
    node::{Record, Schema},
};
use proc_macro2::TokenStream;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error as ThisError;

/// Default first line of every generated file.
pub const DEFAULT_HEADER: &str = "Code generated by mutlog; DO NOT EDIT.";

/// Default path generated code uses to reach the runtime.
pub const DEFAULT_RUNTIME_PATH: &str = "::mutlog";

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("root type '{0}' not found in schema")]
    MissingRoot(String),

    #[error("invalid {what} '{text}': {source}")]
    InvalidSyntax {
        what: &'static str,
        text: String,
        source: syn::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}

///
/// BuildOptions
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Emit mutators for every record, not only those reachable from the root.
    pub include_unreachable: bool,

    /// Path generated code uses to reach the runtime crate.
    pub runtime_path: String,

    /// Comment placed at the top of the output; empty for none.
    pub header: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_unreachable: false,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Generate mutator source for `root` and everything reachable from it.
pub fn generate(schema: &Schema, root: &str, options: &BuildOptions) -> Result<String, BuildError> {
    let builder = MutatorBuilder::new(schema, root, options)?;
    let items = builder.generate()?;

    Ok(render(options, &items))
}

/// Load `source` (file, directory or JSON schema) and generate with default
/// options. Used by build scripts.
pub fn generate_file(source: impl AsRef<Path>, root: &str) -> Result<String, BuildError> {
    let schema = load_path(source.as_ref(), None)?;

    generate(&schema, root, &BuildOptions::default())
}

fn render(options: &BuildOptions, items: &[TokenStream]) -> String {
    let mut out = String::new();

    for line in options.header.lines() {
        out.push_str("// ");
        out.push_str(line);
        out.push('\n');
    }

    for item in items {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&item.to_string());
        out.push('\n');
    }

    out
}

///
/// MutatorBuilder
///

pub struct MutatorBuilder<'s> {
    pub(crate) schema: &'s Schema,
    pub(crate) root: &'s Record,
    pub(crate) options: &'s BuildOptions,
    pub(crate) runtime: syn::Path,
}

impl<'s> MutatorBuilder<'s> {
    /// Resolve the root and runtime path; both failures are fatal.
    pub fn new(
        schema: &'s Schema,
        root: &str,
        options: &'s BuildOptions,
    ) -> Result<Self, BuildError> {
        let root = schema
            .resolve(root)
            .ok_or_else(|| BuildError::MissingRoot(root.to_string()))?;

        let runtime = syn::parse_str(&options.runtime_path).map_err(|source| {
            BuildError::InvalidSyntax {
                what: "runtime path",
                text: options.runtime_path.clone(),
                source,
            }
        })?;

        Ok(Self {
            schema,
            root,
            options,
            runtime,
        })
    }

    /// Records that get a mutator, root first.
    #[must_use]
    pub fn records(&self) -> Vec<&'s Record> {
        let mut records = reachable(self.schema, self.root);

        if self.options.include_unreachable {
            let extra: Vec<&Record> = self
                .schema
                .records()
                .iter()
                .filter(|r| !records.iter().any(|seen| seen.ident == r.ident))
                .collect();
            records.extend(extra);
        }

        records
    }

    /// One token stream per emitted mutator.
    pub fn generate(&self) -> Result<Vec<TokenStream>, BuildError> {
        let records = self.records();
        tracing::debug!(
            root = %self.root.ident,
            mutators = records.len(),
            "generating mutators"
        );

        records
            .into_iter()
            .map(|record| mutator::generate(self, record))
            .collect()
    }

    pub(crate) fn is_root(&self, record: &Record) -> bool {
        record.ident == self.root.ident
    }
}

///
/// TESTS
///
