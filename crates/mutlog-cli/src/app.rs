use clap::Parser;
use mutlog::{
    build::{BuildOptions, DEFAULT_HEADER, DEFAULT_RUNTIME_PATH},
    schema::path::Namespace,
};
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "mutlog",
    version,
    about = "Generate change-logging mutators for a record schema"
)]
pub struct Cli {
    /// Root record to generate mutators for
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub root: String,

    /// Directory of `.rs` files, a single `.rs` file, or a `.json` schema
    #[arg(value_name = "SOURCE", default_value = ".")]
    pub source: PathBuf,

    /// Module path the records live in (defaults to the file or directory name)
    #[arg(long, value_name = "PATH")]
    pub namespace: Option<String>,

    /// Emit mutators for every record, not only those reachable from the root
    #[arg(long)]
    pub all: bool,

    /// Path generated code uses to reach the mutlog runtime
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RUNTIME_PATH)]
    pub runtime_path: String,

    /// Log schema loading and generation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace.as_deref().map(Namespace::new)
    }

    #[must_use]
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            include_unreachable: self.all,
            runtime_path: self.runtime_path.clone(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

///
/// TESTS
///
