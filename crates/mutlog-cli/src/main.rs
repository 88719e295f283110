mod app;

use anyhow::Context;
use clap::Parser;
use mutlog::{build::generate, schema::load::load_path};
use tracing_subscriber::EnvFilter;

use crate::app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // warn by default on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let code = run(&cli)?;
    print!("{code}");

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let schema = load_path(&cli.source, cli.namespace())
        .with_context(|| format!("failed to load schema from '{}'", cli.source.display()))?;

    let code = generate(&schema, &cli.root, &cli.options())
        .with_context(|| format!("failed to generate mutators for '{}'", cli.root))?;

    Ok(code)
}

///
/// TESTS
///
