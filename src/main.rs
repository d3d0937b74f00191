use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dirtree::cli::Cli;

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("DIRTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    debug!(path = %cli.path.display(), files = cli.include_files(), "rendering");

    let mut out = io::stdout().lock();
    dirtree::dir_tree(&mut out, &cli.path, cli.include_files())
        .with_context(|| format!("failed to render {}", cli.path.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}
