//! `argument_parser` entry point: parse the process arguments and print what
//! was bound.

use std::io;

use argument_parser::{Result, collect_args, parse_options, write_report};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let args = collect_args(std::env::args_os())?;
    let options = parse_options(args)?;
    debug!(?options, "parsed command line");
    let mut out = io::stdout().lock();
    write_report(&mut out, &options)
}

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
