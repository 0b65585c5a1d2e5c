//! # callreq
//!
//! Command line tool over the call request codec.

#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;

use args::{Callreq, CallreqSubcommand};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Callreq::parse();
    init_tracing(args.log_level());
    run(args)
}

/// Logs to stderr, filtered by `RUST_LOG` or the given default directive.
fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Callreq) -> Result<()> {
    let out = match &args.cmd {
        CallreqSubcommand::Normalize { path } => cmd::run_normalize(path.as_deref(), args.pretty)?,
        CallreqSubcommand::Merge { paths } => cmd::run_merge(paths, args.pretty)?,
    };
    println!("{out}");
    Ok(())
}
