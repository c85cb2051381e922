//! DiskTally — disk usage analyser.
//!
//! Thin binary entry point. All logic lives in the `disktally-core`
//! and `disktally-cli` crates.

use clap::Parser;
use disktally_cli::Args;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins; otherwise -v picks the level. Logs go to stderr so the
    // report on stdout stays clean.
    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("DiskTally {} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match disktally_cli::run(&args, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
