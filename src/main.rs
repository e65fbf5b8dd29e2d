use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsite::cli::{self, Args};

fn main() {
    let args = Args::parse();

    // -v forces info, otherwise RUST_LOG or warn.
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli::run(&args) {
        eprintln!("Error: {err}");
        exit(1);
    }
}
