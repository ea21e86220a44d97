use clap::Parser;
use miette::*;
use tracing_subscriber::EnvFilter;

use aoc2025_runner::{cli::Args, run};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the answers
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args, |part, answer| println!("{part}: {answer}"))
}
