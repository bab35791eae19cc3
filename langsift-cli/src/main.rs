//! langsift command-line entry point

use clap::Parser;
use langsift_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
