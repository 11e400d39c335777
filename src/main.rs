//! CLI entry point for the domino tiling tool

use clap::Parser;
use dominotile::io::cli::{Cli, TilingProcessor};
use std::process::ExitCode;

// Allow print for the final error message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let processor = TilingProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
