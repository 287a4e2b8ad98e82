//! cnab-bundle - CNAB bundle metadata tool
//!
//! Validates bundle documents, resolves their parameters and writes
//! canonical encodings.

use clap::Parser;

use cnab_bundle::cli::Cli;
use cnab_bundle::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::dispatch(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
