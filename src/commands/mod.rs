//! Command implementations for the cnab-bundle CLI

pub mod completions;
pub mod digest;
pub mod fmt;
pub mod params;
pub mod show;
pub mod validate;
pub mod version;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// Run the selected command
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate(args) => validate::run(args),
        Commands::Params(args) => params::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Fmt(args) => fmt::run(args),
        Commands::Digest(args) => digest::run(args),
        Commands::Version => version::run(),
        Commands::Completions(args) => completions::run(args),
    }
}
