//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cnab-bundle - CNAB bundle metadata tool
///
/// Validate bundle documents, resolve their parameters and produce canonical encodings.
#[derive(Parser, Debug)]
#[command(
    name = "cnab-bundle",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate and inspect CNAB bundle metadata documents",
    long_about = "cnab-bundle loads CNAB bundle.json documents, checks their structure, \
                  resolves effective parameter values and writes canonical encodings.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cnab-bundle validate bundle.json\n    \
                  cnab-bundle params bundle.json --set replicas=3\n    \
                  cnab-bundle show bundle.json\n    \
                  cnab-bundle fmt bundle.json -o bundle.canonical.json\n    \
                  cnab-bundle digest bundle.json"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true, env = "CNAB_BUNDLE_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a bundle's structure
    Validate(ValidateArgs),

    /// Resolve effective parameter values
    Params(ParamsArgs),

    /// Show bundle information
    Show(ShowArgs),

    /// Rewrite a bundle in canonical form
    Fmt(FmtArgs),

    /// Print the digest of a bundle's canonical form
    Digest(DigestArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the bundle document
    pub file: PathBuf,
}

/// Arguments for the params command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve with defaults only:\n    cnab-bundle params bundle.json\n\n\
                  Override values:\n    cnab-bundle params bundle.json --set replicas=3 --set debug=true\n\n\
                  Read values from a file:\n    cnab-bundle params bundle.json --values values.yaml")]
pub struct ParamsArgs {
    /// Path to the bundle document
    pub file: PathBuf,

    /// YAML or JSON file of parameter values
    #[arg(long, short = 'f', value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Set a parameter value (name=value); overrides --values
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the bundle document
    pub file: PathBuf,

    /// Show image details and custom extensions
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Arguments for the fmt command
#[derive(Parser, Debug)]
pub struct FmtArgs {
    /// Path to the bundle document
    pub file: PathBuf,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the digest command
#[derive(Parser, Debug)]
pub struct DigestArgs {
    /// Path to the bundle document
    pub file: PathBuf,

    /// Fail unless the digest matches this value
    #[arg(long, value_name = "DIGEST")]
    pub verify: Option<String>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_name = "SHELL")]
    pub shell: String,
}
