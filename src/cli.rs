// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::Parser;

/// Command-line arguments for `kiln`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kiln",
    version,
    about = "Run declared build targets and their dependencies in order.",
    long_about = None
)]
pub struct CliArgs {
    /// Targets to run, in the order given.
    #[arg(required = true, value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Path to the manifest (TOML).
    ///
    /// Default: `Kiln.toml` in the current working directory.
    #[arg(short = 'f', long, value_name = "PATH", default_value = "Kiln.toml")]
    pub file: String,

    /// Print the commands that would run instead of executing them.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
