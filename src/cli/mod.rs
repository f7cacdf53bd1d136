// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;

mod output_args;

pub use output_args::OutputArgs;

/// certsearch - Certificate Transparency search client for crt.sh
///
/// The flag is called --url for historical reasons; it takes a bare
/// domain, not a URL.
#[derive(Parser, Debug, Clone)]
#[command(author, version, long_about = None)]
#[command(name = "certsearch")]
#[command(about = "Search Certificate Transparency logs via crt.sh")]
pub struct Args {
    /// Target domain to search certificates for
    #[arg(long = "url", value_name = "DOMAIN", required = true)]
    pub domain: String,

    /// Sort results by (issuer, expiration)
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    // ============ Output Destination and Verbosity ============
    #[command(flatten)]
    pub output: OutputArgs,
}
