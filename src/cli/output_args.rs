// Output destination configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output destination and verbosity options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// File to write output (default is stdout)
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include fingerprints and subject alternative names in each block
    #[arg(long = "v")]
    pub verbose: bool,
}
