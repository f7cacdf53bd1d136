// certsearch - Certificate Transparency search client for crt.sh
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! certsearch queries the crt.sh Certificate Transparency aggregation
//! service for every known certificate matching a domain, then formats,
//! optionally sorts, and renders the results as text.

pub mod cli;
pub mod crt_sh;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::crt_sh::{CertificateRecord, CrtShClient, SortKey};
pub use crate::error::SearchError;

/// Result type for certsearch operations
pub type Result<T> = anyhow::Result<T>;
