// Certificate Transparency Search Module
//
// This module queries the crt.sh log aggregation service for certificates
// matching a domain and models the returned log entries.

pub mod client;
pub mod records;
pub mod sort;

pub use client::CrtShClient;
pub use records::CertificateRecord;
pub use sort::SortKey;

use crate::error::SearchError;

/// Result type for crt.sh operations
pub type Result<T> = std::result::Result<T, SearchError>;
