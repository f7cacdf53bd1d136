// Result Ordering
//
// Optional in-place reordering of fetched records. Both sorts are stable,
// so ties keep the server's original relative order.

use super::records::CertificateRecord;
use crate::error::SearchError;
use std::str::FromStr;

/// Supported sort keys for the fetched record sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending byte-wise lexicographic on issuer name
    Issuer,
    /// Ascending chronological on the not-after timestamp; entries with
    /// no expiry sort first
    Expiration,
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "issuer" => Ok(SortKey::Issuer),
            "expiration" => Ok(SortKey::Expiration),
            other => Err(SearchError::InvalidArgument {
                message: format!(
                    "invalid sort option {:?}, available options: issuer, expiration",
                    other
                ),
            }),
        }
    }
}

/// Reorder records in place by the selected key
pub fn sort_records(records: &mut [CertificateRecord], key: SortKey) {
    match key {
        SortKey::Issuer => records.sort_by(|a, b| a.issuer_name.cmp(&b.issuer_name)),
        SortKey::Expiration => records.sort_by_key(|r| r.not_after),
    }
}
