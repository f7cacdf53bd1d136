// crt.sh API Client
//
// Handles HTTP communication with the crt.sh log-search endpoint

use super::records::CertificateRecord;
use super::Result;
use crate::error::SearchError;
use tracing::{debug, info};

/// crt.sh log-search endpoint
const CRT_SH_URL: &str = "https://crt.sh/";

/// crt.sh API client
///
/// Deliberately built with default transport settings: a query is one
/// request/response cycle with no timeout override and no retries.
pub struct CrtShClient {
    client: reqwest::Client,
}

impl CrtShClient {
    /// Create a new crt.sh client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch all known certificate-log entries matching a domain.
    ///
    /// The returned order is whatever the server produced; the server
    /// itself guarantees no particular ordering.
    pub async fn search(&self, domain: &str) -> Result<Vec<CertificateRecord>> {
        debug!("Querying {} for domain {}", CRT_SH_URL, domain);

        let response = self
            .client
            .get(CRT_SH_URL)
            .query(&[("q", domain), ("output", "json")])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(SearchError::HttpStatus {
                status: response.status().as_u16(),
                details: format!("unexpected status code from crt.sh: {}", response.status()),
            });
        }

        let body = response.text().await?;
        let records: Vec<CertificateRecord> =
            serde_json::from_str(&body).map_err(|e| SearchError::ParseError {
                message: format!("failed to decode crt.sh response: {}", e),
            })?;

        info!("crt.sh returned {} certificate entries", records.len());
        Ok(records)
    }
}

impl Default for CrtShClient {
    fn default() -> Self {
        Self::new()
    }
}
