// crt.sh Record Model
//
// One entry of the crt.sh JSON search output. The schema is an external
// contract, including its timezone-less timestamp format and the
// occasional empty-string timestamp field.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by crt.sh (no timezone suffix, optional millis)
const CRT_SH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Sentinel for timestamps the log reports as empty, null, or missing
pub fn absent_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time of day")
}

/// Deserialize a crt.sh timestamp field.
///
/// Empty strings and nulls decode to the absent sentinel; any non-empty
/// value must match the fixed crt.sh format or the whole response fails
/// to decode.
fn crt_sh_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(absent_timestamp()),
        Some(s) => NaiveDateTime::parse_from_str(s, CRT_SH_TIME_FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid crt.sh timestamp {:?}: {}", s, e))
        }),
    }
}

/// One certificate-log entry returned by the crt.sh search endpoint.
///
/// crt.sh omits several of these fields per entry, so everything defaults
/// to its empty value. All fields are immutable after decode.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateRecord {
    #[serde(default)]
    pub issuer_ca_id: i64,
    #[serde(default)]
    pub issuer_name: String,
    #[serde(default)]
    pub common_name: String,
    #[serde(default)]
    pub name_value: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default = "absent_timestamp", deserialize_with = "crt_sh_timestamp")]
    pub entry_timestamp: NaiveDateTime,
    #[serde(default = "absent_timestamp", deserialize_with = "crt_sh_timestamp")]
    pub not_before: NaiveDateTime,
    #[serde(default = "absent_timestamp", deserialize_with = "crt_sh_timestamp")]
    pub not_after: NaiveDateTime,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub all_domains: Vec<String>,
    #[serde(default)]
    pub validation_methods: Vec<String>,
    #[serde(default = "absent_timestamp", deserialize_with = "crt_sh_timestamp")]
    pub validation_timestamp: NaiveDateTime,
    #[serde(default)]
    pub revocation_status: String,
    #[serde(default)]
    pub revocation_reason: String,
    #[serde(default = "absent_timestamp", deserialize_with = "crt_sh_timestamp")]
    pub revocation_timestamp: NaiveDateTime,
    #[serde(default)]
    pub sha256_fingerprint: String,
    #[serde(default)]
    pub sha1_fingerprint: String,
    #[serde(default)]
    pub md5_fingerprint: String,
    #[serde(default)]
    pub subject_alternative_names: Vec<String>,
}
