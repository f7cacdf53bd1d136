// Text Renderer
//
// Writes one human-readable block per certificate record, each block
// terminated by a blank line.

use super::Result;
use crate::crt_sh::records::CertificateRecord;
use crate::error::SearchError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Display format for timestamps; the absent sentinel renders as
/// `0001-01-01 00:00:00`
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Open the render destination: stdout by default, a freshly created
/// (truncated) file when a path is supplied.
///
/// The file is created before any rendering begins, so a creation failure
/// produces no partial output.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| SearchError::FileSystemError {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Write one text block per record, in sequence order
pub fn render_records<W: Write>(
    w: &mut W,
    records: &[CertificateRecord],
    verbose: bool,
) -> Result<()> {
    for record in records {
        writeln!(w, "Common Name: {}", record.common_name)?;
        writeln!(w, "Issuer Name: {}", record.issuer_name)?;
        writeln!(w, "Serial Number: {}", record.serial_number)?;
        writeln!(
            w,
            "Not Before: {}",
            record.not_before.format(DISPLAY_TIME_FORMAT)
        )?;
        writeln!(
            w,
            "Not After: {}",
            record.not_after.format(DISPLAY_TIME_FORMAT)
        )?;
        if verbose {
            writeln!(w, "SHA256 Fingerprint: {}", record.sha256_fingerprint)?;
            writeln!(w, "SHA1 Fingerprint: {}", record.sha1_fingerprint)?;
            writeln!(w, "MD5 Fingerprint: {}", record.md5_fingerprint)?;
            writeln!(
                w,
                "Subject Alternative Names: [{}]",
                record.subject_alternative_names.join(", ")
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<CertificateRecord> {
        serde_json::from_str(
            r#"[
                {
                    "common_name": "a.example.com",
                    "issuer_name": "C=US, O=Example CA",
                    "serial_number": "01",
                    "not_before": "2021-03-05T10:15:30.123",
                    "not_after": "2021-06-03T10:15:30",
                    "sha256_fingerprint": "AAAA",
                    "sha1_fingerprint": "BBBB",
                    "md5_fingerprint": "CCCC",
                    "subject_alternative_names": ["a.example.com", "b.example.com"]
                },
                {
                    "common_name": "b.example.com",
                    "issuer_name": "C=US, O=Example CA",
                    "serial_number": "02",
                    "not_before": "",
                    "not_after": ""
                }
            ]"#,
        )
        .unwrap()
    }

    fn render_to_string(records: &[CertificateRecord], verbose: bool) -> String {
        let mut buf = Vec::new();
        render_records(&mut buf, records, verbose).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_one_block_per_record_separated_by_blank_line() {
        let records = fixture();
        let out = render_to_string(&records, false);

        let blocks: Vec<&str> = out.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), records.len());
        assert!(blocks[0].starts_with("Common Name: a.example.com"));
        assert!(blocks[1].starts_with("Common Name: b.example.com"));
    }

    #[test]
    fn test_default_block_fields_and_time_format() {
        let records = fixture();
        let out = render_to_string(&records, false);

        assert!(out.contains("Issuer Name: C=US, O=Example CA"));
        assert!(out.contains("Serial Number: 01"));
        // Sub-second component is dropped at render time
        assert!(out.contains("Not Before: 2021-03-05 10:15:30"));
        assert!(out.contains("Not After: 2021-06-03 10:15:30"));
        assert!(!out.contains("Fingerprint"));
    }

    #[test]
    fn test_absent_timestamp_renders_as_zero_value() {
        let records = fixture();
        let out = render_to_string(&records, false);

        assert!(out.contains("Not Before: 0001-01-01 00:00:00"));
        assert!(out.contains("Not After: 0001-01-01 00:00:00"));
    }

    #[test]
    fn test_verbose_adds_fingerprints_and_sans() {
        let records = fixture();
        let out = render_to_string(&records, true);

        assert!(out.contains("SHA256 Fingerprint: AAAA"));
        assert!(out.contains("SHA1 Fingerprint: BBBB"));
        assert!(out.contains("MD5 Fingerprint: CCCC"));
        assert!(out.contains("Subject Alternative Names: [a.example.com, b.example.com]"));
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        let out = render_to_string(&[], true);
        assert!(out.is_empty());
    }

    #[test]
    fn test_open_sink_rejects_unwritable_path() {
        let result = open_sink(Some(Path::new("/nonexistent-dir/out.txt")));

        match result {
            Err(SearchError::FileSystemError { path, .. }) => {
                assert!(path.contains("out.txt"));
            }
            other => panic!("expected FileSystemError, got {:?}", other.map(|_| ())),
        }
    }
}
