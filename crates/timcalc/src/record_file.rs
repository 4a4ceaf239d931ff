//! Timing records read from JSON files.
//!
//! The file holds one object mapping datasheet keys to numbers:
//!
//! ```json
//! { "tCK": 5, "tRFC": 140, "tRC": 55, "arcv": 1510, "casl": 3, ... }
//! ```
//!
//! Unknown keys are ignored so annotated files (`"part": "..."`) load as is.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use sdrc::{Calculator, OverflowPolicy, TimingKey, TimingRecord};
use serde_json::Value;

use crate::report::{Entry, Group};

/// Parse a JSON object into `(key, value)` pairs.
///
/// Non-numeric values are an error for known keys and skipped otherwise.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, f64)>> {
    let Value::Object(map) = serde_json::from_str::<Value>(text)? else {
        bail!("expected a JSON object of timing parameters");
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value.as_f64() {
            Some(number) => pairs.push((key, number)),
            None if TimingKey::from_name(&key).is_some() => {
                bail!("timing parameter `{key}` is not a number: {value}")
            }
            None => tracing::debug!(key = %key, "skipping non-numeric entry"),
        }
    }
    Ok(pairs)
}

/// Load `path` and build a calculator from it.
pub fn calculate(path: &Path, policy: OverflowPolicy) -> Result<Group> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs = parse_pairs(&text).with_context(|| format!("parsing {}", path.display()))?;

    let record = TimingRecord::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), *v)))
        .with_context(|| format!("timing record in {}", path.display()))?;
    let sdrc = Calculator::with_policy(record, policy)
        .with_context(|| format!("timing record in {}", path.display()))?;

    Ok(Group {
        title: path.display().to_string(),
        entries: vec![Entry {
            freq_mhz: None,
            sdrc,
        }],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use sdrc::SdrcError;
    use std::fs;
    use tempfile::TempDir;

    const M65KX002AM_200MHZ: &str = r#"{
        "part": "M65Kx002AM",
        "tCK": 5, "tRFC": 140, "tRC": 55, "tRAS": 40, "tRP": 15, "tRCD": 16.2,
        "tRRD": 10, "tWR": 15, "tWTR": 10, "tCKE": 10, "tXP": 2.9, "tXSR": 200,
        "arcv": 1510, "are": 1, "wbst": 0, "casl": 3, "bl": 2
    }"#;

    #[test]
    fn integers_and_floats_both_parse() {
        let pairs = parse_pairs(M65KX002AM_200MHZ).unwrap();
        assert!(pairs.contains(&("tCK".to_owned(), 5.0)));
        assert!(pairs.contains(&("tRCD".to_owned(), 16.2)));
        assert!(!pairs.iter().any(|(k, _)| k == "part"));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = parse_pairs("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn non_numeric_known_key_is_rejected() {
        let err = parse_pairs(r#"{"tCK": "fast"}"#).unwrap_err();
        assert!(err.to_string().contains("`tCK` is not a number"));
    }

    #[test]
    fn calculate_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("m65kx002am.json");
        fs::write(&path, M65KX002AM_200MHZ).unwrap();

        let group = calculate(&path, OverflowPolicy::Strict).unwrap();
        assert_eq!(group.entries.len(), 1);
        assert_eq!(group.entries[0].sdrc.actim_ctrla().get(), 0xe2e1_c4c6);
        assert_eq!(group.entries[0].freq_mhz, None);
    }

    #[test]
    fn calculate_reports_missing_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("partial.json");
        fs::write(&path, r#"{"tCK": 5, "tRFC": 140}"#).unwrap();

        let err = calculate(&path, OverflowPolicy::Strict).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<SdrcError>(),
            Some(&SdrcError::MissingParameter { key: TimingKey::TRc })
        );
    }

    #[test]
    fn calculate_reports_unreadable_file() {
        let tmp = TempDir::new().unwrap();
        let err = calculate(&tmp.path().join("absent.json"), OverflowPolicy::Strict).unwrap_err();
        assert!(err.to_string().starts_with("reading "));
    }
}
