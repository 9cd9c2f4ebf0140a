//! Reader for zip archives carrying a JSON record export.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use polars::prelude::DataFrame;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::{IngestError, Result};
use crate::json_table::records_to_frame;

const JSON_SUFFIX: &str = ".json";

fn corrupt(path: &Path, message: impl ToString) -> IngestError {
    IngestError::CorruptArchive {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Reads the first `.json` entry of a zip archive as a table of records.
///
/// "First" is the archive's central directory order, which depends on the
/// tool that wrote the archive. Exports are expected to hold a single JSON
/// entry; when several exist the extra ones are reported and ignored.
pub fn read_archive_json(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| corrupt(path, e))?;

    let json_entries: Vec<String> = archive
        .file_names()
        .filter(|name| name.ends_with(JSON_SUFFIX))
        .map(str::to_string)
        .collect();
    let Some(entry_name) = json_entries.first().cloned() else {
        return Err(IngestError::NoJsonEntry {
            path: path.to_path_buf(),
        });
    };
    if json_entries.len() > 1 {
        warn!(
            path = %path.display(),
            selected = %entry_name,
            candidates = json_entries.len(),
            "archive holds several JSON entries; using the first"
        );
    }

    let mut bytes = Vec::new();
    {
        let mut entry = archive.by_name(&entry_name).map_err(|e| corrupt(path, e))?;
        entry.read_to_end(&mut bytes).map_err(|e| corrupt(path, e))?;
    }
    debug!(
        path = %path.display(),
        entry = %entry_name,
        bytes = bytes.len(),
        "archive entry loaded"
    );

    let records = parse_records(&bytes).map_err(|message| IngestError::MalformedJson {
        path: path.to_path_buf(),
        entry: entry_name.clone(),
        message,
    })?;
    records_to_frame(&records)
}

/// Parses a JSON array of objects.
fn parse_records(bytes: &[u8]) -> std::result::Result<Vec<Map<String, Value>>, String> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    let Value::Array(items) = value else {
        return Err("expected a top-level array of records".to_string());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(format!("record {idx} is not an object: {other}")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let records = parse_records(br#"[{"a": 1}, {"a": 2, "b": "x"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["b"], "x");
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(br#"{"a": 1}"#).unwrap_err();
        assert!(err.contains("top-level array"));
    }

    #[test]
    fn test_parse_records_rejects_scalar_items() {
        let err = parse_records(b"[1, 2]").unwrap_err();
        assert!(err.contains("record 0"));
    }

    #[test]
    fn test_parse_records_rejects_invalid_json() {
        assert!(parse_records(b"[{\"a\": ").is_err());
    }
}
