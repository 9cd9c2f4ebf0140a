//! Reader for the wide delimited export.
//!
//! Exports mix separators: the dimension block is comma separated while the
//! year columns are tab separated. Records are read tab-delimited and each
//! tab field is split again on commas. Quoting is not recognised.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// Flattens one tab-delimited record into its comma-separated fields.
fn split_fields(record: &StringRecord) -> Vec<&str> {
    record.iter().flat_map(|field| field.split(',')).collect()
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Data cells are kept verbatim; only an empty cell is missing.
fn normalize_cell(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Reads a delimited table into a DataFrame of String columns.
///
/// The first non-blank record is the header. Empty cells become nulls and
/// short rows are padded with nulls; a row wider than the header is rejected.
pub fn read_delimited_table(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut headers: Vec<String> = Vec::new();
    let mut header_width: Option<usize> = None;
    let mut columns: Vec<Vec<Option<String>>> = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let fields = split_fields(&record);
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let Some(width) = header_width else {
            headers = fields.iter().map(|field| normalize_header(field)).collect();
            header_width = Some(headers.len());
            columns = vec![Vec::new(); headers.len()];
            continue;
        };

        if fields.len() > width {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected: width,
                found: fields.len(),
            });
        }
        trace!(line, fields = fields.len(), "parsed row");
        for (col_idx, values) in columns.iter_mut().enumerate() {
            values.push(fields.get(col_idx).and_then(|raw| normalize_cell(raw)));
        }
    }

    if header_width.is_none() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let frame_columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    let df = DataFrame::new(frame_columns)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "delimited table read"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_mixed_separators() {
        let record = StringRecord::from(vec!["unit,sex,age,geo\\time", "2010 ", "2011 "]);
        assert_eq!(
            split_fields(&record),
            vec!["unit", "sex", "age", "geo\\time", "2010 ", "2011 "]
        );
    }

    #[test]
    fn test_split_fields_keeps_empty_cells() {
        let record = StringRecord::from(vec!["a,,b", ""]);
        assert_eq!(split_fields(&record), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}unit"), "unit");
        assert_eq!(normalize_header("2019 "), "2019");
    }

    #[test]
    fn test_normalize_cell_keeps_padding() {
        assert_eq!(normalize_cell(" 80.1 b "), Some(" 80.1 b ".to_string()));
        assert_eq!(normalize_cell(" PT "), Some(" PT ".to_string()));
        assert_eq!(normalize_cell(""), None);
    }
}
