//! Region filter and CSV sink.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, BooleanChunked, CsvWriter, DataFrame, NewChunkedArray, SerWriter};
use tracing::{debug, info};

use lifexp_ingest::any_to_string;
use lifexp_model::{Country, REGION};

use crate::error::{OutputError, Result};

/// Keeps the rows whose `region` equals the country code exactly.
///
/// The result is a fresh frame, so row positions restart at zero. Null
/// regions never match.
pub fn filter_region(df: &DataFrame, country: Country) -> Result<DataFrame> {
    let column = df.column(REGION).map_err(|_| OutputError::MissingColumn {
        column: REGION.to_string(),
    })?;
    let code = country.as_str();
    let keep: Vec<bool> = (0..df.height())
        .map(|idx| match column.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => false,
            value => any_to_string(value) == code,
        })
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Writes `df` as comma-separated text with a header row and no index.
///
/// Missing parent directories are created; an existing file is replaced.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let io_error = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let mut frame = df.clone();
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .map_err(|e| io_error(std::io::Error::other(e.to_string())))?;
    writer.flush().map_err(io_error)?;
    debug!(path = %path.display(), rows = df.height(), "csv written");
    Ok(())
}

/// Filters the clean table to one country and persists the result.
#[derive(Debug, Clone)]
pub struct RegionFilterSink {
    output_path: PathBuf,
}

impl RegionFilterSink {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Filters `clean` to `country`, overwrites the output file, and returns
    /// the filtered table.
    pub fn apply(&self, clean: &DataFrame, country: Country) -> Result<DataFrame> {
        let filtered = filter_region(clean, country)?;
        write_csv(&filtered, &self.output_path)?;
        info!(
            region = %country,
            rows = filtered.height(),
            path = %self.output_path.display(),
            "region extract saved"
        );
        Ok(filtered)
    }
}
