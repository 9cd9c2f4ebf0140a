//! Closed set of source readers.

use std::fmt;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use crate::archive::read_archive_json;
use crate::delimited::read_delimited_table;
use crate::error::Result;

/// Strategy used to load one source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderKind {
    /// Tab/comma separated wide export.
    Delimited,
    /// Zip archive holding a JSON record array.
    ArchiveJson,
}

impl ReaderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderKind::Delimited => "delimited",
            ReaderKind::ArchiveJson => "archive-json",
        }
    }

    /// Reads `path` into a raw, not yet normalized table.
    pub fn read(self, path: &Path) -> Result<DataFrame> {
        let df = match self {
            ReaderKind::Delimited => read_delimited_table(path)?,
            ReaderKind::ArchiveJson => read_archive_json(path)?,
        };
        info!(
            reader = self.as_str(),
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "source read"
        );
        Ok(df)
    }
}

impl fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
