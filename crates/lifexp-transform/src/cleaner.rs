//! Closed set of cleaning strategies.

use std::fmt;

use polars::prelude::DataFrame;
use tracing::info;

use crate::error::Result;
use crate::nested::clean_nested;
use crate::wide::clean_wide;

/// Strategy used to normalize one source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleanerKind {
    /// Melt year columns into rows and extract decimal values.
    WideToLong,
    /// Rename and prune fields of one-record-per-row input.
    NestedField,
}

impl CleanerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanerKind::WideToLong => "wide-to-long",
            CleanerKind::NestedField => "nested-field",
        }
    }

    /// Produces the canonical clean table from a raw table.
    pub fn clean(self, raw: &DataFrame) -> Result<DataFrame> {
        let df = match self {
            CleanerKind::WideToLong => clean_wide(raw)?,
            CleanerKind::NestedField => clean_nested(raw)?,
        };
        info!(
            cleaner = self.as_str(),
            raw_rows = raw.height(),
            clean_rows = df.height(),
            "table cleaned"
        );
        Ok(df)
    }
}

impl fmt::Display for CleanerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
