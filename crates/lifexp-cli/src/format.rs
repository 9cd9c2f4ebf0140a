//! Extension-keyed registry of reader/cleaner pairs.

use std::path::Path;

use lifexp_ingest::ReaderKind;
use lifexp_transform::CleanerKind;

use crate::error::{PipelineError, Result};

/// Reader and cleaner used together for one source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatStrategy {
    pub reader: ReaderKind,
    pub cleaner: CleanerKind,
}

/// Immutable lookup table from file extension to [`FormatStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRegistry {
    entries: Vec<(String, FormatStrategy)>,
}

impl FormatRegistry {
    /// The two known exports: wide `.tsv` and zipped JSON `.zip`.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (
                    "tsv".to_string(),
                    FormatStrategy {
                        reader: ReaderKind::Delimited,
                        cleaner: CleanerKind::WideToLong,
                    },
                ),
                (
                    "zip".to_string(),
                    FormatStrategy {
                        reader: ReaderKind::ArchiveJson,
                        cleaner: CleanerKind::NestedField,
                    },
                ),
            ],
        }
    }

    /// Registered extensions, without the leading dot.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(extension, _)| extension.as_str())
    }

    /// Resolves the strategy for `path` from its extension.
    ///
    /// The comparison is exact and case-sensitive. Nothing is opened here, so
    /// an unknown format fails before any processing starts.
    pub fn select(&self, path: &Path) -> Result<FormatStrategy> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some((_, strategy)) = self
            .entries
            .iter()
            .find(|(registered, _)| *registered == extension)
        {
            return Ok(*strategy);
        }
        Err(PipelineError::UnsupportedFormat { extension })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
