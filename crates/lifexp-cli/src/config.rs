//! Pipeline configuration, built once at startup and passed by reference.

use std::path::PathBuf;

use crate::format::FormatRegistry;

/// Input read when the caller names no file.
pub const DEFAULT_INPUT_PATH: &str = "./life_expectancy/data/eu_life_expectancy_raw.tsv";

/// Location of the region extract.
pub const DEFAULT_OUTPUT_PATH: &str = "./life_expectancy/data/pt_life_expectancy.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub formats: FormatRegistry,
    pub output_path: PathBuf,
}

impl PipelineConfig {
    pub fn new(formats: FormatRegistry, output_path: impl Into<PathBuf>) -> Self {
        Self {
            formats,
            output_path: output_path.into(),
        }
    }

    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(FormatRegistry::standard(), DEFAULT_OUTPUT_PATH)
    }
}
