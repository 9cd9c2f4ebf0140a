//! Pipeline orchestration: select, read, clean, filter, persist.
//!
//! Every stage runs to completion before the next starts and any failure
//! aborts the run. No state survives between runs, so a run is repeatable
//! and independent runs may execute side by side on different inputs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use lifexp_model::Country;
use lifexp_output::RegionFilterSink;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::format::FormatStrategy;

/// Result of one run: the filtered table plus stage counters.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Rows of the requested region, renumbered from zero.
    pub table: DataFrame,
    pub strategy: FormatStrategy,
    pub country: Country,
    pub raw_rows: usize,
    pub clean_rows: usize,
    pub output_path: PathBuf,
}

/// Runs the pipeline on `path` for `region` with an explicit configuration.
pub fn run(config: &PipelineConfig, path: &Path, region: &str) -> Result<PipelineOutcome> {
    let span = info_span!("pipeline", path = %path.display(), region = %region);
    let _guard = span.enter();
    let start = Instant::now();

    let strategy = config.formats.select(path)?;
    info!(
        reader = %strategy.reader,
        cleaner = %strategy.cleaner,
        "format selected"
    );

    let raw = strategy.reader.read(path)?;
    let clean = strategy.cleaner.clean(&raw)?;
    let country = Country::new(region)?;

    let sink = RegionFilterSink::new(&config.output_path);
    let table = sink.apply(&clean, country)?;

    info!(
        raw_rows = raw.height(),
        clean_rows = clean.height(),
        region_rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineOutcome {
        table,
        strategy,
        country,
        raw_rows: raw.height(),
        clean_rows: clean.height(),
        output_path: sink.output_path().to_path_buf(),
    })
}

/// Runs the pipeline with the default configuration and returns the
/// filtered table.
pub fn run_pipeline(path: &Path, region: &str) -> Result<DataFrame> {
    run(&PipelineConfig::default(), path, region).map(|outcome| outcome.table)
}
