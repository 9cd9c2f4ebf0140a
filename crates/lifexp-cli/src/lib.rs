//! Library side of the `lifexp` CLI: format selection, configuration,
//! orchestration and logging.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod pipeline;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PipelineConfig};
pub use error::{PipelineError, Result};
pub use format::{FormatRegistry, FormatStrategy};
pub use pipeline::{PipelineOutcome, run, run_pipeline};
