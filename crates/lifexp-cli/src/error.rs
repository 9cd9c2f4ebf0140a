use thiserror::Error;

use lifexp_ingest::IngestError;
use lifexp_model::ModelError;
use lifexp_output::OutputError;
use lifexp_transform::TransformError;

/// Any failure that aborts a pipeline run.
///
/// Stage errors are carried through unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported file format '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Country(#[from] ModelError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
