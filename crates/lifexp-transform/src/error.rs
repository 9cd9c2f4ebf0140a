use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Wide export without the full dimension block.
    #[error("expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },

    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A year label or year cell that is not an integer.
    #[error("cannot convert '{value}' in column '{column}' to an integer year")]
    TypeConversion { column: String, value: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
