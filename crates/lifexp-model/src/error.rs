use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Region code outside the closed country set.
    #[error("invalid country code '{code}'")]
    InvalidCountryCode { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
