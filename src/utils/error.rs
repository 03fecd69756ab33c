use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoinError {
    #[error("Element at position {index} could not be converted to text")]
    ElementConversion { index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, JoinError>;
