use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitlaneError {
    #[error("Driver #{0} already exists")]
    DuplicateIdentifier(i64),

    #[error("Driver #{0} not found")]
    NotFound(i64),

    #[error("Field cannot be edited: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PitlaneError>;
