use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: '{input}' is not an integer")]
    InvalidInput { input: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CpfError>;
