use thiserror::Error;

/// Input extraction errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("AWS region was not provided in inputs or environment variables.")]
    MissingRegion,

    #[error("missing required input: {input}")]
    MissingInput { input: &'static str },

    #[error("invalid value for {input}: {reason}")]
    InvalidValue { input: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
