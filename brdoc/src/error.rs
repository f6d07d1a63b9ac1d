use thiserror::Error;

// Errors of the fallible outer surfaces (settings, CSV batches, command line).
// Validation and formatting themselves never fail.
#[derive(Error, Debug)]
pub enum BrDocError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),

    // Wraps loader errors that carry their own context message.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl BrDocError {
    /// Process exit code for the command line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            BrDocError::ConfigError(_) => 3,
            BrDocError::UnknownKind(_) => 2,
            _ => 4,
        }
    }
}
