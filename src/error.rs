use thiserror::Error;

/// Errors raised by the shell's fallible edges: tag parsing and config loading.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown mode tag: {0:?}")]
    UnknownMode(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
