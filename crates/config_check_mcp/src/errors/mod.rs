use std::path::PathBuf;

/// Result type for config check operations
pub type ConfigCheckResult<T> = Result<T, ConfigCheckError>;

/// Errors that abort a config check run
///
/// Missing keys inside the document are never errors; they are ordinary
/// branches of the report.
#[derive(thiserror::Error, Debug)]
pub enum ConfigCheckError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Home directory could not be determined; pass the config path explicitly")]
    HomeDirectoryNotFound,
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Failed to render server descriptor: {0}")]
    Render(#[from] serde_json::Error),
}
