//! Error types shared across Turnover crates.

use std::path::PathBuf;

/// Top-level error type for Turnover operations.
///
/// The EDL parser itself never fails; these errors come from the layers
/// around it (loading files, reading configuration, strict validation).
#[derive(Debug, thiserror::Error)]
pub enum TurnoverError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using TurnoverError.
pub type TurnoverResult<T> = Result<T, TurnoverError>;

impl TurnoverError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Read a text document, mapping a missing file to [`TurnoverError::FileNotFound`].
pub fn read_text_file(path: impl AsRef<std::path::Path>) -> TurnoverResult<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(TurnoverError::file_not_found(path))
        }
        Err(e) => Err(e.into()),
    }
}
