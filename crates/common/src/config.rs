//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TurnoverError, TurnoverResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied when reading and writing EDLs.
    #[serde(default)]
    pub edl: EdlDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default EDL handling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdlDefaults {
    /// Frame rate assumed when converting timecodes to frame counts.
    pub fps: u32,

    /// Whether exported EDLs use drop-frame (`;`) timecodes.
    pub drop_frame: bool,

    /// Sequence code used when suggesting shot codes (e.g. "SEQ" -> SEQ_0010).
    pub sequence_code: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "turnover_edl=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for EdlDefaults {
    fn default() -> Self {
        Self {
            fps: 24,
            drop_frame: false,
            sequence_code: "SEQ".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> TurnoverResult<Self> {
        let content = crate::error::read_text_file(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the EDL tooling cannot work with.
    pub fn validate(&self) -> TurnoverResult<()> {
        if self.edl.fps == 0 {
            return Err(TurnoverError::config("edl.fps must be greater than zero"));
        }
        if self.edl.sequence_code.trim().is_empty() {
            return Err(TurnoverError::config("edl.sequence_code must not be empty"));
        }
        Ok(())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> TurnoverResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("turnover").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.edl.fps, 24);
        assert!(!config.edl.drop_frame);
        assert_eq!(config.edl.sequence_code, "SEQ");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"edl":{"fps":25}}"#).unwrap();
        assert_eq!(parsed.edl.fps, 25);
        assert_eq!(parsed.edl.sequence_code, "SEQ");
        assert_eq!(parsed.logging, LoggingConfig::default());
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        let mut config = AppConfig::default();
        config.edl.fps = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("edl.fps"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("turnover_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.edl.fps = 30;
        config.edl.sequence_code = "ABC".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_rejects_invalid_json() {
        let dir = std::env::temp_dir().join("turnover_test_config_invalid");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TurnoverError::Json(_)));

        std::fs::remove_dir_all(&dir).ok();
    }
}
