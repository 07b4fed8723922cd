//! Logging and tracing initialization.
//!
//! Command output goes to stdout, so log lines are written to stderr or,
//! when configured, appended to a log file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{TurnoverError, TurnoverResult};

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. Installing a second
/// global subscriber is a no-op.
pub fn init_logging(config: &LoggingConfig) -> TurnoverResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    TurnoverError::logging(format!("cannot open {}: {e}", path.display()))
                })?;
            let builder = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                tracing::subscriber::set_global_default(builder.with_target(true).finish()).ok();
            }
        }
        None => {
            let builder = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr);
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                let subscriber = builder
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .finish();
                tracing::subscriber::set_global_default(subscriber).ok();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let config = LoggingConfig {
            file: Some(std::env::temp_dir().join("turnover_no_such_dir").join("x").join("log")),
            ..LoggingConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, TurnoverError::Logging { .. }));
    }
}
