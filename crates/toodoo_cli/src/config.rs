//! Runtime configuration for the toodoo binary.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TOODOO_DATA_DIR` | per-user data dir + `/toodoo` | Holds `todos.json` and `logs/` |
//! | `TOODOO_LOG_LEVEL` | `debug` (debug builds) / `info` | One of trace, debug, info, warn, error |

use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use toodoo_core::{default_data_dir, default_log_level, StoreError, LOG_DIR_NAME, STORE_FILE_NAME};

pub const DATA_DIR_ENV: &str = "TOODOO_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "TOODOO_LOG_LEVEL";

/// Errors raised while resolving configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// `TOODOO_DATA_DIR` was set to a relative path.
    RelativeDataDir(PathBuf),
    /// The default per-user data directory could not be resolved.
    DataDir(StoreError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeDataDir(path) => write!(
                f,
                "{DATA_DIR_ENV} must be an absolute path, got `{}`",
                path.display()
            ),
            Self::DataDir(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RelativeDataDir(_) => None,
            Self::DataDir(err) => Some(err),
        }
    }
}

impl From<StoreError> for ConfigError {
    fn from(value: StoreError) -> Self {
        Self::DataDir(value)
    }
}

/// Resolved paths and levels for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var_os(DATA_DIR_ENV), env::var(LOG_LEVEL_ENV).ok())
    }

    fn resolve(
        data_dir: Option<OsString>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = match data_dir.filter(|value| !value.is_empty()) {
            Some(value) => {
                let path = PathBuf::from(value);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeDataDir(path));
                }
                path
            }
            None => default_data_dir()?,
        };

        let log_level = log_level
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            data_dir,
            log_level,
        })
    }

    /// Location of the persisted collection.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};
    use std::ffi::OsString;
    use std::path::PathBuf;
    use toodoo_core::default_log_level;

    #[test]
    fn absolute_override_is_used_for_store_and_logs() {
        let config = Config::resolve(Some(OsString::from("/srv/toodoo")), Some("warn".into()))
            .expect("absolute override should resolve");

        assert_eq!(config.data_dir, PathBuf::from("/srv/toodoo"));
        assert_eq!(config.store_path(), PathBuf::from("/srv/toodoo/todos.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/srv/toodoo/logs"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn relative_override_is_rejected() {
        let err = Config::resolve(Some(OsString::from("data")), None)
            .expect_err("relative override must be rejected");
        assert!(matches!(err, ConfigError::RelativeDataDir(_)));
    }

    #[test]
    fn blank_log_level_falls_back_to_build_default() {
        let config = Config::resolve(Some(OsString::from("/srv/toodoo")), Some("  ".into()))
            .expect("absolute override should resolve");
        assert_eq!(config.log_level, default_log_level());
    }
}
