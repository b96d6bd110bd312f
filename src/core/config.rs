//! Configuration discovery and the shed directory layout.
//!
//! Configuration lives in `shed.toml` inside the shed directory, which is
//! `$SHED_DIR` when set and `~/.shed` otherwise. The file carries the two
//! values the store needs: the database location and its encryption key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Name of the configuration file inside the shed directory.
pub const CONFIG_FILE: &str = "shed.toml";

/// Name of the database file created by `shed init`.
pub const DATABASE_FILE: &str = "shed.db";

/// Environment variable overriding the shed directory.
pub const SHED_DIR_ENV: &str = "SHED_DIR";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

fn default_busy_timeout() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

/// Application configuration, as stored in `shed.toml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "shed-db")]
    pub database: DatabaseConfig,
}

/// Database location and encryption settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the encrypted database file.
    pub location: PathBuf,
    /// SQLCipher encryption key.
    pub password: String,
    /// How long to wait on a locked database before giving up.
    #[serde(rename = "busy-timeout-ms", default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
}

/// Resolve the shed directory: explicit override, then `$SHED_DIR`,
/// then `~/.shed`.
pub fn resolve_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(SHED_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".shed"))
        .ok_or_else(|| ConfigError::NoHomeDirectory.into())
}

impl Config {
    /// Build a fresh configuration for `shed init`.
    pub fn new(database_path: PathBuf, password: String) -> Self {
        Self {
            database: DatabaseConfig {
                location: database_path,
                password,
                busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            },
        }
    }

    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    pub fn exists(dir: &Path) -> bool {
        Self::path(dir).exists()
    }

    /// Load the configuration from a shed directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` when no `shed.toml` exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Write the configuration into a shed directory with owner-only
    /// permissions (the file holds the encryption key).
    pub fn save(&self, dir: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        let path = Self::path(dir);
        std::fs::write(&path, contents).map_err(ConfigError::WriteFile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, perms).map_err(ConfigError::WriteFile)?;
        }

        Ok(())
    }
}
