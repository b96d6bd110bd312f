//! Persistent storage for commands and secrets.
//!
//! The store owns a single connection to an SQLCipher-encrypted SQLite
//! database and is threaded by value through the CLI dispatcher. Schema
//! setup is versioned through `user_version`; `updated_at` columns are
//! maintained by triggers.

mod commands;
mod secrets;

pub use commands::Command;
pub use secrets::Secret;

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::core::config::Config;
use crate::error::Result;

const SCHEMA_VERSION: i32 = 1;
const CIPHER_PAGE_SIZE: i64 = 4096;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS commands (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT UNIQUE NOT NULL,
    command     TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    parameters  TEXT NOT NULL DEFAULT '[]',
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_commands_name ON commands(name);

CREATE TRIGGER IF NOT EXISTS trg_commands_updated_at
AFTER UPDATE ON commands
FOR EACH ROW
BEGIN
    UPDATE commands
    SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
    WHERE id = NEW.id;
END;

CREATE TABLE IF NOT EXISTS secrets (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    key         TEXT UNIQUE NOT NULL,
    value       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_secrets_key ON secrets(key);

CREATE TRIGGER IF NOT EXISTS trg_secrets_updated_at
AFTER UPDATE ON secrets
FOR EACH ROW
BEGIN
    UPDATE secrets
    SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
    WHERE id = NEW.id;
END;
"#;

/// Handle to the encrypted command and secret database.
pub struct Store {
    conn: Connection,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    /// Open (or create) the encrypted database at `path` and ensure the
    /// schema is current.
    ///
    /// The key pragma must be applied before any other statement touches
    /// the file; a wrong key surfaces as a database error on the first
    /// real query.
    pub fn open(path: &Path, key: &str, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "key", key)?;
        conn.pragma_update(None, "cipher_page_size", CIPHER_PAGE_SIZE)?;
        conn.busy_timeout(busy_timeout)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open the store described by a loaded configuration.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        Self::open(
            &config.database.location,
            &config.database.password,
            Duration::from_millis(config.database.busy_timeout_ms),
        )
    }

    /// Open an unencrypted in-memory database (tests only).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        let version: i32 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version >= SCHEMA_VERSION {
            tracing::debug!("schema up to date (version {version})");
            return Ok(());
        }

        self.conn.execute_batch(SCHEMA)?;
        self.conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        tracing::debug!("schema created (version {SCHEMA_VERSION})");
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
