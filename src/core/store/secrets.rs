//! Secret CRUD operations.

use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use tracing::debug;

use crate::core::store::Store;
use crate::core::validation;
use crate::error::{Error, Result, StoreError};

const SELECT_SECRET: &str =
    "SELECT id, key, value, description, created_at, updated_at FROM secrets";

/// A stored secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

fn row_to_secret(row: &Row<'_>) -> rusqlite::Result<Secret> {
    Ok(Secret {
        id: row.get(0)?,
        key: row.get(1)?,
        value: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

impl Store {
    /// Store a new secret.
    ///
    /// # Errors
    ///
    /// `InvalidCommandName` for a bad key, `AlreadyExists` when the key is
    /// taken.
    pub fn add_secret(&self, key: &str, value: &str, description: &str) -> Result<Secret> {
        validation::validate_command_name(key)?;

        match self.get_secret_by_key(key) {
            Ok(_) => {
                return Err(StoreError::AlreadyExists {
                    kind: "secret",
                    name: key.to_string(),
                }
                .into())
            }
            Err(Error::Store(StoreError::SecretNotFound(_))) => {}
            Err(e) => return Err(e),
        }

        self.conn().execute(
            "INSERT INTO secrets (key, value, description) VALUES (?1, ?2, ?3)",
            params![key, value, description],
        )?;

        debug!("stored secret {key}");
        self.get_secret_by_key(key)
    }

    /// List all secrets, most recently created first.
    pub fn list_secrets(&self) -> Result<Vec<Secret>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("{SELECT_SECRET} ORDER BY created_at DESC, id DESC"))?;
        let rows = stmt.query_map([], row_to_secret)?;

        let mut secrets = Vec::new();
        for secret in rows {
            secrets.push(secret?);
        }
        Ok(secrets)
    }

    /// Update an existing secret's value and description.
    ///
    /// # Errors
    ///
    /// `SecretNotFound` when no row with this key exists.
    pub fn update_secret(&self, key: &str, value: &str, description: &str) -> Result<Secret> {
        validation::validate_command_name(key)?;

        let prev = match self.get_secret_by_key(key) {
            Ok(secret) => secret,
            Err(Error::Store(StoreError::SecretNotFound(_))) => {
                return Err(StoreError::SecretNotFound(key.to_string()).into())
            }
            Err(e) => return Err(e),
        };

        self.conn().execute(
            "UPDATE secrets SET value = ?1, description = ?2 WHERE id = ?3",
            params![value, description, prev.id],
        )?;

        debug!("updated secret {key}");
        self.get_secret_by_key(key)
    }

    /// Remove a secret by key.
    ///
    /// # Errors
    ///
    /// `SecretNotFound` when no such secret exists.
    pub fn remove_secret(&self, key: &str) -> Result<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM secrets WHERE key = ?1", params![key])?;
        if changed == 0 {
            return Err(StoreError::SecretNotFound(key.to_string()).into());
        }
        debug!("removed secret {key}");
        Ok(())
    }

    /// Fetch a secret by key.
    pub fn get_secret_by_key(&self, key: &str) -> Result<Secret> {
        self.conn()
            .query_row(
                &format!("{SELECT_SECRET} WHERE key = ?1"),
                params![key],
                row_to_secret,
            )
            .optional()?
            .ok_or_else(|| StoreError::SecretNotFound(key.to_string()).into())
    }

    /// Bulk-fetch secrets by key. Each requested key appears at most once
    /// in the result; missing keys are simply absent.
    pub fn get_secrets_by_keys(&self, keys: &[String]) -> Result<Vec<Secret>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; keys.len()].join(", ");
        let sql = format!("{SELECT_SECRET} WHERE key IN ({placeholders})");

        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(keys.iter()), row_to_secret)?;

        let mut secrets = Vec::new();
        for secret in rows {
            secrets.push(secret?);
        }
        Ok(secrets)
    }
}
