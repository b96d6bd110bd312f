//! Secret management commands.
//!
//! Implements add, list, edit, and rm for secrets. Secret values are never
//! printed.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Add a secret.
pub fn add(store: &Store, key: &str, value: &str, description: &str) -> Result<()> {
    debug!("adding secret {key}");

    let secret = store.add_secret(key, value, description)?;

    info!("added secret {}", secret.key);
    output::success(&format!("added {}", output::name(&secret.key)));

    Ok(())
}

/// List all secret keys.
pub fn list(store: &Store) -> Result<()> {
    let secrets = store.list_secrets()?;

    if secrets.is_empty() {
        output::dimmed("no secrets stored");
        return Ok(());
    }

    output::section(&format!("{} secret(s)", secrets.len()));
    for secret in &secrets {
        if secret.description.is_empty() {
            output::list_item(&secret.key);
        } else {
            output::list_item(&format!("{}: {}", secret.key, secret.description));
        }
    }

    Ok(())
}

/// Update a secret's value; the description is kept when omitted.
pub fn edit(store: &Store, key: &str, value: &str, description: Option<&str>) -> Result<()> {
    debug!("editing secret {key}");

    let existing = store.get_secret_by_key(key)?;
    let next_description = description.unwrap_or(&existing.description);

    let secret = store.update_secret(key, value, next_description)?;
    output::success(&format!("updated {}", output::name(&secret.key)));

    Ok(())
}

/// Remove a secret.
pub fn rm(store: &Store, key: &str) -> Result<()> {
    debug!("removing secret {key}");

    store.remove_secret(key)?;
    output::success(&format!("removed {}", output::name(key)));

    Ok(())
}
