//! Init command - create the shed directory and encrypted database.

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::{self, Config, DATABASE_FILE};
use crate::core::store::Store;
use crate::error::{ConfigError, Error, Result};

/// Initialize shed: directory, config file, and database schema.
pub fn execute(shed_dir: Option<&Path>) -> Result<()> {
    let dir = config::resolve_dir(shed_dir)?;

    if Config::exists(&dir) {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    std::fs::create_dir_all(&dir).map_err(ConfigError::CreateDir)?;

    let key = prompt_key()?;
    if key.is_empty() {
        return Err(Error::Other("encryption key cannot be empty".to_string()));
    }

    let config = Config::new(dir.join(DATABASE_FILE), key.to_string());
    config.save(&dir)?;

    // Open once so the schema exists and a bad key fails here, not later.
    let _store = Store::open_with_config(&config)?;

    info!("initialized shed in {}", dir.display());
    output::success(&format!("initialized {}", output::name(&dir.display().to_string())));
    output::hint("add a command with `shed add <name> <command>`");

    Ok(())
}

/// Read the encryption key: hidden interactive prompt, or a line from
/// stdin when piped.
fn prompt_key() -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        let key = Password::new()
            .with_prompt("Encryption key")
            .with_confirmation("Confirm encryption key", "keys do not match")
            .interact()
            .map_err(|e| Error::Other(format!("failed to read encryption key: {e}")))?;
        Ok(Zeroizing::new(key))
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(Zeroizing::new(line.trim().to_string()))
    }
}
