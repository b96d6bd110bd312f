//! Rm command - remove a command.

use tracing::debug;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Remove a command by name.
pub fn execute(store: &Store, name: &str) -> Result<()> {
    debug!("removing command {name}");

    store.remove_command(name)?;
    output::success(&format!("removed {}", output::name(name)));

    Ok(())
}
