//! Add command - store a new command template.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Add a command to the store.
pub fn execute(store: &Store, name: &str, command: &str, description: &str) -> Result<()> {
    debug!("adding command {name}: {command}");

    let cmd = store.add_command(name, command, description)?;

    info!("added command {} (id {})", cmd.name, cmd.id);
    output::success(&format!("added {}", output::name(&cmd.name)));
    if !cmd.parameters.is_empty() {
        output::dimmed(&format!("{} parameter(s) detected", cmd.parameters.len()));
    }

    Ok(())
}
