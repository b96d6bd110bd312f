//! Describe command - show one command in detail.

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Show a single command's full details.
pub fn execute(store: &Store, name: &str) -> Result<()> {
    let cmd = store.get_command_by_name(name)?;

    output::section(&cmd.name);
    output::kv("command:", &cmd.command);
    output::kv("description:", &cmd.description);
    output::kv("parameters:", cmd.parameters.len());
    for param in &cmd.parameters {
        if param.description.is_empty() {
            output::list_item(&param.name);
        } else {
            output::list_item(&format!("{}: {}", param.name, param.description));
        }
    }
    output::kv("created:", &cmd.created_at);
    output::kv("updated:", &cmd.updated_at);

    Ok(())
}
