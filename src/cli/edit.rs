//! Edit command - update an existing command.

use tracing::debug;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Edit a command: new template, optional rename, optional new description,
/// optional JSON values to pre-fill parameters.
///
/// The previous name and description are kept when the flags are omitted.
/// Parameter metadata is reconciled with a three-way merge between the
/// freshly parsed template, the stored list, and the list as it was when
/// the command was fetched.
pub fn execute(
    store: &Store,
    name: &str,
    command: &str,
    values: Option<&str>,
    new_name: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    debug!("editing command {name}");

    let existing = store.get_command_by_name(name)?;

    let next_name = new_name.unwrap_or(name);
    let next_description = description.unwrap_or(&existing.description);

    let updated = store.update_command(
        existing.id,
        next_name,
        command,
        next_description,
        &existing.parameters,
        values.unwrap_or(""),
    )?;

    output::success(&format!("updated {}", output::name(&updated.name)));
    output::kv("command:", &updated.command);

    Ok(())
}
