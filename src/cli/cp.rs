//! Cp command - copy a command under a new name.

use tracing::debug;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Copy `src` to `dest`, optionally pre-filling parameter values.
/// Unresolved spans keep their placeholders in the copy.
pub fn execute(store: &Store, src: &str, dest: &str, values: Option<&str>) -> Result<()> {
    debug!("copying command {src} to {dest}");

    let copy = store.copy_command(src, dest, values.unwrap_or(""))?;

    output::success(&format!(
        "copied {} to {}",
        output::name(src),
        output::name(&copy.name)
    ));
    output::kv("command:", &copy.command);

    Ok(())
}
