//! Run command - execute a stored command through the host shell.

use tracing::debug;

use crate::core::execute;
use crate::core::store::Store;
use crate::error::Result;

/// Run a stored command by name with optional JSON parameter values.
pub fn execute(store: &Store, name: &str, values: Option<&str>) -> Result<()> {
    let json_values = values.unwrap_or("{}");
    debug!("running command {name} with values {json_values}");

    execute::run_command(store, name, json_values)
}
