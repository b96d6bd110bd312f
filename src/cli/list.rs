//! List command - show all stored commands.

use crate::cli::output;
use crate::core::store::{Command, Store};
use crate::error::Result;

/// List all commands, newest first.
pub fn execute(store: &Store) -> Result<()> {
    let commands = store.list_commands()?;

    if commands.is_empty() {
        output::dimmed("no commands stored");
        return Ok(());
    }

    output::section(&format!("{} command(s)", commands.len()));
    for cmd in &commands {
        render(cmd);
    }

    Ok(())
}

fn render(cmd: &Command) {
    println!();
    output::kv("name:", &cmd.name);
    output::kv("command:", &cmd.command);
    if !cmd.description.is_empty() {
        output::kv("description:", &cmd.description);
    }
    output::kv("parameters:", cmd.parameters.len());
    for param in &cmd.parameters {
        if param.description.is_empty() {
            output::list_item(&param.name);
        } else {
            output::list_item(&format!("{}: {}", param.name, param.description));
        }
    }
}
