//! Command CRUD operations.

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use crate::core::brackets::{self, Parameters};
use crate::core::store::Store;
use crate::core::validation;
use crate::error::{Error, Result, StoreError};

const SELECT_COMMAND: &str =
    "SELECT id, name, command, description, parameters, created_at, updated_at FROM commands";

/// A stored command with its cached parameter projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: i64,
    pub name: String,
    pub command: String,
    pub description: String,
    pub parameters: Parameters,
    pub created_at: String,
    pub updated_at: String,
}

struct RawCommand {
    id: i64,
    name: String,
    command: String,
    description: String,
    parameters: String,
    created_at: String,
    updated_at: String,
}

fn row_to_raw(row: &Row<'_>) -> rusqlite::Result<RawCommand> {
    Ok(RawCommand {
        id: row.get(0)?,
        name: row.get(1)?,
        command: row.get(2)?,
        description: row.get(3)?,
        parameters: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl TryFrom<RawCommand> for Command {
    type Error = Error;

    fn try_from(raw: RawCommand) -> Result<Command> {
        let parameters = serde_json::from_str(&raw.parameters).map_err(|source| {
            StoreError::CorruptParameters {
                name: raw.name.clone(),
                source,
            }
        })?;

        Ok(Command {
            id: raw.id,
            name: raw.name,
            command: raw.command,
            description: raw.description,
            parameters,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

fn encode_parameters(parameters: &Parameters) -> Result<String> {
    serde_json::to_string(parameters).map_err(|e| StoreError::EncodeParameters(e).into())
}

impl Store {
    /// Store a new command.
    ///
    /// The template is normalized and its parameters extracted before
    /// insertion, so stored templates are always parseable.
    ///
    /// # Errors
    ///
    /// `InvalidCommandName` for a bad name, a `ValidationError` kind for a
    /// bad template, `AlreadyExists` when the name is taken.
    pub fn add_command(&self, name: &str, command: &str, description: &str) -> Result<Command> {
        validation::validate_command_name(name)?;

        let parsed = brackets::parse(command)?;

        match self.get_command_by_name(name) {
            Ok(_) => {
                return Err(StoreError::AlreadyExists {
                    kind: "command",
                    name: name.to_string(),
                }
                .into())
            }
            Err(Error::Store(StoreError::CommandNotFound(_))) => {}
            Err(e) => return Err(e),
        }

        let parameters = encode_parameters(&parsed.parameters)?;
        self.conn().execute(
            "INSERT INTO commands (name, command, description, parameters) VALUES (?1, ?2, ?3, ?4)",
            params![name, parsed.normalized, description, parameters],
        )?;

        let id = self.conn().last_insert_rowid();
        debug!("stored command {name} (id {id})");
        self.get_command(id)
    }

    /// Fetch a command by id.
    pub fn get_command(&self, id: i64) -> Result<Command> {
        let raw = self
            .conn()
            .query_row(
                &format!("{SELECT_COMMAND} WHERE id = ?1"),
                params![id],
                row_to_raw,
            )
            .optional()?
            .ok_or_else(|| StoreError::CommandNotFound(id.to_string()))?;
        raw.try_into()
    }

    /// Fetch a command by name.
    pub fn get_command_by_name(&self, name: &str) -> Result<Command> {
        let raw = self
            .conn()
            .query_row(
                &format!("{SELECT_COMMAND} WHERE name = ?1"),
                params![name],
                row_to_raw,
            )
            .optional()?
            .ok_or_else(|| StoreError::CommandNotFound(name.to_string()))?;
        raw.try_into()
    }

    /// List all commands, most recently created first.
    pub fn list_commands(&self) -> Result<Vec<Command>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("{SELECT_COMMAND} ORDER BY created_at DESC, id DESC"))?;
        let rows = stmt.query_map([], row_to_raw)?;

        let mut commands = Vec::new();
        for raw in rows {
            commands.push(raw?.try_into()?);
        }
        Ok(commands)
    }

    /// Remove a command by name.
    ///
    /// # Errors
    ///
    /// `CommandNotFound` when no such command exists.
    pub fn remove_command(&self, name: &str) -> Result<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM commands WHERE name = ?1", params![name])?;
        if changed == 0 {
            return Err(StoreError::CommandNotFound(name.to_string()).into());
        }
        debug!("removed command {name}");
        Ok(())
    }

    /// Copy a command under a new name, optionally pre-filling parameter
    /// values. Spans left unresolved keep their placeholders, so the copy
    /// retains exactly the parameters that were not filled in.
    pub fn copy_command(
        &self,
        src_name: &str,
        dest_name: &str,
        json_values: &str,
    ) -> Result<Command> {
        let src = self.get_command_by_name(src_name)?;
        let template = brackets::hydrate_from_json(&src.command, json_values)?;
        self.add_command(dest_name, &template, &src.description)
    }

    /// Update a command, reconciling parameter metadata across the edit.
    ///
    /// `user_parameters` is the parameter list the caller last saw; the
    /// list stored with the command is used as the merge base. Values in
    /// `json_values` are substituted into the new template before its
    /// parameters are extracted, so hydrated spans drop out of the list.
    pub fn update_command(
        &self,
        id: i64,
        name: &str,
        command: &str,
        description: &str,
        user_parameters: &Parameters,
        json_values: &str,
    ) -> Result<Command> {
        validation::validate_command_name(name)?;

        let normalized = brackets::normalize(command);
        let hydrated = brackets::hydrate_from_json(&normalized, json_values)?;

        let prev = self.get_command(id)?;

        if name != prev.name {
            match self.get_command_by_name(name) {
                Ok(_) => {
                    return Err(StoreError::AlreadyExists {
                        kind: "command",
                        name: name.to_string(),
                    }
                    .into())
                }
                Err(Error::Store(StoreError::CommandNotFound(_))) => {}
                Err(e) => return Err(e),
            }
        }

        let parsed = brackets::parse(&hydrated)?;
        let mut priority = parsed.parameters;
        priority.three_way_merge(&prev.parameters, user_parameters);

        let parameters = encode_parameters(&priority)?;
        self.conn().execute(
            "UPDATE commands SET name = ?1, command = ?2, description = ?3, parameters = ?4 WHERE id = ?5",
            params![name, parsed.normalized, description, parameters, id],
        )?;

        debug!("updated command {name} (id {id})");
        self.get_command(id)
    }
}
