//! Error types for shed.
//!
//! Every failure is identifiable by kind so callers can match on it.

use thiserror::Error;

/// Name-validation errors for parameter names, command names, and secret keys.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("parameter name cannot be empty")]
    EmptyName,

    #[error("parameter name is too long, it must be 40 characters or less: {0}")]
    TooLong(String),

    #[error("parameter name must start with a letter: {0}")]
    StartsWithInvalidChar(String),

    #[error("parameter name contains invalid symbols: {0}")]
    ContainsInvalidSymbol(String),

    #[error("parameter name contains spaces: {0}")]
    ContainsSpace(String),

    #[error("invalid command name {name:?}: {reason}")]
    InvalidCommandName { name: String, reason: &'static str },
}

/// Template hydration errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("missing parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("failed to parse value parameters: {0}")]
    ParsingValueParams(#[source] serde_json::Error),
}

/// Parameter collection lookup errors.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("parameter not found: {0}")]
    ParameterNotFound(String),
}

/// Store operation errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("secret not found: {0}")]
    SecretNotFound(String),

    #[error("{kind} {name:?} already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored parameters are corrupt for command {name:?}: {source}")]
    CorruptParameters {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode parameters: {0}")]
    EncodeParameters(#[source] serde_json::Error),
}

/// Shell execution errors.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("failed to spawn shell process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to wait for shell process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("command exited with code {code}")]
    ExecutionFailed { code: i32 },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `shed init` first")]
    NotInitialized,

    #[error("already initialized: shed.toml exists")]
    AlreadyInitialized,

    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("failed to create shed directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Top-level shed error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Store(StoreError::Sqlite(err))
    }
}

/// Result type alias for shed operations.
pub type Result<T> = std::result::Result<T, Error>;
