//! Command-line interface.

pub mod add;
pub mod completions;
pub mod cp;
pub mod describe;
pub mod edit;
pub mod init;
pub mod list;
pub mod output;
pub mod rm;
pub mod run;
pub mod secret;

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::core::config::{self, Config};
use crate::core::store::Store;
use crate::error::Result;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default())
    .valid(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
    .error(AnsiColor::Red.on_default().effects(Effects::BOLD));

/// Shed - store and run parameterized shell commands.
#[derive(Parser)]
#[command(
    name = "shed",
    about = "Store and run parameterized shell commands with encrypted secrets",
    version,
    styles = STYLES
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Path to the shed configuration directory
    #[arg(long = "shed-dir", global = true, env = "SHED_DIR", value_name = "PATH")]
    pub shed_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the shed directory and encrypted database
    Init,

    /// Add a new command
    ///
    /// The command string may contain parameters using the
    /// {{name|description}} syntax and secrets using {{!name}}.
    Add {
        /// Command name (e.g., list_files)
        name: String,
        /// Command string to store
        command: String,
        /// Description of what the command does
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List all stored commands
    List,

    /// Display detailed information about a command
    Describe {
        /// Command name
        name: String,
    },

    /// Edit an existing command
    Edit {
        /// Command name
        name: String,
        /// New command string
        command: String,
        /// JSON object with parameter values to pre-fill (e.g., '{"url":"..."}')
        values: Option<String>,
        /// New name for the command
        #[arg(short = 'n', long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,
        /// New description for the command
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Copy a command, optionally pre-filling parameter values
    Cp {
        /// Source command name
        src: String,
        /// Destination command name
        dest: String,
        /// JSON object with parameter values to pre-fill
        values: Option<String>,
    },

    /// Remove a command
    Rm {
        /// Command name
        name: String,
    },

    /// Run a stored command by name
    ///
    /// Secrets referenced by the command are fetched from the secret store
    /// automatically; parameters come from the JSON argument.
    Run {
        /// Command name
        name: String,
        /// JSON object with parameter values (e.g., '{"path":"/tmp"}')
        values: Option<String>,
    },

    /// Manage secrets
    #[command(subcommand)]
    Secret(SecretCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Secret subcommands.
#[derive(Subcommand)]
pub enum SecretCommand {
    /// Add a secret
    Add {
        /// Secret key (e.g., api_key)
        key: String,
        /// Secret value
        value: String,
        /// Description of the secret
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List all secret keys (values are never printed)
    List,

    /// Update a secret's value
    Edit {
        /// Secret key
        key: String,
        /// New secret value
        value: String,
        /// New description (existing one is kept when omitted)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Remove a secret
    Rm {
        /// Secret key
        key: String,
    },
}

/// Initialize the tracing subscriber.
///
/// Stdout and stderr of executed commands are forwarded as info and error
/// events, so the format stays bare: no timestamps, no targets.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

/// Open the store described by the configuration in the shed directory.
fn open_store(shed_dir: Option<&std::path::Path>) -> Result<Store> {
    let dir = config::resolve_dir(shed_dir)?;
    let config = Config::load(&dir)?;
    Store::open_with_config(&config)
}

/// Execute a command.
pub fn execute(command: Command, shed_dir: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let shed_dir = shed_dir.as_deref();

    match command {
        Init => init::execute(shed_dir),
        Completions { shell } => completions::execute(shell),
        Add {
            name,
            command,
            description,
        } => add::execute(&open_store(shed_dir)?, &name, &command, &description),
        List => list::execute(&open_store(shed_dir)?),
        Describe { name } => describe::execute(&open_store(shed_dir)?, &name),
        Edit {
            name,
            command,
            values,
            new_name,
            description,
        } => edit::execute(
            &open_store(shed_dir)?,
            &name,
            &command,
            values.as_deref(),
            new_name.as_deref(),
            description.as_deref(),
        ),
        Cp { src, dest, values } => {
            cp::execute(&open_store(shed_dir)?, &src, &dest, values.as_deref())
        }
        Rm { name } => rm::execute(&open_store(shed_dir)?, &name),
        Run { name, values } => run::execute(&open_store(shed_dir)?, &name, values.as_deref()),
        Secret(cmd) => {
            let store = open_store(shed_dir)?;
            match cmd {
                SecretCommand::Add {
                    key,
                    value,
                    description,
                } => secret::add(&store, &key, &value, &description),
                SecretCommand::List => secret::list(&store),
                SecretCommand::Edit {
                    key,
                    value,
                    description,
                } => secret::edit(&store, &key, &value, description.as_deref()),
                SecretCommand::Rm { key } => secret::rm(&store, &key),
            }
        }
    }
}
