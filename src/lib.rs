//! Shed - store and run parameterized shell commands.
//!
//! Shed keeps shell command templates and secrets in an SQLCipher-encrypted
//! local database and executes them through the host shell after
//! substituting parameter values.
//!
//! Templates use a small bracket grammar: `{{name|description}}` declares a
//! parameter filled from caller input at run time, and `{{!name}}` declares
//! a secret filled from the secret store.
//!
//! # Quick start
//!
//! ```no_run
//! use shed::Store;
//!
//! # fn main() -> shed::Result<()> {
//! let store = Store::open(
//!     std::path::Path::new("/home/u/.shed/shed.db"),
//!     "encryption key",
//!     std::time::Duration::from_millis(5000),
//! )?;
//!
//! store.add_command("list_files", "ls -la {{path|directory path}}", "")?;
//! store.add_secret("api_key", "KKK", "deploy token")?;
//!
//! shed::core::execute::run_command(&store, "list_files", r#"{"path":"/tmp"}"#)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two main modules:
//!
//! - **`core`**: the template grammar ([`core::brackets`]), the encrypted
//!   [`Store`], and the run pipeline ([`core::execute`])
//! - **`cli`**: command-line interface and user-facing commands

pub mod cli;
pub mod core;
pub mod error;

// Re-export the public API
pub use core::brackets::{Parameter, Parameters};
pub use core::config::Config;
pub use core::store::{Command, Secret, Store};
pub use error::{Error, Result};
