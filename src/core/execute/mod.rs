//! Command execution: the run pipeline and the shell runner.
//!
//! `run_command` is the end-to-end flow behind `shed run`: fetch the stored
//! command, resolve its secrets, merge caller-supplied values, hydrate the
//! template, and hand the result to the host shell. Everything before the
//! dispatch is fail-fast and side-effect free.

pub mod shell;

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::core::brackets;
use crate::core::store::Store;
use crate::error::{Error, ExecuteError, Result};

use self::shell::ShellConfig;

/// Run a stored command by name with caller-supplied parameter values.
///
/// Secrets referenced by the template are fetched from the store and
/// injected under their sigiled names; they override any caller-supplied
/// value for the same key. The hydrated string is executed by the detected
/// host shell.
///
/// # Errors
///
/// `CommandNotFound`, `SecretNotFound`, `ParsingValueParams`, and
/// `MissingParameters` before anything is spawned; `ExecutionFailed` when
/// the child exits non-zero.
pub fn run_command(store: &Store, name: &str, json_values: &str) -> Result<()> {
    let hydrated = prepare(store, name, json_values)?;
    debug!("hydrated command: {}", hydrated.as_str());
    run(&hydrated)
}

/// Steps 1-6 of the run pipeline: everything up to (but not including)
/// the shell dispatch. Returns the fully hydrated command string.
pub fn prepare(store: &Store, name: &str, json_values: &str) -> Result<Zeroizing<String>> {
    let command = store.get_command_by_name(name)?;
    let parsed = brackets::parse(&command.command)?;

    let mut values = brackets::values_from_json(json_values)?;

    // Resolved secrets are written last so they win over caller-supplied
    // values for the same sigiled key.
    for secret in parsed.secrets.iter() {
        let row = store.get_secret_by_key(&secret.name)?;
        values.insert(format!("!{}", row.key), row.value);
    }

    let hydrated = brackets::hydrate(&parsed.normalized, &values)?;
    Ok(Zeroizing::new(hydrated))
}

/// Execute a command string through the cached host shell.
pub fn run(command: &str) -> Result<()> {
    let config = shell::shell_config();
    run_with_shell(&config, command)
}

/// Execute a command string through a specific shell.
///
/// The child is spawned with exactly three arguments: the shell executable,
/// its command flag, and the command string. Stdout and stderr are drained
/// concurrently line by line (stdout at info, stderr at error); both
/// readers finish before the child is reaped.
pub fn run_with_shell(config: &ShellConfig, command: &str) -> Result<()> {
    debug!(
        "spawning {} {} {:?}",
        config.path.display(),
        config.flag,
        command
    );

    let mut child = Command::new(&config.path)
        .arg(&config.flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(ExecuteError::Spawn)?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Other("child stdout was not captured".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::Other("child stderr was not captured".to_string()))?;

    let stdout_reader = std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(|l| l.ok()) {
            info!("{line}");
        }
    });
    let stderr_reader = std::thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(|l| l.ok()) {
            error!("{line}");
        }
    });

    // Both streams must drain before wait() so no output is lost.
    let _ = stdout_reader.join();
    let _ = stderr_reader.join();

    let status = child.wait().map_err(ExecuteError::Wait)?;
    if !status.success() {
        return Err(ExecuteError::ExecutionFailed {
            code: status.code().unwrap_or(-1),
        }
        .into());
    }

    Ok(())
}
