//! Host shell selection.
//!
//! The runner needs a shell executable and the flag that makes it execute a
//! command string. Detection is platform-specific and cached process-wide;
//! tests can inject an override and reset the cache.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// The shells shed knows how to drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShellCore,
    PowerShell,
    Cmd,
    /// An unrecognized shell, assumed POSIX-compatible.
    Other(String),
}

impl Shell {
    /// Display name, e.g. `bash` or `pwsh`.
    pub fn name(&self) -> &str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::PowerShellCore => "pwsh",
            Self::PowerShell => "powershell",
            Self::Cmd => "cmd",
            Self::Other(name) => name,
        }
    }

    /// The flag that makes this shell execute its next argument as a
    /// command string.
    pub fn command_flag(&self) -> &'static str {
        match self {
            Self::Bash | Self::Zsh | Self::Fish | Self::Other(_) => "-c",
            Self::PowerShellCore | Self::PowerShell => "-Command",
            Self::Cmd => "/C",
        }
    }
}

/// A resolved shell: which one, where it lives, and its command flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub shell: Shell,
    pub path: PathBuf,
    pub flag: String,
}

impl ShellConfig {
    fn new(shell: Shell, path: impl Into<PathBuf>) -> Self {
        let flag = shell.command_flag().to_string();
        Self {
            shell,
            path: path.into(),
            flag,
        }
    }
}

static SHELL_CONFIG: RwLock<Option<ShellConfig>> = RwLock::new(None);

/// The shell configuration for this process, detected once and cached.
pub fn shell_config() -> ShellConfig {
    {
        let guard = SHELL_CONFIG.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = guard.as_ref() {
            return config.clone();
        }
    }

    let mut guard = SHELL_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have detected while we waited for the write lock.
    if let Some(config) = guard.as_ref() {
        return config.clone();
    }

    let config = detect_platform();
    *guard = Some(config.clone());
    config
}

/// Override the cached shell configuration. Primarily for tests.
pub fn set_shell_config(config: ShellConfig) {
    let mut guard = SHELL_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(config);
}

/// Clear the cache, forcing re-detection on the next `shell_config` call.
/// Primarily for tests.
pub fn reset_shell_config() {
    let mut guard = SHELL_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Serializes tests that mutate the process-wide shell cache.
#[cfg(test)]
pub(crate) fn cache_test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Map a shell name to its kind, tolerating version suffixes (`bash5`).
fn shell_from_name(name: &str) -> Shell {
    let base = name.trim_end_matches(|c: char| c.is_ascii_digit());
    match base {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "pwsh" => Shell::PowerShellCore,
        "powershell" => Shell::PowerShell,
        "cmd" | "cmd.exe" => Shell::Cmd,
        _ => Shell::Other(name.to_string()),
    }
}

/// Build a config from a full shell path, if the binary actually exists.
fn config_from_path(path: &Path) -> Option<ShellConfig> {
    let metadata = std::fs::metadata(path).ok()?;
    if metadata.is_dir() {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    Some(ShellConfig::new(shell_from_name(name), path))
}

/// Canonical install location for a known shell name.
fn config_from_name(name: &str) -> ShellConfig {
    let shell = shell_from_name(name);
    let path = match shell {
        Shell::Bash => PathBuf::from("/bin/bash"),
        Shell::Zsh => PathBuf::from("/bin/zsh"),
        Shell::Fish => PathBuf::from("/usr/bin/fish"),
        Shell::Other(ref other) => PathBuf::from(format!("/bin/{other}")),
        // Windows shells are resolved through PATH lookup, not fixed paths.
        Shell::PowerShellCore => PathBuf::from("pwsh"),
        Shell::PowerShell => PathBuf::from("powershell"),
        Shell::Cmd => PathBuf::from("cmd.exe"),
    };
    ShellConfig::new(shell, path)
}

/// Which shells have a config file in the user's home directory, in the
/// platform's preferred probe order.
#[cfg(not(windows))]
fn detect_by_config_files(order: &[&str]) -> Option<String> {
    let home = dirs::home_dir()?;

    let candidates = |shell: &str| -> Vec<PathBuf> {
        match shell {
            "bash" => vec![
                home.join(".bashrc"),
                home.join(".bash_profile"),
                home.join(".profile"),
            ],
            "zsh" => vec![home.join(".zshrc"), home.join(".zshenv")],
            "fish" => vec![home.join(".config").join("fish").join("config.fish")],
            _ => Vec::new(),
        }
    };

    for shell in order {
        if candidates(shell).iter().any(|p| p.exists()) {
            return Some((*shell).to_string());
        }
    }
    None
}

#[cfg(not(windows))]
fn detect_from_shell_env() -> Option<ShellConfig> {
    let shell_path = std::env::var("SHELL").ok()?;
    if shell_path.is_empty() {
        return None;
    }
    config_from_path(Path::new(&shell_path))
}

#[cfg(target_os = "linux")]
fn detect_platform() -> ShellConfig {
    if let Some(config) = detect_from_shell_env() {
        return config;
    }
    if let Some(name) = detect_by_config_files(&["bash", "zsh", "fish"]) {
        return config_from_name(&name);
    }
    ShellConfig::new(Shell::Bash, "/bin/bash")
}

#[cfg(target_os = "macos")]
fn detect_platform() -> ShellConfig {
    if let Some(config) = detect_from_shell_env() {
        return config;
    }
    if let Some(name) = detect_by_config_files(&["zsh", "bash", "fish"]) {
        return config_from_name(&name);
    }
    ShellConfig::new(Shell::Zsh, "/bin/zsh")
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "macos"))))]
fn detect_platform() -> ShellConfig {
    if let Some(config) = detect_from_shell_env() {
        return config;
    }
    if let Some(name) = detect_by_config_files(&["bash", "zsh", "fish"]) {
        return config_from_name(&name);
    }
    ShellConfig::new(Shell::Bash, "/bin/bash")
}

#[cfg(windows)]
fn detect_platform() -> ShellConfig {
    if let Ok(path) = which::which("pwsh") {
        return ShellConfig::new(Shell::PowerShellCore, path);
    }
    if let Ok(path) = which::which("powershell") {
        return ShellConfig::new(Shell::PowerShell, path);
    }
    ShellConfig::new(Shell::Cmd, "cmd.exe")
}
