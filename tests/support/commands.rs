//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a shed command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - SHED_DIR set to the temporary shed directory
    /// - NO_COLOR set so assertions see plain text
    /// - SHELL pinned to /bin/sh on unix for deterministic run tests
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("shed").expect("failed to find shed binary");
        cmd.env("SHED_DIR", self.dir.path());
        cmd.env("NO_COLOR", "1");
        #[cfg(unix)]
        cmd.env("SHELL", "/bin/sh");
        cmd
    }

    /// Shortcut for `shed init` with the key piped on stdin.
    pub fn init_cmd(&self, key: &str) -> Output {
        self.cmd()
            .arg("init")
            .write_stdin(format!("{key}\n"))
            .output()
            .expect("failed to run shed init")
    }

    /// Shortcut for `shed add`.
    pub fn add(&self, name: &str, command: &str) -> Output {
        self.cmd()
            .args(["add", name, command])
            .output()
            .expect("failed to run shed add")
    }

    /// Shortcut for `shed add -d`.
    pub fn add_described(&self, name: &str, command: &str, description: &str) -> Output {
        self.cmd()
            .args(["add", name, command, "-d", description])
            .output()
            .expect("failed to run shed add")
    }

    /// Shortcut for `shed list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run shed list")
    }

    /// Shortcut for `shed describe`.
    pub fn describe(&self, name: &str) -> Output {
        self.cmd()
            .args(["describe", name])
            .output()
            .expect("failed to run shed describe")
    }

    /// Shortcut for `shed edit`.
    pub fn edit(&self, args: &[&str]) -> Output {
        let mut all = vec!["edit"];
        all.extend(args);
        self.cmd()
            .args(&all)
            .output()
            .expect("failed to run shed edit")
    }

    /// Shortcut for `shed cp`.
    pub fn cp(&self, src: &str, dest: &str) -> Output {
        self.cmd()
            .args(["cp", src, dest])
            .output()
            .expect("failed to run shed cp")
    }

    /// Shortcut for `shed cp` with JSON values.
    pub fn cp_values(&self, src: &str, dest: &str, values: &str) -> Output {
        self.cmd()
            .args(["cp", src, dest, values])
            .output()
            .expect("failed to run shed cp")
    }

    /// Shortcut for `shed rm`.
    pub fn rm(&self, name: &str) -> Output {
        self.cmd()
            .args(["rm", name])
            .output()
            .expect("failed to run shed rm")
    }

    /// Shortcut for `shed run`.
    pub fn run(&self, name: &str) -> Output {
        self.cmd()
            .args(["run", name])
            .output()
            .expect("failed to run shed run")
    }

    /// Shortcut for `shed run` with JSON values.
    pub fn run_values(&self, name: &str, values: &str) -> Output {
        self.cmd()
            .args(["run", name, values])
            .output()
            .expect("failed to run shed run")
    }

    /// Shortcut for `shed secret add`.
    pub fn secret_add(&self, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["secret", "add", key, value])
            .output()
            .expect("failed to run shed secret add")
    }

    /// Shortcut for `shed secret add -d`.
    pub fn secret_add_described(&self, key: &str, value: &str, description: &str) -> Output {
        self.cmd()
            .args(["secret", "add", key, value, "-d", description])
            .output()
            .expect("failed to run shed secret add")
    }

    /// Shortcut for `shed secret list`.
    pub fn secret_list(&self) -> Output {
        self.cmd()
            .args(["secret", "list"])
            .output()
            .expect("failed to run shed secret list")
    }

    /// Shortcut for `shed secret edit`.
    pub fn secret_edit(&self, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["secret", "edit", key, value])
            .output()
            .expect("failed to run shed secret edit")
    }

    /// Shortcut for `shed secret rm`.
    pub fn secret_rm(&self, key: &str) -> Output {
        self.cmd()
            .args(["secret", "rm", key])
            .output()
            .expect("failed to run shed secret rm")
    }
}
