//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `memox` binary.
///
/// Provides a builder-style API for constructing and executing CLI
/// commands. The suggestion API key is always scrubbed from the
/// environment so tests never reach the hosted service.
pub struct MemoxCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl MemoxCommand {
    /// Creates a new command for the `memox` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--data-dir` option.
    pub fn data_dir(mut self, path: &Path) -> Self {
        self.args.push("--data-dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points XDG_CONFIG_HOME at an isolated directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.envs.push((
            "XDG_CONFIG_HOME".to_string(),
            path.to_string_lossy().to_string(),
        ));
        self
    }

    /// Sets the `--user` option.
    pub fn user(mut self, user: &str) -> Self {
        self.args.push("--user".to_string());
        self.args.push(user.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Provides text on stdin (for confirmation prompts).
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("memox").expect("Failed to find memox binary");
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.env_remove("OPENAI_API_KEY");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command with a title.
    pub fn new_memo(self, title: &str) -> Self {
        self.args(["new", title])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with an identifier.
    pub fn show(self, memo: &str) -> Self {
        self.args(["show", memo])
    }

    /// Configures for the `edit` command with an identifier.
    pub fn edit(self, memo: &str) -> Self {
        self.args(["edit", memo])
    }

    /// Configures for the `rm` command with an identifier.
    pub fn rm(self, memo: &str) -> Self {
        self.args(["rm", memo])
    }

    /// Configures for the `suggest` command.
    pub fn suggest(self) -> Self {
        self.args(["suggest"])
    }
}

impl Default for MemoxCommand {
    fn default() -> Self {
        Self::new()
    }
}
