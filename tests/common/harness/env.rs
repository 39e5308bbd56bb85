//! Isolated test environment with temp directory.

use super::MemoxCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// config home is isolated as well, so memos and settings on the host
/// machine never leak into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Path used as XDG_CONFIG_HOME for the command under test
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path where the SQLite store would be created.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("memos.db")
    }

    /// Creates a MemoxCommand configured for this test environment.
    pub fn cmd(&self) -> MemoxCommand {
        MemoxCommand::new()
            .data_dir(&self.data_dir)
            .config_home(&self.config_home)
    }

    /// Creates a memo through the CLI and returns its ID prefix.
    pub fn add_memo(&self, title: &str) -> String {
        let stdout = self.cmd().new_memo(title).output_success();
        parse_id_prefix(&stdout)
    }

    /// Creates a memo with content and tags, returning its ID prefix.
    pub fn add_memo_with(&self, title: &str, content: &str, tags: &[&str]) -> String {
        let mut cmd = self.cmd().new_memo(title).args(["--content", content]);
        for tag in tags {
            cmd = cmd.args(["--tag", tag]);
        }
        parse_id_prefix(&cmd.output_success())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the `[PREFIX]` printed by `new` and `edit`.
fn parse_id_prefix(stdout: &str) -> String {
    let start = stdout.find('[').expect("no id prefix in output");
    let end = stdout.find(']').expect("no id prefix in output");
    stdout[start + 1..end].to_string()
}
