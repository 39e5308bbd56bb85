//! Command handlers for the CLI.

mod edit;
mod list;
mod new;
mod resolve;
mod rm;
mod show;
mod suggest;

pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use resolve::{ResolveResult, resolve_memo};
pub use rm::handle_rm;
pub use show::handle_show;
pub use suggest::handle_suggest;

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, CompletionsArgs, config::Config};
use crate::session::Session;
use crate::store::SqliteStore;
use crate::suggest::OpenAiSuggester;

/// Returns the memo database path for a data directory.
pub(crate) fn store_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("memos.db")
}

/// Opens the memo store under the given data directory.
pub(crate) fn open_store(data_dir: &Path) -> Result<SqliteStore> {
    let db_path = store_db_path(data_dir);
    SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open memo store at {}", db_path.display()))
}

/// Builds the AI suggester from the session credential, if one is
/// configured.
pub(crate) fn suggester_for(session: &Session, config: &Config) -> Option<OpenAiSuggester> {
    let api_key = session.api_key()?;
    let suggester = OpenAiSuggester::new(api_key);
    Some(match config.model() {
        Some(model) => suggester.with_model(model),
        None => suggester,
    })
}

/// Generates shell completions on stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "memox", &mut std::io::stdout());
    Ok(())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_str("a very long title", 8), "a very …");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("日本語のメモ", 6), "日本語のメモ");
        assert_eq!(truncate_str("日本語のメモです", 6), "日本語のメ…");
    }

    #[test]
    fn store_db_path_is_under_data_dir() {
        assert_eq!(
            store_db_path(Path::new("/data")),
            PathBuf::from("/data/memos.db")
        );
    }
}
