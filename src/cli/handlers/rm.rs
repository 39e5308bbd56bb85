//! Delete command handler.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

use super::open_store;
use super::resolve::{ResolveResult, print_ambiguous_memos, resolve_memo};
use crate::cli::RmArgs;
use crate::list::MemoListView;
use crate::notify::Notification;
use crate::session::Session;

pub fn handle_rm(args: &RmArgs, data_dir: &Path, session: &Session) -> Result<()> {
    let mut store = open_store(data_dir)?;

    let memo = match resolve_memo(&store, session, &args.memo)? {
        ResolveResult::Unique(memo) => memo,
        ResolveResult::Ambiguous(memos) => {
            print_ambiguous_memos(&args.memo, &memos);
            bail!("ambiguous memo identifier");
        }
        ResolveResult::NotFound => bail!("memo not found: '{}'", args.memo),
    };

    if !args.yes && !confirm(&format!("Delete '{}' [{}]?", memo.title(), memo.id().prefix()))? {
        println!("Aborted.");
        return Ok(());
    }

    let mut view = MemoListView::load(&store, session)?;
    view.delete(&mut store, session, memo.id())
        .with_context(|| format!("failed to delete memo {}", memo.id().prefix()))?;

    Notification::success("Deleted!").emit();
    println!("Deleted: {} [{}]", memo.title(), memo.id().prefix());
    Ok(())
}

/// Asks a yes/no question on stdout, defaulting to no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
