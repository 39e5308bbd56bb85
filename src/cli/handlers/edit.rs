//! Edit command handler.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::path::Path;

use super::new::generate_suggestions;
use super::resolve::{ResolveResult, print_ambiguous_memos, resolve_memo};
use super::open_store;
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::editor::{EditorError, EditorSession};
use crate::notify::Notification;
use crate::session::Session;

pub fn handle_edit(
    args: &EditArgs,
    data_dir: &Path,
    session: &Session,
    config: &Config,
) -> Result<()> {
    let mut store = open_store(data_dir)?;

    let memo = match resolve_memo(&store, session, &args.memo)? {
        ResolveResult::Unique(memo) => memo,
        ResolveResult::Ambiguous(memos) => {
            print_ambiguous_memos(&args.memo, &memos);
            bail!("ambiguous memo identifier");
        }
        ResolveResult::NotFound => bail!("memo not found: '{}'", args.memo),
    };

    let mut editor = EditorSession::open(&store, session, memo.id())
        .with_context(|| format!("failed to load memo {}", memo.id().prefix()))?;

    if let Some(title) = &args.title {
        editor.set_title(title);
    }
    if let Some(content) = &args.content {
        editor.set_content(content);
    }
    for tag in &args.add_tags {
        editor.add_tag(tag);
    }
    for text in &args.rm_tags {
        remove_tag_by_text(&mut editor, text)?;
    }
    if let Some(spec) = &args.move_tag {
        let (from, to) = parse_move(spec)?;
        editor.drag_tag(from, to);
    }

    if args.suggest {
        generate_suggestions(&mut editor, session, config);
    }

    match editor.save(&mut store, session, Utc::now()) {
        Ok(id) => {
            Notification::success("Saved!").emit();
            println!("Edited: {} [{}]", editor.title(), id.prefix());
            Ok(())
        }
        Err(EditorError::TitleRequired) => bail!("title cannot be empty"),
        Err(err) => Err(err).context("failed to save memo"),
    }
}

/// Removes the first tag whose text matches, with or without the leading
/// `#`.
fn remove_tag_by_text(editor: &mut EditorSession, text: &str) -> Result<()> {
    let hashed = format!("#{}", text.trim_start_matches('#'));
    let position = editor.tags().iter().position(|t| t.text() == hashed);
    match position {
        Some(index) => {
            editor.remove_tag(index);
            Ok(())
        }
        None => bail!("no such tag: '{}'", text),
    }
}

/// Parses a `FROM:TO` position pair for `--move-tag`.
fn parse_move(spec: &str) -> Result<(usize, usize)> {
    let (from, to) = spec
        .split_once(':')
        .with_context(|| format!("invalid --move-tag '{}': expected FROM:TO", spec))?;
    let from = from
        .parse()
        .with_context(|| format!("invalid --move-tag position: '{}'", from))?;
    let to = to
        .parse()
        .with_context(|| format!("invalid --move-tag position: '{}'", to))?;
    Ok((from, to))
}
