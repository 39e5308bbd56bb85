//! New memo command handler.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::path::Path;

use super::{open_store, suggester_for};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::editor::{EditorError, EditorSession};
use crate::notify::Notification;
use crate::session::Session;

pub fn handle_new(
    args: &NewArgs,
    data_dir: &Path,
    session: &Session,
    config: &Config,
) -> Result<()> {
    let mut store = open_store(data_dir)?;

    let mut editor = EditorSession::create();
    editor.set_title(&args.title);
    editor.set_content(&args.content);
    for tag in &args.tags {
        editor.add_tag(tag);
    }

    if args.suggest {
        generate_suggestions(&mut editor, session, config);
    }

    match editor.save(&mut store, session, Utc::now()) {
        Ok(id) => {
            Notification::success("Saved!").emit();
            println!("Created: {} [{}]", editor.title(), id.prefix());
            Ok(())
        }
        Err(EditorError::TitleRequired) => bail!("title cannot be empty"),
        Err(err) => Err(err).context("failed to save memo"),
    }
}

/// Runs the AI suggestion round-trip against the draft.
///
/// Suggestion failures degrade to a warning; the draft is saved either
/// way.
pub(crate) fn generate_suggestions(
    editor: &mut EditorSession,
    session: &Session,
    config: &Config,
) {
    let Some(suggester) = suggester_for(session, config) else {
        eprintln!("warning: no OpenAI API key configured; skipping tag suggestions");
        return;
    };

    match editor.generate_tags(Some(&suggester)) {
        Ok(0) => println!("No tags suggested."),
        Ok(added) => println!("Added {} suggested tag(s)", added),
        Err(err) => eprintln!("warning: tag suggestion failed: {}", err),
    }
}
