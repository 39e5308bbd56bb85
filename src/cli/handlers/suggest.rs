//! Tag suggestion command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::resolve::{ResolveResult, print_ambiguous_memos, resolve_memo};
use super::{open_store, suggester_for};
use crate::cli::SuggestArgs;
use crate::cli::config::Config;
use crate::session::Session;
use crate::suggest;

pub fn handle_suggest(
    args: &SuggestArgs,
    data_dir: &Path,
    session: &Session,
    config: &Config,
) -> Result<()> {
    let content = match (&args.memo, &args.text) {
        (_, Some(text)) => text.clone(),
        (Some(identifier), None) => {
            let store = open_store(data_dir)?;
            match resolve_memo(&store, session, identifier)? {
                ResolveResult::Unique(memo) => memo.content().to_string(),
                ResolveResult::Ambiguous(memos) => {
                    print_ambiguous_memos(identifier, &memos);
                    bail!("ambiguous memo identifier");
                }
                ResolveResult::NotFound => bail!("memo not found: '{}'", identifier),
            }
        }
        (None, None) => bail!("provide a memo identifier or --text"),
    };

    let Some(suggester) = suggester_for(session, config) else {
        bail!(
            "no OpenAI API key configured (set OPENAI_API_KEY or [openai] api_key in {})",
            Config::config_path().display()
        );
    };

    let tags = suggest::suggest_tags(&suggester, &content)?;

    if tags.is_empty() {
        println!("No suggestions.");
    } else {
        for tag in &tags {
            println!("{}", tag.text());
        }
    }

    Ok(())
}
