//! Show command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::open_store;
use super::resolve::{ResolveResult, print_ambiguous_memos, resolve_memo};
use crate::cli::ShowArgs;
use crate::session::Session;
use crate::suggest::strip_markup;

pub fn handle_show(args: &ShowArgs, data_dir: &Path, session: &Session) -> Result<()> {
    let store = open_store(data_dir)?;

    match resolve_memo(&store, session, &args.memo)? {
        ResolveResult::Unique(memo) => {
            println!("# {}", memo.title());
            println!();

            println!(
                "ID: {}  Created: {}  Updated: {}",
                memo.id().prefix(),
                memo.created_at().format("%Y-%m-%d"),
                memo.updated_at().format("%Y-%m-%d")
            );

            if !memo.tags().is_empty() {
                let tags: Vec<_> = memo.tags().iter().map(|t| t.text()).collect();
                println!("Tags: {}", tags.join(" "));
            }

            let body = strip_markup(memo.content());
            if !body.is_empty() {
                println!();
                println!("{}", body);
            }

            Ok(())
        }
        ResolveResult::Ambiguous(memos) => {
            print_ambiguous_memos(&args.memo, &memos);
            bail!("ambiguous memo identifier");
        }
        ResolveResult::NotFound => {
            bail!("memo not found: '{}'", args.memo);
        }
    }
}
