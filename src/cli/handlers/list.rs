//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{MemoListing, Output, OutputFormat};
use crate::domain::Memo;
use crate::list::{MemoListView, SearchDisplay, SortKey};
use crate::notify::Notification;
use crate::session::Session;
use crate::suggest::strip_markup;

pub fn handle_list(
    args: &ListArgs,
    data_dir: &Path,
    session: &Session,
    verbose: bool,
) -> Result<()> {
    let store = open_store(data_dir)?;

    // A failed load degrades to an empty list rather than aborting.
    let mut view = match MemoListView::load(&store, session) {
        Ok(view) => view,
        Err(err) => {
            if verbose {
                eprintln!("error: {}", err);
            }
            Notification::exception().emit();
            MemoListView::empty()
        }
    };

    if let Some(keyword) = &args.search {
        view.search(keyword);
    }

    let sort_key = SortKey::from(args.sort);
    if sort_key != SortKey::Update {
        view.sort_by(sort_key);
    }
    if args.reverse {
        view.toggle_reverse();
    }

    match args.format {
        OutputFormat::Human => print_human(&view),
        OutputFormat::Json => print_json(&view)?,
    }

    Ok(())
}

fn print_human(view: &MemoListView) {
    let memos = view.memos();

    if memos.is_empty() {
        match view.display() {
            SearchDisplay::NoResults => println!("No results found."),
            _ => println!("No memos found."),
        }
        return;
    }

    println!(
        "{:<10}  {:<30}  {:<18}  {:<26}  {:>10}",
        "ID", "Title", "Tags", "Preview", "Updated"
    );
    println!(
        "{:<10}  {:<30}  {:<18}  {:<26}  {:>10}",
        "----------",
        "------------------------------",
        "------------------",
        "--------------------------",
        "----------"
    );

    for memo in memos {
        let id_short = memo.id().prefix();
        let title = truncate_str(memo.title(), 30);
        let tags = truncate_str(&tag_line(memo), 18);
        let preview = truncate_str(&strip_markup(memo.content()), 26);
        let updated = memo.updated_at().format("%Y-%m-%d").to_string();
        println!(
            "{:<10}  {:<30}  {:<18}  {:<26}  {:>10}",
            id_short, title, tags, preview, updated
        );
    }

    println!();
    match view.display() {
        SearchDisplay::Found(count) => println!("Found {} memo(s)", count),
        _ => println!("{} memo(s)", memos.len()),
    }
}

fn print_json(view: &MemoListView) -> Result<()> {
    let listings: Vec<MemoListing> = view
        .memos()
        .iter()
        .map(|m| MemoListing {
            id: m.id().to_string(),
            title: m.title().to_string(),
            tags: m.tags().iter().map(|t| t.text().to_string()).collect(),
            created_at: m.created_at().to_rfc3339(),
            updated_at: m.updated_at().to_rfc3339(),
        })
        .collect();
    let output = Output::new(listings);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn tag_line(memo: &Memo) -> String {
    let texts: Vec<_> = memo.tags().iter().map(|t| t.text()).collect();
    texts.join(" ")
}
