//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::list::SortKey;
use output::OutputFormat;

/// memox - personal memos with hashtags and AI tag suggestions
#[derive(Parser, Debug)]
#[command(name = "memox", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Act as a named user (overrides config file)
    #[arg(short = 'u', long, global = true)]
    pub user: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new memo
    New(NewArgs),

    /// List memos, with optional search and sorting
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a memo's contents
    Show(ShowArgs),

    /// Edit a memo's title, content, or tags
    Edit(EditArgs),

    /// Delete a memo
    Rm(RmArgs),

    /// Suggest hashtags for a memo or for ad-hoc text
    Suggest(SuggestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Sort order for the `ls` command.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortArg {
    /// Store order, most recently saved considered last
    #[default]
    Update,
    /// Title, case-insensitive
    Title,
    /// Creation date, oldest first
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Update => SortKey::Update,
            SortArg::Title => SortKey::Title,
            SortArg::Date => SortKey::Date,
        }
    }
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Memo title
    pub title: String,

    /// Memo content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Tag for the memo, without the leading '#' (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Ask the AI service to suggest additional tags before saving
    #[arg(short = 's', long)]
    pub suggest: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Keyword to search for in titles, content, and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortArg::Update)]
    pub sort: SortArg,

    /// Reverse the sort order
    #[arg(short, long)]
    pub reverse: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Memo ID prefix or title
    pub memo: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Memo ID prefix or title
    pub memo: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,

    /// Add a tag, without the leading '#' (can be specified multiple times)
    #[arg(short = 't', long = "add-tag", action = ArgAction::Append)]
    pub add_tags: Vec<String>,

    /// Remove a tag by its text (can be specified multiple times)
    #[arg(long = "rm-tag", action = ArgAction::Append)]
    pub rm_tags: Vec<String>,

    /// Move a tag between positions, as FROM:TO (zero-based)
    #[arg(long = "move-tag")]
    pub move_tag: Option<String>,

    /// Ask the AI service to suggest additional tags before saving
    #[arg(short = 's', long)]
    pub suggest: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Memo ID prefix or title
    pub memo: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `suggest` command
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Memo ID prefix or title to suggest tags for
    pub memo: Option<String>,

    /// Ad-hoc text to suggest tags for instead of a stored memo
    #[arg(long, conflicts_with = "memo")]
    pub text: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
