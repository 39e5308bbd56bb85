//! memox - personal memos with hashtags and AI tag suggestions

pub mod cli;
pub mod domain;
pub mod editor;
pub mod list;
pub mod notify;
pub mod session;
pub mod store;
pub mod suggest;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_list, handle_new, handle_rm, handle_show,
        handle_suggest,
    },
};
use session::{Session, UserId};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());
    let verbose = cli.verbose > 0;

    let mut session = Session::new(UserId::new(config.user(cli.user.as_ref())));
    if let Some(api_key) = config.api_key() {
        session = session.with_api_key(api_key);
    }

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir, &session, &config),
        Command::List(args) => handle_list(args, &data_dir, &session, verbose),
        Command::Show(args) => handle_show(args, &data_dir, &session),
        Command::Edit(args) => handle_edit(args, &data_dir, &session, &config),
        Command::Rm(args) => handle_rm(args, &data_dir, &session),
        Command::Suggest(args) => handle_suggest(args, &data_dir, &session, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
