// src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod db;
mod error;
mod models;
mod validate;

use cli::{Cli, Commands};
use commands::{Feedback, FeedbackKind};
use db::Store;
use error::Result;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init => Ok(render(commands::handle_init()?)),
        Commands::New {
            title,
            date,
            message,
        } => {
            let store = open_store()?;
            Ok(render(commands::handle_new(&store, title, date, message)?))
        }
        Commands::List => {
            let store = open_store()?;
            commands::handle_list(&store)?;
            Ok(0)
        }
        Commands::Show { id } => {
            let store = open_store()?;
            commands::handle_show(&store, id)?;
            Ok(0)
        }
        Commands::Edit {
            id,
            title,
            date,
            message,
        } => {
            let store = open_store()?;
            Ok(render(commands::handle_edit(&store, id, title, date, message)?))
        }
        Commands::Delete { id } => {
            let store = open_store()?;
            Ok(render(commands::handle_delete(&store, id)?))
        }
    }
}

/// The store is constructed once here, before any operation runs, and owns
/// the connection for the rest of the process.
fn open_store() -> Result<Store> {
    Store::open(&db::default_db_path()?)
}

fn render(feedback: Feedback) -> i32 {
    match feedback.kind {
        FeedbackKind::Success => {
            println!("✓ {}", feedback.message);
            0
        }
        FeedbackKind::Error => {
            eprintln!("{}", feedback.message);
            1
        }
    }
}
