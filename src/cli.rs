// src/cli.rs

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "jotter - a personal journal for the command line",
    long_about = "jotter keeps a personal journal of dated text entries in a local SQLite database. Write an entry per day (or several), list and reread them, and edit or delete old ones."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initializes the journal database.
    /// The default database file is "~/.config/jotter/jotter.db"; set JOTTER_DB to move it.
    Init,

    /// Writes a new journal entry.
    /// If no message is provided via -m, the entry text opens in the default editor.
    New {
        #[arg(short, long, help = "Title of the entry")]
        title: String,
        #[arg(
            short,
            long,
            help = "Entry date in YYYY-MM-DD form (default: today)"
        )]
        date: Option<String>,
        #[arg(short, long, help = "The entry text")]
        message: Option<String>,
    },

    /// Lists all entries, most recent date first.
    List,

    /// Shows a single entry in full.
    Show {
        #[arg(help = "The numeric ID of the entry")]
        id: i64,
    },

    /// Edits an existing entry.
    /// Fields left out keep their current values; with no options at all the
    /// entry text opens in the default editor.
    Edit {
        #[arg(help = "The numeric ID of the entry to edit")]
        id: i64,
        #[arg(short, long, help = "New title")]
        title: Option<String>,
        #[arg(short, long, help = "New date in YYYY-MM-DD form")]
        date: Option<String>,
        #[arg(short, long, help = "New entry text")]
        message: Option<String>,
    },

    /// Deletes an entry permanently.
    Delete {
        #[arg(help = "The numeric ID of the entry to delete")]
        id: i64,
    },
}
