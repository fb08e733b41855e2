// src/commands.rs

use crate::db::{self, Store};
use crate::error::{JotterError, Result};
use crate::models::{Entry, DATE_FORMAT};
use crate::validate::{validate, Rejection};
use chrono::Local;
use std::env;
use std::io::Write;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Outcome of a mutating operation, rendered by main. This is the explicit
/// replacement for the transient status banner the original web UI flashed
/// between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    fn success(message: impl Into<String>) -> Self {
        Feedback {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Feedback {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    /// Error feedback for a rejected submission, echoing the preserved
    /// draft so the user can fix and resubmit without retyping.
    fn rejected(rejection: &Rejection) -> Self {
        let draft = rejection.draft();
        Feedback::error(format!(
            "{}\n  title:   {}\n  date:    {}\n  content: {}",
            rejection, draft.title, draft.date, draft.content
        ))
    }
}

/// Handles 'init': reports the database location, creating it when absent.
pub fn handle_init() -> Result<Feedback> {
    let path = db::default_db_path()?;
    if path.exists() {
        return Ok(Feedback::success(format!(
            "Journal already exists at: {}",
            path.display()
        )));
    }
    Store::open(&path)?;
    Ok(Feedback::success(format!(
        "Journal initialized at: {}",
        path.display()
    )))
}

/// Handles 'new': validates the submission and creates an entry.
/// A missing --date is pre-filled with today before validation; a missing
/// --message opens the editor.
pub fn handle_new(
    store: &Store,
    title: String,
    date: Option<String>,
    message: Option<String>,
) -> Result<Feedback> {
    let date_text =
        date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let content = match message {
        Some(text) => text,
        None => compose_in_editor("")?,
    };

    let valid = match validate(&title, &date_text, &content) {
        Ok(valid) => valid,
        Err(rejection) => return Ok(Feedback::rejected(&rejection)),
    };

    let entry = store.create(&valid.title, valid.date, &valid.content)?;
    Ok(Feedback::success(format!("Added entry #{}.", entry.id)))
}

/// Handles 'list': prints every entry, most recent date first.
pub fn handle_list(store: &Store) -> Result<()> {
    let entries = store.list()?;
    if entries.is_empty() {
        println!("No entries yet. Use 'jotter new' to write one.");
        return Ok(());
    }
    for entry in &entries {
        println!("{}", format_entry_line(entry));
    }
    Ok(())
}

/// Handles 'show': prints a single entry in full.
pub fn handle_show(store: &Store, id: i64) -> Result<()> {
    let entry = store.get(id)?;
    println!("{}", format_entry_line(&entry));
    println!(
        "written {}",
        entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("{}", "─".repeat(40));
    println!("{}", entry.content.trim_end());
    Ok(())
}

/// Handles 'edit': pre-fills omitted fields from the stored entry, then
/// validates and updates exactly like create. A field passed explicitly
/// blank is a missing field, not a keep-the-old-value request.
pub fn handle_edit(
    store: &Store,
    id: i64,
    title: Option<String>,
    date: Option<String>,
    message: Option<String>,
) -> Result<Feedback> {
    let existing = store.get(id)?;

    let content = match message {
        Some(text) => text,
        // Bare 'jotter edit <id>' opens the current text in the editor.
        None if title.is_none() && date.is_none() => compose_in_editor(&existing.content)?,
        None => existing.content.clone(),
    };
    let title = title.unwrap_or_else(|| existing.title.clone());
    let date_text = date.unwrap_or_else(|| existing.date.format(DATE_FORMAT).to_string());

    let valid = match validate(&title, &date_text, &content) {
        Ok(valid) => valid,
        Err(rejection) => return Ok(Feedback::rejected(&rejection)),
    };

    let entry = store.update(id, &valid.title, valid.date, &valid.content)?;
    Ok(Feedback::success(format!("Updated entry #{}.", entry.id)))
}

/// Handles 'delete': removes the entry permanently.
pub fn handle_delete(store: &Store, id: i64) -> Result<Feedback> {
    store.delete(id)?;
    Ok(Feedback::success(format!("Deleted entry #{}.", id)))
}

fn format_entry_line(entry: &Entry) -> String {
    format!(
        "[{}] {}  {}",
        entry.id,
        entry.date.format(DATE_FORMAT),
        entry.title
    )
}

/// Opens $EDITOR (fallback: vi) on a temp file seeded with `initial` and
/// returns whatever the user saved.
fn compose_in_editor(initial: &str) -> Result<String> {
    let mut temp_file = tempfile::NamedTempFile::new()?;
    if !initial.is_empty() {
        temp_file.write_all(initial.as_bytes())?;
        temp_file.flush()?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;
    if !status.success() {
        return Err(JotterError::EditorError);
    }

    // Read back via the path: some editors replace the file instead of
    // writing through the original handle.
    Ok(std::fs::read_to_string(temp_file.path())?)
}
