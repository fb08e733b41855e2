// src/db.rs

use crate::error::{JotterError, Result};
use crate::models::{Entry, DATE_FORMAT};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The database file path: `JOTTER_DB` when set, otherwise
/// `~/.config/jotter/jotter.db`.
pub fn default_db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("JOTTER_DB") {
        return Ok(PathBuf::from(path));
    }
    let home_dir = dirs::home_dir().ok_or(JotterError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/jotter/jotter.db"))
}

/// Handle to the journal database. Opened once at startup and passed by
/// reference into the command handlers.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens the database at `path`, creating the file, its parent directory
    /// and the schema when absent.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!("opening journal database at {}", path.display());
        let conn = Connection::open(path)?;
        let store = Store { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory database for tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Store { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Creates the entries table if it does not exist. Runs once per
    /// process, before any other operation. AUTOINCREMENT keeps deleted
    /// ids from ever being handed out again.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                date TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date DESC);",
        )?;
        Ok(())
    }

    /// Inserts an already-validated entry and returns it with its fresh id
    /// and creation timestamp. Input is never re-validated here.
    pub fn create(&self, title: &str, date: NaiveDate, content: &str) -> Result<Entry> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO entries (title, date, content, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                title,
                date.format(DATE_FORMAT).to_string(),
                content,
                created_at.to_rfc3339()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("created entry #{}", id);
        Ok(Entry {
            id,
            title: title.to_string(),
            date,
            content: content.to_string(),
            created_at,
        })
    }

    /// Fetches a single entry by id.
    pub fn get(&self, id: i64) -> Result<Entry> {
        self.conn
            .query_row(
                "SELECT id, title, date, content, created_at FROM entries WHERE id = ?1",
                [id],
                entry_from_row,
            )
            .optional()?
            .ok_or(JotterError::EntryNotFound(id))
    }

    /// All entries, most recent date first; entries sharing a date come back
    /// highest id first. The listing shows entries in exactly this order.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, date, content, created_at FROM entries
             ORDER BY date DESC, id DESC",
        )?;
        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Replaces title, date and content of an existing entry in place.
    /// `id` and `created_at` are left untouched; an unknown id reports
    /// `EntryNotFound` instead of creating a record.
    pub fn update(&self, id: i64, title: &str, date: NaiveDate, content: &str) -> Result<Entry> {
        let count = self.conn.execute(
            "UPDATE entries SET title = ?1, date = ?2, content = ?3 WHERE id = ?4",
            params![title, date.format(DATE_FORMAT).to_string(), content, id],
        )?;
        if count == 0 {
            return Err(JotterError::EntryNotFound(id));
        }
        debug!("updated entry #{}", id);
        self.get(id)
    }

    /// Removes an entry. Deleting an id that does not exist reports
    /// `EntryNotFound` rather than succeeding silently.
    pub fn delete(&self, id: i64) -> Result<()> {
        let count = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", [id])?;
        if count == 0 {
            return Err(JotterError::EntryNotFound(id));
        }
        debug!("deleted entry #{}", id);
        Ok(())
    }
}

fn entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    let date_str: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let created_str: String = row.get(4)?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        date,
        content: row.get(3)?,
        created_at,
    })
}
