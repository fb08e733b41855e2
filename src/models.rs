// src/models.rs

use chrono::{DateTime, NaiveDate, Utc};

/// Textual date form used everywhere: storage, parsing and form pre-fill.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single journal entry. `created_at` is stored as an RFC3339 string in
/// the database and is record-keeping only; listing order comes from `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
