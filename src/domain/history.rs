// src/domain/history.rs

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;

/// The kinds of data each scraper may publish a history table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Stations,
    Districts,
}

impl EntityKind {
    /// Value of the `table` column in the scraper's `history` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Stations => "stations",
            EntityKind::Districts => "districts",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a scraper's `history` table, as returned by morph.io.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub content_hash: String,
    pub council_id: String,
}

/// What we know about one (scraper, entity) pair after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub scraper: String,
    pub entity: String,
    pub council_id: String,
    pub started_polling: NaiveDateTime,
    pub changes: u32,
    pub last_changed: NaiveDateTime,
}
