// src/domain/summary.rs

use crate::domain::history::{EntityKind, HistoryRecord, SummaryRecord};
use crate::domain::notification::Notification;
use crate::domain::timestamps::parse_timestamp;
use crate::errors::TimestampError;

/// A summarised history plus whatever it wants to tell Slack about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub record: SummaryRecord,
    pub notifications: Vec<Notification>,
}

/// Condenses an ordered (oldest first) history into change statistics.
///
/// Returns `Ok(None)` for an empty history: there is nothing to report yet.
/// Records are not re-sorted.
pub fn summarize(
    history: &[HistoryRecord],
    scraper: &str,
    entity: EntityKind,
) -> Result<Option<Summary>, TimestampError> {
    let (first, last) = match (history.first(), history.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(None),
    };

    let started_polling = parse_timestamp(&first.timestamp)?;
    let mut last_changed = started_polling;
    let mut last_hash = first.content_hash.as_str();
    let mut changes = 0;

    for record in &history[1..] {
        if record.content_hash != last_hash {
            last_changed = parse_timestamp(&record.timestamp)?;
            last_hash = record.content_hash.as_str();
            changes += 1;
        }
    }

    let mut notifications = Vec::new();
    if history.len() == 1 {
        notifications.push(Notification::NewScraper {
            scraper: scraper.to_string(),
            entity: entity.to_string(),
        });
    } else if history[history.len() - 2].content_hash != last.content_hash {
        notifications.push(Notification::NewContentHash {
            scraper: scraper.to_string(),
            entity: entity.to_string(),
            at: last_changed,
        });
    }

    Ok(Some(Summary {
        record: SummaryRecord {
            scraper: scraper.to_string(),
            entity: entity.to_string(),
            council_id: last.council_id.clone(),
            started_polling,
            changes,
            last_changed,
        },
        notifications,
    }))
}
