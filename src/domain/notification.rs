// src/domain/notification.rs

use chrono::NaiveDateTime;

/// Something a human should look at, posted to Slack after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The scraper's history has exactly one snapshot.
    NewScraper { scraper: String, entity: String },
    /// The latest snapshot differs from the one before it.
    NewContentHash {
        scraper: String,
        entity: String,
        at: NaiveDateTime,
    },
}

impl Notification {
    /// Renders the chat text, linking to the scraper under `organization` on morph.io.
    pub fn text(&self, organization: &str) -> String {
        match self {
            Notification::NewScraper { scraper, entity } => format!(
                "New scraper found: <{}> ({entity})",
                scraper_url(organization, scraper)
            ),
            Notification::NewContentHash {
                scraper,
                entity,
                at,
            } => format!(
                "New content hash for scraper <{}> ({entity}) at {at} - check your import script",
                scraper_url(organization, scraper)
            ),
        }
    }
}

fn scraper_url(organization: &str, scraper: &str) -> String {
    format!("https://morph.io/{organization}/{scraper}/")
}
