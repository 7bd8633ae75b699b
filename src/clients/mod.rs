mod github;
mod morph;
mod slack;

pub use github::GitHubClient;
pub use morph::MorphClient;
pub use slack::SlackNotifier;

use crate::domain::history::HistoryRecord;
use crate::errors::{FetchError, ListError, NotifyError};
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("morph_report/", env!("CARGO_PKG_VERSION"));

/// Lists the repositories that might be scrapers, in API order.
pub trait RepoLister {
    fn list_repos(&self) -> Result<Vec<String>, ListError>;
}

/// Runs a read-only SQL query against one scraper's published database.
pub trait HistoryFetcher {
    fn fetch_history(&self, repo: &str, sql: &str) -> Result<Vec<HistoryRecord>, FetchError>;
}

/// Delivers a single chat message.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// One blocking client shared by every remote API.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(60))
        .build()
}
