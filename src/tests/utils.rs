use crate::clients::{HistoryFetcher, Notifier, RepoLister};
use crate::config::Pacer;
use crate::domain::history::HistoryRecord;
use crate::errors::{FetchError, ListError, NotifyError};
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;

pub fn record(timestamp: &str, content_hash: &str, council_id: &str) -> HistoryRecord {
    HistoryRecord {
        timestamp: timestamp.to_string(),
        content_hash: content_hash.to_string(),
        council_id: council_id.to_string(),
    }
}

/// `2017-03-<day>T09:00:00.000000+00:00`
pub fn stamp(day: u32) -> String {
    format!("2017-03-{day:02}T09:00:00.000000+00:00")
}

pub fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 3, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

pub struct FakeLister {
    pub repos: Vec<String>,
    pub fail: bool,
}

impl FakeLister {
    pub fn new(repos: &[&str]) -> Self {
        Self {
            repos: repos.iter().map(|r| r.to_string()).collect(),
            fail: false,
        }
    }
}

impl RepoLister for FakeLister {
    fn list_repos(&self) -> Result<Vec<String>, ListError> {
        if self.fail {
            return Err(ListError::Http {
                status: StatusCode::FORBIDDEN,
                url: "https://api.github.com/users/test/repos".to_string(),
            });
        }
        Ok(self.repos.clone())
    }
}

pub enum Canned {
    History(Vec<HistoryRecord>),
    NotFound,
    Status(StatusCode),
}

/// Answers from a table keyed by (repo, entity); anything unknown is a 404.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<(String, String), Canned>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeFetcher {
    pub fn with(mut self, repo: &str, entity: &str, canned: Canned) -> Self {
        self.responses
            .insert((repo.to_string(), entity.to_string()), canned);
        self
    }
}

impl HistoryFetcher for FakeFetcher {
    fn fetch_history(&self, repo: &str, sql: &str) -> Result<Vec<HistoryRecord>, FetchError> {
        let entity = if sql.contains("'stations'") {
            "stations"
        } else {
            "districts"
        };
        self.calls
            .borrow_mut()
            .push((repo.to_string(), entity.to_string()));

        match self.responses.get(&(repo.to_string(), entity.to_string())) {
            Some(Canned::History(history)) => Ok(history.clone()),
            Some(Canned::Status(status)) => Err(FetchError::Http {
                status: *status,
                repo: repo.to_string(),
            }),
            Some(Canned::NotFound) | None => Err(FetchError::NotFound {
                repo: repo.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<String>>,
    pub reject_containing: Option<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        if let Some(bad) = &self.reject_containing {
            if message.contains(bad.as_str()) {
                return Err(NotifyError::Http {
                    status: StatusCode::BAD_REQUEST,
                    body: "invalid_payload".to_string(),
                });
            }
        }
        self.sent.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Records how many fetches had happened each time the builder paused.
pub struct PauseLog<'a> {
    pub fetcher: &'a FakeFetcher,
    pub seen: RefCell<Vec<usize>>,
}

impl<'a> PauseLog<'a> {
    pub fn new(fetcher: &'a FakeFetcher) -> Self {
        Self {
            fetcher,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Pacer for PauseLog<'_> {
    fn pause(&self) {
        self.seen.borrow_mut().push(self.fetcher.calls.borrow().len());
    }
}
