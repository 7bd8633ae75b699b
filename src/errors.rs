// errors.rs
use reqwest::StatusCode;
use thiserror::Error;

/// A history timestamp that matches neither of the accepted layouts.
#[derive(Debug, Error)]
#[error("unrecognised timestamp {input:?}: {source}")]
pub struct TimestampError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Errors from the repository listing (GitHub) API.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("GitHub request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("GitHub returned HTTP {status} for {url}")]
    Http { status: StatusCode, url: String },
    #[error("GitHub response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors from the history (morph.io) API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The scraper, or its history table for this entity, does not exist.
    #[error("no history for {repo} (HTTP {status})")]
    NotFound { repo: String, status: StatusCode },
    #[error("morph.io returned HTTP {status} for {repo}")]
    Http { status: StatusCode, repo: String },
    #[error("morph.io request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("morph.io response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid morph.io url: {0}")]
    Url(#[from] url::ParseError),
}

/// Failures that abort a whole report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("listing scrapers: {0}")]
    List(#[from] ListError),
    #[error("fetching {entity} history for {repo}: {source}")]
    Fetch {
        repo: String,
        entity: &'static str,
        #[source]
        source: FetchError,
    },
    #[error("summarising {entity} history for {repo}: {source}")]
    Timestamp {
        repo: String,
        entity: &'static str,
        #[source]
        source: TimestampError,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("opening database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("database error: {0}")]
    Query(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("webhook returned HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("{failed} of {total} notifications were not delivered")]
    Undelivered { failed: usize, total: usize },
}

/// Everything `main` can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("report aborted: {0}")]
    Report(#[from] ReportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("missing configuration: {0}")]
    Config(String),
}
