// config.rs
use crate::domain::history::EntityKind;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_ORGANIZATION: &str = "wdiv-scrapers";
pub const DEFAULT_IGNORE_LIST: [&str; 2] = ["dc-base-scrapers", "dc-meta-scraper"];

/// Polls the organisation's morph.io scrapers and reports on their history.
#[derive(Parser, Debug)]
#[command(name = "morph_report")]
#[command(version)]
pub struct Settings {
    /// morph.io API key used for history queries
    #[arg(long, env = "MORPH_MORPH_API_KEY", hide_env_values = true)]
    pub morph_api_key: Option<String>,

    /// Slack incoming webhook that receives notifications
    #[arg(long, env = "MORPH_SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub slack_webhook_url: Option<String>,

    /// GitHub user / morph.io owner that hosts the scrapers
    #[arg(long, env = "MORPH_ORGANIZATION", default_value = DEFAULT_ORGANIZATION)]
    pub organization: String,

    /// SQLite file the report table is written to
    #[arg(long, env = "MORPH_DATABASE", default_value = "data.sqlite")]
    pub database: String,

    /// Seconds to wait after every history query
    #[arg(long, default_value_t = 2)]
    pub delay_secs: u64,

    /// Repository names that are not scrapers
    #[arg(long = "ignore", value_name = "NAME", default_values_t = DEFAULT_IGNORE_LIST.map(String::from))]
    pub ignore: Vec<String>,

    /// Store the report but log notifications instead of posting them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the stored report and exit without polling
    #[arg(long)]
    pub show: bool,

    /// Log filter, e.g. `info` or `morph_report=debug` (RUST_LOG wins if set)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            ignore: self.ignore.clone(),
            pacing: Pacing::new(Duration::from_secs(self.delay_secs)),
            ..ReportConfig::default()
        }
    }
}

/// A history query for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    pub entity: EntityKind,
    pub sql: String,
}

impl EntityQuery {
    pub fn history(entity: EntityKind) -> Self {
        let sql = format!(
            "select timestamp,content_hash,council_id from 'history' WHERE `table`='{}' ORDER BY timestamp;",
            entity.as_str()
        );
        Self { entity, sql }
    }
}

/// Called once after every history fetch, whatever its outcome.
pub trait Pacer {
    fn pause(&self);
}

/// Flat delay applied after every history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for Pacing {
    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Everything the report builder needs besides its clients.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Queried in this order for every scraper.
    pub entities: Vec<EntityQuery>,
    pub ignore: Vec<String>,
    pub pacing: Pacing,
}

impl ReportConfig {
    pub fn is_ignored(&self, repo: &str) -> bool {
        self.ignore.iter().any(|name| name == repo)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            entities: vec![
                EntityQuery::history(EntityKind::Stations),
                EntityQuery::history(EntityKind::Districts),
            ],
            ignore: DEFAULT_IGNORE_LIST.map(String::from).to_vec(),
            pacing: Pacing::new(Duration::from_secs(2)),
        }
    }
}
