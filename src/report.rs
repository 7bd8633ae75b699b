// report.rs
use crate::clients::{HistoryFetcher, RepoLister};
use crate::config::{EntityQuery, Pacer, ReportConfig};
use crate::domain::history::{HistoryRecord, SummaryRecord};
use crate::domain::notification::Notification;
use crate::domain::summary::summarize;
use crate::errors::{FetchError, ReportError};
use log::{debug, info};

/// The output of one report run. Nothing is carried over between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportRun {
    pub records: Vec<SummaryRecord>,
    pub notifications: Vec<Notification>,
}

pub struct ReportBuilder<'a, L, F> {
    lister: &'a L,
    fetcher: &'a F,
    config: &'a ReportConfig,
    pacer: &'a dyn Pacer,
}

impl<'a, L: RepoLister, F: HistoryFetcher> ReportBuilder<'a, L, F> {
    pub fn new(lister: &'a L, fetcher: &'a F, config: &'a ReportConfig) -> Self {
        Self {
            lister,
            fetcher,
            config,
            pacer: &config.pacing,
        }
    }

    /// Replaces the configured pacing, e.g. to observe pauses.
    pub fn with_pacer(mut self, pacer: &'a dyn Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Has any of the data we scrape changed recently? Is any of it stale?
    ///
    /// Scrapers without history for an entity are skipped. Any other failure
    /// aborts the run and nothing is returned.
    pub fn build(&self) -> Result<ReportRun, ReportError> {
        let mut run = ReportRun::default();

        let repos = self.lister.list_repos()?;
        for repo in repos.iter().filter(|repo| !self.config.is_ignored(repo)) {
            info!("Scraper: {repo}");
            for query in &self.config.entities {
                let fetched = self.fetcher.fetch_history(repo, &query.sql);
                self.pacer.pause();
                self.report_entity(&mut run, repo, query, fetched)?;
            }
        }

        info!(
            "Report complete: {} records, {} notifications",
            run.records.len(),
            run.notifications.len()
        );
        Ok(run)
    }

    fn report_entity(
        &self,
        run: &mut ReportRun,
        repo: &str,
        query: &EntityQuery,
        fetched: Result<Vec<HistoryRecord>, FetchError>,
    ) -> Result<(), ReportError> {
        let entity = query.entity.as_str();
        let history = match fetched {
            Ok(history) => history,
            Err(FetchError::NotFound { status, .. }) => {
                debug!("{repo}: no {entity} history (HTTP {status}), skipping");
                return Ok(());
            }
            Err(source) => {
                return Err(ReportError::Fetch {
                    repo: repo.to_string(),
                    entity,
                    source,
                })
            }
        };

        let summary = summarize(&history, repo, query.entity).map_err(|source| {
            ReportError::Timestamp {
                repo: repo.to_string(),
                entity,
                source,
            }
        })?;

        match summary {
            Some(summary) => {
                debug!(
                    "{repo}: {entity} changed {} times, last at {}",
                    summary.record.changes, summary.record.last_changed
                );
                run.records.push(summary.record);
                run.notifications.extend(summary.notifications);
            }
            None => debug!("{repo}: {entity} history is empty, skipping"),
        }
        Ok(())
    }
}
