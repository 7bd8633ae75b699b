// app.rs
use crate::clients::{self, GitHubClient, MorphClient, Notifier, SlackNotifier};
use crate::config::Settings;
use crate::db::{self, Database};
use crate::errors::{AppError, NotifyError};
use crate::report::ReportBuilder;
use log::{info, warn};

/// Polls every scraper, replaces the stored report, then tells Slack.
///
/// If the report aborts, neither the database nor Slack is touched.
pub fn run(settings: &Settings) -> Result<(), AppError> {
    if settings.show {
        return show_report(&Database::open(&settings.database)?);
    }

    let api_key = settings.morph_api_key.as_deref().ok_or_else(|| {
        AppError::Config("MORPH_MORPH_API_KEY (or --morph-api-key) is required".to_string())
    })?;

    // Fail before polling, not after a run's worth of pacing delays.
    let webhook_url = match (&settings.slack_webhook_url, settings.dry_run) {
        (Some(url), _) => Some(url.clone()),
        (None, true) => None,
        (None, false) => {
            return Err(AppError::Config(
                "MORPH_SLACK_WEBHOOK_URL (or --slack-webhook-url) is required unless --dry-run is set"
                    .to_string(),
            ))
        }
    };

    let database = Database::open(&settings.database)?;
    let client = clients::http_client().map_err(AppError::Client)?;
    let github = GitHubClient::new(client.clone(), &settings.organization);
    let morph = MorphClient::new(client.clone(), &settings.organization, api_key);
    let config = settings.report_config();
    info!(
        "Polling {} scrapers, {:?} between queries",
        settings.organization,
        config.pacing.delay()
    );

    let run = ReportBuilder::new(&github, &morph, &config).build()?;

    let stored = db::replace_report(&database, &run.records)?;
    info!("Stored {stored} report rows in {}", settings.database);

    let messages: Vec<String> = run
        .notifications
        .iter()
        .map(|n| n.text(&settings.organization))
        .collect();

    match webhook_url {
        Some(url) if !settings.dry_run => {
            let slack = SlackNotifier::new(client, url);
            let sent = deliver_all(&slack, &messages)?;
            info!("Posted {sent} Slack messages");
        }
        _ => {
            for message in &messages {
                info!("[dry run] {message}");
            }
        }
    }

    Ok(())
}

/// Sends every message, one request each, even if some fail.
pub fn deliver_all<N: Notifier>(notifier: &N, messages: &[String]) -> Result<usize, NotifyError> {
    let mut failed = 0;
    for message in messages {
        if let Err(e) = notifier.notify(message) {
            warn!("Could not post {message:?}: {e}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(NotifyError::Undelivered {
            failed,
            total: messages.len(),
        });
    }
    Ok(messages.len())
}

fn show_report(database: &Database) -> Result<(), AppError> {
    let records = db::load_report(database)?;
    if records.is_empty() {
        println!("No report stored yet.");
        return Ok(());
    }

    println!(
        "{:<40} {:<10} {:<12} {:>7}  {:<26} {:<26}",
        "scraper", "entity", "council", "changes", "started polling", "last changed"
    );
    for r in &records {
        println!(
            "{:<40} {:<10} {:<12} {:>7}  {:<26} {:<26}",
            r.scraper,
            r.entity,
            r.council_id,
            r.changes,
            r.started_polling.to_string(),
            r.last_changed.to_string()
        );
    }
    Ok(())
}
