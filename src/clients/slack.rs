// slack.rs
use crate::clients::Notifier;
use crate::errors::NotifyError;
use reqwest::blocking::Client;
use serde::Serialize;

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(client: Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }
}

impl Notifier for SlackNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&SlackPayload { text: message })
            .send()
            .map_err(NotifyError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(NotifyError::Http { status, body });
        }

        Ok(())
    }
}
