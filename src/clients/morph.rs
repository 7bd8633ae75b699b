// morph.rs
use crate::clients::HistoryFetcher;
use crate::domain::history::HistoryRecord;
use crate::errors::FetchError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

const BASE_URL: &str = "https://api.morph.io/";

pub struct MorphClient {
    client: Client,
    organization: String,
    api_key: String,
}

impl MorphClient {
    pub fn new(client: Client, organization: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            organization: organization.into(),
            api_key: api_key.into(),
        }
    }

    /// `https://api.morph.io/<org>/<repo>/data.json?query=<sql>&key=<key>`
    pub fn query_url(&self, repo: &str, sql: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(BASE_URL)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([self.organization.as_str(), repo, "data.json"]);
        url.query_pairs_mut()
            .append_pair("query", sql)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

/// morph.io answers 404 for unknown scrapers and 400 when the SQL names a
/// table the scraper never created.
fn is_missing(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST
}

impl HistoryFetcher for MorphClient {
    fn fetch_history(&self, repo: &str, sql: &str) -> Result<Vec<HistoryRecord>, FetchError> {
        let url = self.query_url(repo, sql)?;
        let resp = self.client.get(url).send().map_err(FetchError::Request)?;

        let status = resp.status();
        if is_missing(status) {
            return Err(FetchError::NotFound {
                repo: repo.to_string(),
                status,
            });
        }
        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                repo: repo.to_string(),
            });
        }

        resp.json().map_err(FetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_encodes_sql_and_key() {
        let morph = MorphClient::new(Client::new(), "wdiv-scrapers", "s3cret");
        let url = morph
            .query_url("example-scraper", "select * from 'history';")
            .unwrap();

        assert_eq!(url.path(), "/wdiv-scrapers/example-scraper/data.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "select * from 'history';".to_string()),
                ("key".to_string(), "s3cret".to_string()),
            ]
        );
    }

    #[test]
    fn only_client_errors_for_missing_tables_count_as_missing() {
        assert!(is_missing(StatusCode::NOT_FOUND));
        assert!(is_missing(StatusCode::BAD_REQUEST));
        assert!(!is_missing(StatusCode::UNAUTHORIZED));
        assert!(!is_missing(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
