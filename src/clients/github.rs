// github.rs
use crate::clients::RepoLister;
use crate::errors::ListError;
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Repo {
    name: String,
}

pub struct GitHubClient {
    client: Client,
    organization: String,
}

impl GitHubClient {
    pub fn new(client: Client, organization: impl Into<String>) -> Self {
        Self {
            client,
            organization: organization.into(),
        }
    }

    fn repos_url(&self) -> String {
        format!(
            "https://api.github.com/users/{}/repos?per_page=1000",
            self.organization
        )
    }
}

impl RepoLister for GitHubClient {
    fn list_repos(&self) -> Result<Vec<String>, ListError> {
        let url = self.repos_url();
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(ListError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ListError::Http { status, url });
        }

        let repos: Vec<Repo> = resp.json().map_err(ListError::Decode)?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }
}
