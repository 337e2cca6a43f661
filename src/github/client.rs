use reqwest::{header, Client, Response, StatusCode, Url};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::paginator::{Paginator, MAX_PER_PAGE};
use crate::models::{GitHubRepository, GitHubUser, LanguageBytes};

pub struct GitHubClient {
    pub(crate) client: Client,
    base_url: Url,
    pub(crate) graphql_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.github_token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("devresume/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.github_api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                Error::Config(format!("Invalid GitHub API URL: {}", config.github_api_url))
            })?;

        Ok(Self {
            client,
            base_url,
            graphql_url: config.github_graphql_url.clone(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = self.endpoint(&["users", username]);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(url.clone()).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let response = ensure_success(response, url.as_str()).await?;
        Ok(response.json().await?)
    }

    /// Repositories owned by `username`, most recently updated first.
    pub async fn get_user_repos(
        &self,
        username: &str,
        max_repos: usize,
    ) -> Result<Vec<GitHubRepository>> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");
        let paginator = Paginator::new(&self.client);
        tracing::info!("Fetching repositories for: {}", username);
        paginator
            .fetch_limited(url.as_str(), MAX_PER_PAGE, max_repos)
            .await
    }

    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        let url = self.endpoint(&["repos", owner, repo, "languages"]);
        tracing::debug!("Fetching languages for: {}/{}", owner, repo);

        let response = self.client.get(url.clone()).send().await?;
        let response = ensure_success(response, url.as_str()).await?;

        Ok(response.json().await?)
    }

    /// Appends `segments` to the API base, percent-encoding each one so a
    /// username can never smuggle in `/`, `?` or `#`.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Turns a non-2xx response into `Error::GitHubApi`, keeping the body for context.
pub(crate) async fn ensure_success(response: Response, url: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("GitHub returned {} for {}", status, url);
    Err(Error::GitHubApi(format!(
        "Request to {} failed: {} - {}",
        url, status, body
    )))
}
