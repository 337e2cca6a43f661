use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub serves at most 100 items per REST page and per GraphQL `first:`.
pub const MAX_REPOS_LIMIT: usize = 100;
pub const MAX_PR_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub github_api_url: String,
    pub github_graphql_url: String,
    pub max_repos: usize,
    pub top_repos: usize,
    pub top_languages: usize,
    pub pr_limit: u32,
    pub org_limit: usize,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = resolve_token(
            env::var("GITHUB_TOKEN").ok(),
            env::var("GITHUB_API_TOKEN").ok(),
        )
        .ok_or_else(|| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let github_api_url = env::var("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let github_graphql_url = env::var("GITHUB_GRAPHQL_URL")
            .unwrap_or_else(|_| format!("{}/graphql", github_api_url));

        Ok(Self {
            github_token,
            github_api_url,
            github_graphql_url,
            max_repos: parse_var("MAX_REPOS", 100usize).min(MAX_REPOS_LIMIT),
            top_repos: parse_var("TOP_REPOS", 20),
            top_languages: parse_var("TOP_LANGUAGES", 5),
            pr_limit: parse_var("PR_LIMIT", 10u32).min(MAX_PR_LIMIT),
            org_limit: parse_var("ORG_LIMIT", 5),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 30),
        })
    }

    /// Configuration pointing at the public GitHub API with default limits.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            github_token: token.into(),
            github_api_url: DEFAULT_API_URL.to_string(),
            github_graphql_url: format!("{}/graphql", DEFAULT_API_URL),
            max_repos: 100,
            top_repos: 20,
            top_languages: 5,
            pr_limit: 10,
            org_limit: 5,
            request_timeout_secs: 30,
        }
    }
}

/// `GITHUB_TOKEN` wins unless it is blank, then the legacy `GITHUB_API_TOKEN`.
fn resolve_token(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    let non_empty = |v: &String| !v.trim().is_empty();
    primary.filter(non_empty).or_else(|| legacy.filter(non_empty))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    parse_or(env::var(name).ok().as_deref(), default)
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_repos: usize,
    pub top_repos: usize,
    pub top_languages: usize,
    pub pr_limit: u32,
    pub org_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_repos: 100,
            top_repos: 20,
            top_languages: 5,
            pr_limit: 10,
            org_limit: 5,
        }
    }
}

impl PipelineConfig {
    /// Clamps the fetch sizes to what GitHub will serve in one request.
    pub fn capped(mut self) -> Self {
        self.max_repos = self.max_repos.min(MAX_REPOS_LIMIT);
        self.pr_limit = self.pr_limit.min(MAX_PR_LIMIT);
        self
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_repos: config.max_repos,
            top_repos: config.top_repos,
            top_languages: config.top_languages,
            pr_limit: config.pr_limit,
            org_limit: config.org_limit,
        }
        .capped()
    }
}
