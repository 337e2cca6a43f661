use async_trait::async_trait;

use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::models::{
    ContributionCalendar, GitHubRepository, GitHubUser, LanguageBytes, PullRequestNode,
};

/// Everything the résumé pipeline needs from GitHub.
#[async_trait]
pub trait GitHubSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;
    async fn get_user_repos(&self, username: &str, max_repos: usize)
        -> Result<Vec<GitHubRepository>>;
    async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes>;
    async fn get_contribution_calendar(&self, username: &str) -> Result<ContributionCalendar>;
    async fn get_merged_pull_requests(
        &self,
        username: &str,
        pr_limit: u32,
    ) -> Result<Vec<PullRequestNode>>;
}

#[async_trait]
impl GitHubSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        GitHubClient::get_user(self, username).await
    }

    async fn get_user_repos(
        &self,
        username: &str,
        max_repos: usize,
    ) -> Result<Vec<GitHubRepository>> {
        GitHubClient::get_user_repos(self, username, max_repos).await
    }

    async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        GitHubClient::get_repo_languages(self, owner, repo).await
    }

    async fn get_contribution_calendar(&self, username: &str) -> Result<ContributionCalendar> {
        GitHubClient::get_contribution_calendar(self, username).await
    }

    async fn get_merged_pull_requests(
        &self,
        username: &str,
        pr_limit: u32,
    ) -> Result<Vec<PullRequestNode>> {
        GitHubClient::get_merged_pull_requests(self, username, pr_limit).await
    }
}
