use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merged pull request node from the `pullRequests` GraphQL connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    pub repository: PullRequestRepository,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRepository {
    pub name_with_owner: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: RepositoryOwnerNode,
}

/// `name` and `description` are only present when the owner is an organization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryOwnerNode {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrgContribution {
    pub org_login: String,
    pub org_name: String,
    pub org_avatar: Option<String>,
    pub org_url: Option<String>,
    pub org_description: Option<String>,
    pub prs: Vec<MergedPullRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedPullRequest {
    pub title: String,
    pub url: String,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<DateTime<Utc>>,
    pub repo: String,
    pub repo_name: String,
    pub repo_description: Option<String>,
}

impl From<PullRequestNode> for MergedPullRequest {
    fn from(node: PullRequestNode) -> Self {
        Self {
            title: node.title,
            url: node.url,
            merged_at: node.merged_at,
            repo: node.repository.name_with_owner,
            repo_name: node.repository.name,
            repo_description: node.repository.description,
        }
    }
}
