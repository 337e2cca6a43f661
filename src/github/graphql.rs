use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::github::client::{ensure_success, GitHubClient};
use crate::models::{ContributionCalendar, PullRequestNode};

pub const CONTRIBUTION_CALENDAR_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            color
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

pub const MERGED_PULL_REQUESTS_QUERY: &str = r#"
query($login: String!, $prLimit: Int!) {
  user(login: $login) {
    pullRequests(first: $prLimit, states: MERGED, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        title
        url
        mergedAt
        repository {
          nameWithOwner
          name
          description
          owner {
            login
            avatarUrl
            url
            ... on Organization {
              name
              description
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<UserData<T>>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct UserData<T> {
    user: Option<T>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsUser {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestsUser {
    pull_requests: PullRequestConnection,
}

#[derive(Deserialize)]
struct PullRequestConnection {
    #[serde(default)]
    nodes: Vec<Option<PullRequestNode>>,
}

impl GitHubClient {
    pub async fn get_contribution_calendar(&self, username: &str) -> Result<ContributionCalendar> {
        tracing::info!("Fetching contribution calendar for: {}", username);
        let user: ContributionsUser = self
            .query_user(
                CONTRIBUTION_CALENDAR_QUERY,
                json!({ "login": username }),
                username,
            )
            .await?;

        Ok(user.contributions_collection.contribution_calendar)
    }

    /// The user's most recent merged pull requests, newest first.
    pub async fn get_merged_pull_requests(
        &self,
        username: &str,
        pr_limit: u32,
    ) -> Result<Vec<PullRequestNode>> {
        tracing::info!("Fetching merged pull requests for: {}", username);
        let user: PullRequestsUser = self
            .query_user(
                MERGED_PULL_REQUESTS_QUERY,
                json!({ "login": username, "prLimit": pr_limit }),
                username,
            )
            .await?;

        Ok(user.pull_requests.nodes.into_iter().flatten().collect())
    }

    async fn query_user<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        username: &str,
    ) -> Result<T> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(&self.graphql_url)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response, &self.graphql_url).await?;

        let body: GraphQlResponse<T> = response.json().await?;
        match body.data {
            Some(UserData { user: Some(user) }) => Ok(user),
            Some(UserData { user: None }) => Err(Error::UserNotFound(username.to_string())),
            None => {
                let messages: Vec<_> = body.errors.into_iter().map(|e| e.message).collect();
                Err(Error::GraphQl(if messages.is_empty() {
                    "response contained no data".to_string()
                } else {
                    messages.join("; ")
                }))
            }
        }
    }
}
