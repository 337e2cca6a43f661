use std::sync::Arc;

use crate::analysis::org_grouper::group_org_contributions;
use crate::analysis::ranking::{rank_repositories, LanguageTally};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::GitHubSource;
use crate::models::{GitHubRepository, Profile, Repository, Resume, ResumeStats};

pub struct ResumePipeline {
    github: Arc<dyn GitHubSource>,
    config: PipelineConfig,
}

impl ResumePipeline {
    pub fn new(github: impl GitHubSource + 'static, config: PipelineConfig) -> Self {
        Self {
            github: Arc::new(github),
            config: config.capped(),
        }
    }

    /// Builds the full résumé document. Any upstream failure aborts the build.
    pub async fn build_resume(&self, username: &str) -> Result<Resume> {
        // Step 1: Fetch user profile
        tracing::info!("Fetching GitHub profile for: {}", username);
        let user = self.github.get_user(username).await?;

        // Step 2: Fetch repositories
        let all_repos = self
            .github
            .get_user_repos(username, self.config.max_repos)
            .await?;
        tracing::info!("Fetched {} repositories", all_repos.len());

        // Step 3: Rank and enrich the top repositories
        let top_repos = rank_repositories(&all_repos, self.config.top_repos);
        tracing::info!("Enriching {} top repositories", top_repos.len());

        let mut repositories = Vec::with_capacity(top_repos.len());
        let mut tally = LanguageTally::new();
        let mut total_stars = 0;
        let mut total_forks = 0;

        for repo in top_repos {
            let languages = self
                .github
                .get_repo_languages(&repo.owner.login, &repo.name)
                .await?;

            total_stars += repo.stargazers_count;
            total_forks += repo.forks_count;
            tally.add(&languages);

            repositories.push(Repository::from_github(repo, languages));
        }

        // Step 4: Language shares
        let languages = tally.top_shares(self.config.top_languages);

        let stats = ResumeStats {
            total_repos: all_repos.len(),
            total_stars,
            total_forks,
            languages_used: tally.languages_used(),
        };

        // Step 5: Contribution calendar
        let contributions = self.github.get_contribution_calendar(username).await?;
        tracing::debug!(
            "Contribution calendar covers {} days",
            contributions.days().count()
        );

        // Step 6: Cross-organization pull requests
        let pull_requests = self
            .github
            .get_merged_pull_requests(username, self.config.pr_limit)
            .await?;
        let org_contributions =
            group_org_contributions(username, pull_requests, self.config.org_limit);
        tracing::info!(
            "Found merged pull requests in {} organizations",
            org_contributions.len()
        );

        Ok(Resume {
            profile: Profile::from(user),
            repositories,
            languages,
            stats,
            contributions,
            org_contributions,
        })
    }

    /// The user's repositories, most recently updated first, without enrichment.
    pub async fn list_projects(&self, username: &str) -> Result<Vec<GitHubRepository>> {
        tracing::info!("Listing projects for: {}", username);
        self.github
            .get_user_repos(username, self.config.max_repos)
            .await
    }
}
