use serde::{Deserialize, Serialize};

use super::contribution::ContributionCalendar;
use super::organization::OrgContribution;
use super::repository::Repository;
use super::user::Profile;

/// The aggregated document served by `GET /user/{username}/resume/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub languages: Vec<LanguageStat>,
    pub stats: ResumeStats,
    pub contributions: ContributionCalendar,
    pub org_contributions: Vec<OrgContribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageStat {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeStats {
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub languages_used: usize,
}
