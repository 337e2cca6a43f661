use crate::models::{MergedPullRequest, OrgContribution, PullRequestNode};

/// Groups merged pull requests by repository owner, skipping the user's own
/// repositories. Owners keep the order they were first seen in, and at most
/// `org_limit` of them are returned.
pub fn group_org_contributions(
    username: &str,
    nodes: Vec<PullRequestNode>,
    org_limit: usize,
) -> Vec<OrgContribution> {
    let mut orgs: Vec<OrgContribution> = Vec::new();

    for node in nodes {
        let owner = &node.repository.owner;
        if owner.login.eq_ignore_ascii_case(username) {
            continue;
        }

        let idx = match orgs.iter().position(|o| o.org_login == owner.login) {
            Some(idx) => idx,
            None => {
                orgs.push(OrgContribution {
                    org_login: owner.login.clone(),
                    org_name: owner
                        .name
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| owner.login.clone()),
                    org_avatar: owner.avatar_url.clone(),
                    org_url: owner.url.clone(),
                    org_description: owner.description.clone(),
                    prs: Vec::new(),
                });
                orgs.len() - 1
            }
        };

        orgs[idx].prs.push(MergedPullRequest::from(node));
    }

    orgs.truncate(org_limit);
    orgs
}
