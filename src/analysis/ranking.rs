use std::collections::HashMap;

use crate::models::{GitHubRepository, LanguageBytes, LanguageStat};

/// Drops forks and keeps the `limit` most-starred repositories. Ties keep their
/// upstream order (most recently updated first).
pub fn rank_repositories(repos: &[GitHubRepository], limit: usize) -> Vec<GitHubRepository> {
    let mut ranked: Vec<GitHubRepository> = repos.iter().filter(|r| !r.fork).cloned().collect();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked.truncate(limit);
    ranked
}

/// Running byte totals per language across the ranked repositories.
#[derive(Debug, Default)]
pub struct LanguageTally {
    bytes: HashMap<String, u64>,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, languages: &LanguageBytes) {
        for (name, bytes) in languages {
            *self.bytes.entry(name.clone()).or_insert(0) += bytes;
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes.values().sum()
    }

    pub fn languages_used(&self) -> usize {
        self.bytes.len()
    }

    /// The `limit` largest languages with their share of all tallied bytes.
    pub fn top_shares(&self, limit: usize) -> Vec<LanguageStat> {
        let mut sorted: Vec<(&String, &u64)> = self.bytes.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        sorted.truncate(limit);

        let total = self.total_bytes();
        if total == 0 {
            return sorted
                .into_iter()
                .map(|(name, _)| LanguageStat {
                    name: name.clone(),
                    percentage: 0,
                })
                .collect();
        }

        let exact: Vec<f64> = sorted
            .iter()
            .map(|(_, bytes)| **bytes as f64 / total as f64 * 100.0)
            .collect();
        let mut rounded: Vec<u32> = exact.iter().map(|e| e.round_ties_even() as u32).collect();

        // Rounding up several entries can push the sum past 100; take the excess
        // back from the entries that were rounded up the most.
        let mut sum: u32 = rounded.iter().sum();
        while sum > 100 {
            let Some(idx) = (0..rounded.len())
                .filter(|&i| rounded[i] > 0)
                .max_by(|&i, &j| {
                    (rounded[i] as f64 - exact[i]).total_cmp(&(rounded[j] as f64 - exact[j]))
                })
            else {
                break;
            };
            rounded[idx] -= 1;
            sum -= 1;
        }

        sorted
            .into_iter()
            .zip(rounded)
            .map(|((name, _), percentage)| LanguageStat {
                name: name.clone(),
                percentage: percentage.min(100) as u8,
            })
            .collect()
    }
}
