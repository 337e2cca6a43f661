use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::ensure_success;

/// Largest `per_page` GitHub accepts on list endpoints.
pub const MAX_PER_PAGE: usize = 100;

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Walks `page=1,2,...` until an empty or short page, or until `max_items`
    /// have been collected. The result never exceeds `max_items`.
    pub async fn fetch_limited<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: usize,
        max_items: usize,
    ) -> Result<Vec<T>> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let mut all_items = Vec::new();
        let mut page = 1;

        while all_items.len() < max_items {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;
            let response = ensure_success(response, &url).await?;

            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items);

            if items_count < per_page {
                break;
            }

            page += 1;
        }

        all_items.truncate(max_items);
        Ok(all_items)
    }
}
