use anyhow::Result;
use async_trait::async_trait;
use serper_client::SerperClient;

use rivalscan_core::{SearchHit, WebSearcher};

/// Serper-backed web search.
pub struct SerperSearcher {
    client: SerperClient,
}

impl SerperSearcher {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: SerperClient::new(api_key),
        }
    }
}

#[async_trait]
impl WebSearcher for SerperSearcher {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchHit>> {
        let results = self.client.search(query, max_results).await?;
        Ok(results
            .into_iter()
            .map(|r| SearchHit {
                url: r.link,
                title: r.title,
                snippet: r.snippet,
            })
            .collect())
    }
}
