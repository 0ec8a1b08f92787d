//! HTTP client for the Serper search API (google.serper.dev).

pub mod error;

pub use error::{Result, SerperError};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

const SERPER_API_URL: &str = "https://google.serper.dev/search";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

pub struct SerperClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl SerperClient {
    pub fn new(api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            client,
            base_url: SERPER_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Run a search query, returning at most `num` organic results.
    pub async fn search(&self, query: &str, num: u32) -> Result<Vec<OrganicResult>> {
        debug!(query, num, "Serper search");

        let request = SearchRequest { q: query, num };

        let resp = self
            .client
            .post(&self.base_url)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = resp.json().await?;
        Ok(body.organic.into_iter().take(num as usize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_organic_results() {
        let json = r#"{
            "searchParameters": {"q": "top tesla brands", "num": 3},
            "organic": [
                {"title": "BMW", "link": "https://www.bmw.com", "snippet": "Luxury EVs", "position": 1},
                {"title": "Audi", "link": "https://www.audi.com", "position": 2}
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.organic.len(), 2);
        assert_eq!(resp.organic[0].link, "https://www.bmw.com");
        assert_eq!(resp.organic[0].snippet, "Luxury EVs");
        // Missing snippet defaults to empty rather than failing the parse.
        assert_eq!(resp.organic[1].snippet, "");
    }

    #[test]
    fn response_without_organic_block_parses_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.organic.is_empty());
    }
}
