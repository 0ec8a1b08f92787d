//! HTTP page extraction: fetch a URL, pull the title and paragraph text.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use rivalscan_core::{PageExtractor, PageInfo};

/// Cap on extracted description length, to bound downstream prompt size.
const MAX_DESCRIPTION_CHARS: usize = 2000;

pub struct HttpPageExtractor {
    client: reqwest::Client,
}

impl HttpPageExtractor {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("Mozilla/5.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpPageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageExtractor for HttpPageExtractor {
    async fn extract(&self, url: &str) -> Result<PageInfo> {
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_page(url, &html))
    }
}

fn parse_page(url: &str, html: &str) -> PageInfo {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let paragraphs: Vec<String> = document
        .select(&paragraph_selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    let description: String = paragraphs
        .join(" ")
        .chars()
        .take(MAX_DESCRIPTION_CHARS)
        .collect();

    PageInfo {
        website: url.to_string(),
        title,
        description,
    }
}
