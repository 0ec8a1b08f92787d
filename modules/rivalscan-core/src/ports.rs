//! Collaborator ports the workflow core depends on.
//!
//! The core only knows these traits. Production wiring injects HTTP-backed
//! implementations; tests and credential-less runs inject deterministic
//! stubs behind the same traits. The core never branches on which one it
//! was given.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{MarketData, PageInfo, SearchHit};

/// Ranked web search. Best effort: callers treat a failure as an empty
/// result set, never as a workflow abort.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchHit>>;
}

/// Fetch a URL and extract title/description text.
///
/// `description` is truncated to a bounded length (2000 chars) to bound
/// downstream prompt size.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<PageInfo>;
}

/// Pull candidate brand names out of free page text.
///
/// Backed by an LLM in production, by a token heuristic offline. Output is
/// raw — callers run it through `clean_competitor_names`.
#[async_trait]
pub trait NameExtractor: Send + Sync {
    async fn extract_names(&self, page_text: &str) -> Result<Vec<String>>;
}

/// Generate a free-text analysis report for a company from its scraped
/// data and aggregated market insights.
#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn generate(
        &self,
        company_name: &str,
        company_data: &PageInfo,
        external_data: &MarketData,
    ) -> Result<String>;
}
