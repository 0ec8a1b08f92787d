//! Shared data types passed between the workflow and its collaborators.

use serde::{Deserialize, Serialize};

/// One ranked web search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// Key attributes scraped from a company's website.
///
/// An unreachable or empty page yields the default (all fields empty)
/// rather than an error — a bad URL contributes nothing, never an abort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub website: String,
    pub title: String,
    pub description: String,
}

impl PageInfo {
    pub fn is_empty(&self) -> bool {
        self.website.is_empty() && self.title.is_empty() && self.description.is_empty()
    }
}

/// Aggregated market/review text gathered from external sub-queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub description: String,
}
