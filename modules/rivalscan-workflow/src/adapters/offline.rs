//! Deterministic offline implementations of the collaborator ports.
//!
//! Used by the CLI when API credentials are missing, and by tests. Same
//! traits, no network, stable output; sample reports are labeled as such.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use rivalscan_core::{
    MarketData, NameExtractor, PageExtractor, PageInfo, ReportWriter, SearchHit, WebSearcher,
};

/// How many leading whitespace tokens the heuristic extractor keeps.
const TOKEN_LIMIT: usize = 10;

/// Canned search results keyed by a substring of the query.
const SAMPLE_RESULTS: [(&str, [(&str, &str, &str); 3]); 3] = [
    (
        "tesla",
        [
            (
                "BMW - Luxury Electric Vehicles",
                "https://www.bmw.com",
                "BMW offers premium electric vehicles competing with Tesla",
            ),
            (
                "Mercedes-Benz Electric Cars",
                "https://www.mercedes-benz.com",
                "Mercedes-Benz EQS and electric vehicle lineup",
            ),
            (
                "Audi e-tron Electric Vehicles",
                "https://www.audi.com",
                "Audi's electric vehicle technology and models",
            ),
        ],
    ),
    (
        "apple",
        [
            (
                "Samsung Galaxy Smartphones",
                "https://www.samsung.com",
                "Samsung Galaxy series competing with iPhone",
            ),
            (
                "Google Pixel Phones",
                "https://store.google.com",
                "Google Pixel smartphones with advanced AI features",
            ),
            (
                "Microsoft Surface Devices",
                "https://www.microsoft.com",
                "Microsoft Surface laptops and tablets",
            ),
        ],
    ),
    (
        "microsoft",
        [
            (
                "Google Workspace",
                "https://workspace.google.com",
                "Google's productivity suite competing with Microsoft Office",
            ),
            (
                "Apple Business Solutions",
                "https://www.apple.com/business",
                "Apple's enterprise and business solutions",
            ),
            (
                "Amazon Web Services",
                "https://aws.amazon.com",
                "AWS cloud services competing with Microsoft Azure",
            ),
        ],
    ),
];

/// Sample search: canned tables for a few well-known companies, generic
/// placeholder results otherwise.
pub struct SampleSearcher;

#[async_trait]
impl WebSearcher for SampleSearcher {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchHit>> {
        debug!(query, "sample search");
        let query_lower = query.to_lowercase();

        let hits: Vec<SearchHit> = SAMPLE_RESULTS
            .iter()
            .find(|(key, _)| query_lower.contains(key))
            .map(|(_, rows)| {
                rows.iter()
                    .map(|(title, url, snippet)| SearchHit {
                        url: url.to_string(),
                        title: title.to_string(),
                        snippet: snippet.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_else(|| {
                (1..=3)
                    .map(|i| SearchHit {
                        url: format!("https://example.com/competitor{i}"),
                        title: format!("Competitor Analysis for {query}"),
                        snippet: format!("Sample market data for {query}"),
                    })
                    .collect()
            });

        Ok(hits.into_iter().take(max_results as usize).collect())
    }
}

/// Sample extraction: a deterministic page derived from the URL alone.
pub struct SamplePageExtractor;

#[async_trait]
impl PageExtractor for SamplePageExtractor {
    async fn extract(&self, url: &str) -> Result<PageInfo> {
        Ok(PageInfo {
            website: url.to_string(),
            title: format!("Sample page for {url}"),
            description: format!(
                "Sample description for {url} covering the market segment, \
                 notable rivals, customer sentiment, and recent performance."
            ),
        })
    }
}

/// Heuristic fallback extractor: the first few whitespace tokens of the
/// text stand in for brand names. Crude, but credential-free.
pub struct TokenNameExtractor;

#[async_trait]
impl NameExtractor for TokenNameExtractor {
    async fn extract_names(&self, page_text: &str) -> Result<Vec<String>> {
        Ok(page_text
            .split_whitespace()
            .take(TOKEN_LIMIT)
            .map(String::from)
            .collect())
    }
}

/// Templated report clearly labeled as a sample.
pub struct SampleReportWriter;

#[async_trait]
impl ReportWriter for SampleReportWriter {
    async fn generate(
        &self,
        company_name: &str,
        company_data: &PageInfo,
        external_data: &MarketData,
    ) -> Result<String> {
        Ok(format!(
            "# Sample Competitor Analysis: {company_name}\n\
             \n\
             *This is a sample report — no LLM credential was configured.*\n\
             \n\
             ## Company Overview\n\
             Website: {website}\n\
             Title: {title}\n\
             {description}\n\
             \n\
             ## Market Insights\n\
             {insights}\n\
             \n\
             ## Key Takeaways\n\
             Configure OPENAI_API_KEY to generate a full analysis covering \
             strengths and weaknesses, market position, USP, online presence, \
             marketing strategy, products and services, review sentiment, \
             financial data, and third-party evaluation.",
            website = company_data.website,
            title = company_data.title,
            description = company_data.description,
            insights = external_data.description,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_search_returns_canned_competitors() {
        let hits = SampleSearcher
            .search("top tesla brands", 3)
            .await
            .unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].url, "https://www.bmw.com");
    }

    #[tokio::test]
    async fn sample_search_respects_the_result_limit() {
        let hits = SampleSearcher.search("top tesla brands", 1).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn unknown_queries_get_generic_results() {
        let hits = SampleSearcher
            .search("top widgets brands", 3)
            .await
            .unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits[0].url.starts_with("https://example.com/"));
    }

    #[tokio::test]
    async fn sample_pages_are_deterministic_and_non_empty() {
        let first = SamplePageExtractor.extract("https://www.bmw.com").await.unwrap();
        let second = SamplePageExtractor.extract("https://www.bmw.com").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.website, "https://www.bmw.com");
        assert!(!first.description.is_empty());
    }

    #[tokio::test]
    async fn token_extractor_takes_the_first_ten_tokens() {
        let text = "one two three four five six seven eight nine ten eleven";
        let names = TokenNameExtractor.extract_names(text).await.unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "one");
        assert_eq!(names[9], "ten");
    }

    #[tokio::test]
    async fn sample_report_is_labeled_and_names_the_company() {
        let report = SampleReportWriter
            .generate("Acme", &PageInfo::default(), &MarketData::default())
            .await
            .unwrap();
        assert!(report.contains("Acme"));
        assert!(report.contains("sample report"));
    }
}
