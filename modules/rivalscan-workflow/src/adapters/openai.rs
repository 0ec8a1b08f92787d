//! OpenAI-backed name extraction and report generation.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use ai_client::OpenAiClient;
use rivalscan_core::{prompts, MarketData, NameExtractor, PageInfo, ReportWriter};

const EXTRACTION_PREAMBLE: &str = "You are a helpful assistant extracting competitor names.";
const ANALYST_PREAMBLE: &str =
    "You are a business analyst. Generate a competitor analysis report.";

/// Pulls brand names out of page text via a chat completion, one name per
/// response line. Output is raw; the search stage cleans it.
pub struct LlmNameExtractor {
    client: Arc<OpenAiClient>,
    model: String,
}

impl LlmNameExtractor {
    pub fn new(client: Arc<OpenAiClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl NameExtractor for LlmNameExtractor {
    async fn extract_names(&self, page_text: &str) -> Result<Vec<String>> {
        let prompt = prompts::name_extraction(page_text);
        let text = self
            .client
            .complete(&self.model, EXTRACTION_PREAMBLE, &prompt, None)
            .await?;

        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        debug!(count = names.len(), "names extracted");
        Ok(names)
    }
}

/// Generates the analysis report via a chat completion.
pub struct LlmReportWriter {
    client: Arc<OpenAiClient>,
    model: String,
}

impl LlmReportWriter {
    pub fn new(client: Arc<OpenAiClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ReportWriter for LlmReportWriter {
    async fn generate(
        &self,
        company_name: &str,
        company_data: &PageInfo,
        external_data: &MarketData,
    ) -> Result<String> {
        let prompt = prompts::analysis_report(company_name, company_data, external_data);
        self.client
            .complete(&self.model, ANALYST_PREAMBLE, &prompt, None)
            .await
    }
}
