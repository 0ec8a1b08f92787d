//! Prompt templates for the two LLM-backed operations.

use crate::types::{MarketData, PageInfo};

/// Prompt for pulling competitor brand names out of scraped page text.
/// The model is told to return bare names, one per line; the caller runs
/// the response through `clean_competitor_names`.
pub fn name_extraction(page_text: &str) -> String {
    format!(
        "Extract and list company names from the following text:\n\
         {page_text}\n\
         Only return company names, no extra text, symbols, separators, \
         special characters, or numbers.\n\
         Remove any duplicates and irrelevant names.\n\
         Remove any name that is not related to product brands.\n\
         Remove any name that is not a company or brand."
    )
}

/// Prompt for the final competitor-analysis report.
pub fn analysis_report(
    company_name: &str,
    company_data: &PageInfo,
    external_data: &MarketData,
) -> String {
    format!(
        "Analyze the following competitor:\n\
         \n\
         Company Name: {company_name}\n\
         Website: {website}\n\
         Title: {title}\n\
         \n\
         Description:\n\
         {description}\n\
         \n\
         Additional Market Insights:\n\
         {insights}\n\
         \n\
         Provide an in-depth competitor analysis, including:\n\
         - Company Overview\n\
         - Strengths & Weaknesses\n\
         - Market Position\n\
         - Unique Selling Proposition (USP)\n\
         - Online Presence & Branding\n\
         - Marketing & Advertising Strategy\n\
         - Key Products & Services\n\
         - Customer Review Summary & Sentiment\n\
         - Market and Financial Data\n\
         - Third-Party Evaluation\n\
         - Key Takeaways\n\
         \n\
         Please ensure the report is detailed, accurate, and well-structured.\n\
         Provide actionable insights and recommendations for the user.\n\
         Provide references and citations where necessary.",
        website = company_data.website,
        title = company_data.title,
        description = company_data.description,
        insights = external_data.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_embeds_all_inputs() {
        let company = PageInfo {
            website: "https://acme.com".into(),
            title: "Acme Inc".into(),
            description: "We make anvils.".into(),
        };
        let market = MarketData {
            description: "Customers love the anvils.".into(),
        };
        let prompt = analysis_report("Acme", &company, &market);

        assert!(prompt.contains("Company Name: Acme"));
        assert!(prompt.contains("Website: https://acme.com"));
        assert!(prompt.contains("We make anvils."));
        assert!(prompt.contains("Customers love the anvils."));
        assert!(prompt.contains("Key Takeaways"));
    }
}
