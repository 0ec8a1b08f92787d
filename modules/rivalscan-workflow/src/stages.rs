//! The stage functions.
//!
//! Each stage is a total function on the current state: it reads what it
//! needs, calls collaborators through the injected ports, and returns a
//! `StageOutcome`. Collaborator failures are absorbed at the call site —
//! a bad URL or API hiccup contributes nothing instead of aborting the run.
//! Only the explicit user-input conditions (missing location, missing or
//! unresolvable competitor) and a failed report produce `Failed`.

use anyhow::Result;
use futures::future::join_all;
use tracing::{error, info, warn};

use rivalscan_core::{clean_competitor_names, MarketData, PageInfo};

use crate::deps::WorkflowDeps;
use crate::state::{StageOutcome, WorkflowState, GLOBAL_LOCATION};

/// How many results discovery and market sub-queries ask for.
const DISCOVERY_RESULTS: u32 = 3;

/// Sub-query suffixes for external market data, one search each.
const MARKET_QUERIES: [&str; 4] = [
    "customer reviews",
    "market analysis",
    "financial data",
    "third party evaluation",
];

/// Classify the input as a website or a company name. Never fails.
pub fn classify(state: &WorkflowState) -> StageOutcome {
    let input = &state.company_name_or_website;
    let is_website = ["http://", "https://", "www."]
        .iter()
        .any(|prefix| input.starts_with(prefix));

    info!(
        input = input.as_str(),
        kind = if is_website { "website" } else { "company name" },
        "input classified"
    );
    StageOutcome::Classified { is_website }
}

/// Discover competitor brand names for the input company.
pub async fn competitor_search(
    state: &WorkflowState,
    deps: &WorkflowDeps,
) -> Result<StageOutcome> {
    if state.location.is_empty() {
        return Ok(StageOutcome::Failed {
            message: "Location is required for competitor search".to_string(),
        });
    }

    let query = brand_query(&state.company_name_or_website, &state.location);
    info!(query = query.as_str(), "searching for competitors");

    let hits = match deps.searcher.search(&query, DISCOVERY_RESULTS).await {
        Ok(hits) => hits,
        Err(e) => {
            warn!(error = %e, "competitor search failed, continuing with no results");
            Vec::new()
        }
    };
    let search_urls: Vec<String> = hits.into_iter().map(|h| h.url).collect();

    // Per-URL extractions are independent; ordering of the concatenated
    // name list is not relied upon downstream.
    let per_url = join_all(search_urls.iter().map(|url| names_from_url(url, deps))).await;
    let raw_names: Vec<String> = per_url.into_iter().flatten().collect();

    let competitor_names = clean_competitor_names(raw_names);
    info!(count = competitor_names.len(), "competitors found");

    Ok(StageOutcome::CompetitorsFound {
        search_urls,
        competitor_names,
    })
}

/// Resolve the caller's selected competitor to its official website.
pub async fn competitor_selection(
    state: &WorkflowState,
    deps: &WorkflowDeps,
) -> Result<StageOutcome> {
    let Some(selected) = state.selected_competitor.as_deref().filter(|s| !s.is_empty())
    else {
        return Ok(StageOutcome::Failed {
            message: "Please select a competitor from the available options".to_string(),
        });
    };

    let query = format!("{selected} official website");
    let website = match deps.searcher.search(&query, 1).await {
        Ok(hits) => hits.into_iter().next().map(|h| h.url),
        Err(e) => {
            warn!(competitor = selected, error = %e, "website lookup failed");
            None
        }
    };

    match website {
        Some(url) => {
            info!(competitor = selected, website = url.as_str(), "competitor selected");
            Ok(StageOutcome::CompetitorResolved {
                name: selected.to_string(),
                website: url,
            })
        }
        None => Ok(StageOutcome::Failed {
            message: format!("Could not find website for {selected}"),
        }),
    }
}

/// Direct website input: the URL is both target and website. Never fails.
pub fn website_analysis(state: &WorkflowState) -> StageOutcome {
    let url = state.company_name_or_website.clone();
    info!(website = url.as_str(), "website ready for analysis");
    StageOutcome::WebsiteReady { url }
}

/// Gather company data from the target's website and market data from
/// fixed external sub-queries. Inner fetch failures degrade to empty data.
pub async fn data_collection(
    state: &WorkflowState,
    deps: &WorkflowDeps,
) -> Result<StageOutcome> {
    let company_data = match state.company_website.as_deref() {
        Some(url) => match deps.extractor.extract(url).await {
            Ok(info) => info,
            Err(e) => {
                warn!(url, error = %e, "company page extraction failed");
                PageInfo::default()
            }
        },
        None => PageInfo::default(),
    };

    let external_data = collect_market_data(&state.target_company, deps).await;
    info!(
        company_page = !company_data.is_empty(),
        market_chars = external_data.description.len(),
        "data collection completed"
    );

    Ok(StageOutcome::DataCollected {
        company_data,
        external_data,
    })
}

/// Generate the final analysis report.
pub async fn analysis_generation(
    state: &WorkflowState,
    deps: &WorkflowDeps,
) -> Result<StageOutcome> {
    let result = deps
        .reporter
        .generate(&state.target_company, &state.company_data, &state.external_data)
        .await;

    match result {
        Ok(report) if !report.trim().is_empty() => {
            info!(company = state.target_company.as_str(), "analysis report generated");
            Ok(StageOutcome::ReportReady { report })
        }
        Ok(_) => Ok(StageOutcome::Failed {
            message: "Error generating analysis: the report writer returned no text"
                .to_string(),
        }),
        Err(e) => Ok(StageOutcome::Failed {
            message: format!("Error generating analysis: {e}"),
        }),
    }
}

/// Terminal error stage: log and complete. Never fails.
pub fn handle_error(state: &WorkflowState) -> StageOutcome {
    let message = state
        .error_message
        .as_deref()
        .unwrap_or("An unknown error occurred");
    error!(error = message, "workflow terminated with error");
    StageOutcome::Halted
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn brand_query(company_name: &str, location: &str) -> String {
    let location = location.trim();
    if location.is_empty() || location.eq_ignore_ascii_case(GLOBAL_LOCATION) {
        format!("top {company_name} brands")
    } else {
        format!("top {company_name} brands in {location}")
    }
}

/// Extract candidate names from one discovery URL. A failed or empty
/// extraction contributes zero names.
async fn names_from_url(url: &str, deps: &WorkflowDeps) -> Vec<String> {
    let page = match deps.extractor.extract(url).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url, error = %e, "page extraction failed");
            return Vec::new();
        }
    };
    if page.description.is_empty() {
        return Vec::new();
    }

    match deps.names.extract_names(&page.description).await {
        Ok(names) => names,
        Err(e) => {
            warn!(url, error = %e, "name extraction failed");
            Vec::new()
        }
    }
}

/// Run the fixed market sub-queries, scrape the top hit of each, and
/// concatenate the descriptions. Partial failures are skipped silently.
async fn collect_market_data(company_name: &str, deps: &WorkflowDeps) -> MarketData {
    let parts = join_all(MARKET_QUERIES.iter().map(|suffix| async move {
        let query = format!("{company_name} {suffix}");
        let hit = match deps.searcher.search(&query, DISCOVERY_RESULTS).await {
            Ok(hits) => hits.into_iter().next(),
            Err(e) => {
                warn!(query = query.as_str(), error = %e, "market sub-query failed");
                None
            }
        };
        let url = hit?.url;
        match deps.extractor.extract(&url).await {
            Ok(page) if !page.description.is_empty() => Some(page.description),
            Ok(_) => None,
            Err(e) => {
                warn!(url = url.as_str(), error = %e, "market page extraction failed");
                None
            }
        }
    }))
    .await;

    let mut description = String::new();
    for part in parts.into_iter().flatten() {
        description.push_str(&part);
        description.push('\n');
    }
    MarketData { description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_query_omits_global_and_empty_locations() {
        assert_eq!(brand_query("Tesla", "global"), "top Tesla brands");
        assert_eq!(brand_query("Tesla", "Global"), "top Tesla brands");
        assert_eq!(brand_query("Tesla", ""), "top Tesla brands");
        assert_eq!(brand_query("Tesla", "  "), "top Tesla brands");
    }

    #[test]
    fn brand_query_includes_a_real_location() {
        assert_eq!(brand_query("Tesla", "USA"), "top Tesla brands in USA");
    }

    #[test]
    fn classifier_recognizes_all_website_prefixes() {
        for input in ["http://acme.com", "https://acme.com", "www.acme.com"] {
            let state = WorkflowState::new(input, GLOBAL_LOCATION, None);
            assert!(
                matches!(classify(&state), StageOutcome::Classified { is_website: true }),
                "{input} should classify as website"
            );
        }
        let state = WorkflowState::new("Acme Corp", GLOBAL_LOCATION, None);
        assert!(matches!(
            classify(&state),
            StageOutcome::Classified { is_website: false }
        ));
    }
}
