//! Run state, the closed stage set, and the per-stage outcome variants.
//!
//! `WorkflowState` is the single record threaded through a run. Stages never
//! mutate it directly: they return a `StageOutcome` and `apply` is the one
//! place where outcomes become state, so which fields a stage may touch is
//! fixed by its outcome variant.

use serde::Serialize;

use rivalscan_core::{MarketData, PageInfo};

/// Location sentinel meaning "no geographic scope".
pub const GLOBAL_LOCATION: &str = "global";

/// The closed set of stages plus the two terminal control tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    InputClassifier,
    CompetitorSearch,
    CompetitorSelection,
    WebsiteAnalysis,
    DataCollection,
    AnalysisGeneration,
    Error,
    End,
}

/// What a stage produced. Each variant carries exactly the fields that
/// stage is allowed to set; routing is implied by the variant.
#[derive(Debug, Clone)]
pub enum StageOutcome {
    /// Input classified; `true` routes to direct website analysis.
    Classified { is_website: bool },
    /// Discovery finished (possibly with zero names — that is not an error).
    CompetitorsFound {
        search_urls: Vec<String>,
        competitor_names: Vec<String>,
    },
    /// The caller's chosen competitor resolved to its official website.
    CompetitorResolved { name: String, website: String },
    /// Website input passes through as its own analysis target.
    WebsiteReady { url: String },
    /// Company and market data gathered (either may be empty).
    DataCollected {
        company_data: PageInfo,
        external_data: MarketData,
    },
    /// Final report generated; the run completes normally.
    ReportReady { report: String },
    /// Unrecoverable condition; routes to the terminal error stage.
    Failed { message: String },
    /// The error stage ran; the run completes with the recorded error.
    Halted,
}

/// The shared data record for one workflow run.
///
/// Created once per invocation with explicit defaults, updated only via
/// `apply`, returned to the caller at run end.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowState {
    // Input parameters
    pub company_name_or_website: String,
    pub location: String,
    pub selected_competitor: Option<String>,

    // Intermediate data
    pub is_website_input: bool,
    pub search_urls: Vec<String>,
    pub competitor_names: Vec<String>,
    pub target_company: String,
    pub company_website: Option<String>,

    // Collected data
    pub company_data: PageInfo,
    pub external_data: MarketData,

    // Output
    pub analysis_report: String,
    pub error_message: Option<String>,

    // Workflow control
    pub next_step: Option<Stage>,
    pub workflow_completed: bool,
}

impl WorkflowState {
    pub fn new(
        company_name_or_website: &str,
        location: &str,
        selected_competitor: Option<&str>,
    ) -> Self {
        Self {
            company_name_or_website: company_name_or_website.to_string(),
            location: location.to_string(),
            selected_competitor: selected_competitor.map(String::from),
            is_website_input: false,
            search_urls: Vec::new(),
            competitor_names: Vec::new(),
            target_company: String::new(),
            company_website: None,
            company_data: PageInfo::default(),
            external_data: MarketData::default(),
            analysis_report: String::new(),
            error_message: None,
            next_step: Some(Stage::InputClassifier),
            workflow_completed: false,
        }
    }

    /// The state transition: fold one stage outcome into the state.
    pub fn apply(&mut self, outcome: StageOutcome) {
        match outcome {
            StageOutcome::Classified { is_website } => {
                self.is_website_input = is_website;
                self.target_company = self.company_name_or_website.clone();
                self.next_step = Some(if is_website {
                    Stage::WebsiteAnalysis
                } else {
                    Stage::CompetitorSearch
                });
            }
            StageOutcome::CompetitorsFound {
                search_urls,
                competitor_names,
            } => {
                self.search_urls = search_urls;
                self.competitor_names = competitor_names;
                self.next_step = Some(Stage::CompetitorSelection);
            }
            StageOutcome::CompetitorResolved { name, website } => {
                self.target_company = name;
                self.company_website = Some(website);
                self.next_step = Some(Stage::DataCollection);
            }
            StageOutcome::WebsiteReady { url } => {
                self.target_company = url.clone();
                self.company_website = Some(url);
                self.next_step = Some(Stage::DataCollection);
            }
            StageOutcome::DataCollected {
                company_data,
                external_data,
            } => {
                self.company_data = company_data;
                self.external_data = external_data;
                self.next_step = Some(Stage::AnalysisGeneration);
            }
            StageOutcome::ReportReady { report } => {
                self.analysis_report = report;
                self.workflow_completed = true;
                self.next_step = Some(Stage::End);
            }
            StageOutcome::Failed { message } => {
                self.error_message = Some(message);
                self.next_step = Some(Stage::Error);
            }
            StageOutcome::Halted => {
                self.workflow_completed = true;
                self.next_step = Some(Stage::End);
            }
        }
    }
}
