//! The dispatch loop.

use anyhow::Result;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::deps::WorkflowDeps;
use crate::router::should_continue;
use crate::stages;
use crate::state::{Stage, StageOutcome, WorkflowState};

/// Drives the stage graph to completion: route → run stage → apply outcome,
/// until the router returns `End`.
///
/// Holds only the injected ports; every run gets a fresh state, so one
/// engine serves concurrent runs.
pub struct Workflow {
    deps: WorkflowDeps,
}

impl Workflow {
    pub fn new(deps: WorkflowDeps) -> Self {
        Self { deps }
    }

    /// Run the full workflow. Always returns a terminal state: either a
    /// populated `analysis_report` or a populated `error_message`. An
    /// unexpected stage fault is folded into the error path rather than
    /// propagated.
    pub async fn run(
        &self,
        company_name_or_website: &str,
        location: &str,
        selected_competitor: Option<&str>,
    ) -> WorkflowState {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("workflow_run", %run_id);

        async {
            info!(
                input = company_name_or_website,
                location, "starting competitor analysis"
            );

            let mut state =
                WorkflowState::new(company_name_or_website, location, selected_competitor);

            loop {
                let stage = should_continue(&state);
                if stage == Stage::End {
                    break;
                }
                let outcome = match self.dispatch(stage, &state).await {
                    Ok(outcome) => outcome,
                    Err(e) => StageOutcome::Failed {
                        message: format!("Error generating analysis: {e}"),
                    },
                };
                state.apply(outcome);
            }

            state
        }
        .instrument(span)
        .await
    }

    /// Run only classification + discovery and return the candidate names.
    /// Website inputs and empty locations yield an empty list.
    pub async fn get_competitors(&self, company_name: &str, location: &str) -> Vec<String> {
        if location.is_empty() {
            return Vec::new();
        }

        let mut state = WorkflowState::new(company_name, location, None);
        let classified = stages::classify(&state);
        state.apply(classified);

        if state.next_step != Some(Stage::CompetitorSearch) {
            return Vec::new();
        }

        match stages::competitor_search(&state, &self.deps).await {
            Ok(outcome) => {
                state.apply(outcome);
                state.competitor_names
            }
            Err(_) => Vec::new(),
        }
    }

    async fn dispatch(&self, stage: Stage, state: &WorkflowState) -> Result<StageOutcome> {
        match stage {
            Stage::InputClassifier => Ok(stages::classify(state)),
            Stage::CompetitorSearch => stages::competitor_search(state, &self.deps).await,
            Stage::CompetitorSelection => stages::competitor_selection(state, &self.deps).await,
            Stage::WebsiteAnalysis => Ok(stages::website_analysis(state)),
            Stage::DataCollection => stages::data_collection(state, &self.deps).await,
            Stage::AnalysisGeneration => stages::analysis_generation(state, &self.deps).await,
            Stage::Error => Ok(stages::handle_error(state)),
            // The loop breaks on End before dispatching; halt if it ever arrives.
            Stage::End => Ok(StageOutcome::Halted),
        }
    }
}
