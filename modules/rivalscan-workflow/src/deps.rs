//! Immutable collaborator bundle passed to every stage.

use std::sync::Arc;

use rivalscan_core::{NameExtractor, PageExtractor, ReportWriter, WebSearcher};

/// The injected ports a workflow run depends on. Built once at startup
/// (or per test) and shared read-only across stages; the workflow itself
/// holds no other state, so one instance can serve concurrent runs.
#[derive(Clone)]
pub struct WorkflowDeps {
    pub searcher: Arc<dyn WebSearcher>,
    pub extractor: Arc<dyn PageExtractor>,
    pub names: Arc<dyn NameExtractor>,
    pub reporter: Arc<dyn ReportWriter>,
}
