//! Competitor-research workflow orchestration.
//!
//! A fixed-graph state machine: classify input → discover competitors →
//! select one (or analyze a website directly) → collect company and market
//! data → generate a report. Stages return typed outcomes that a pure
//! transition applies to the run state; a pure router picks the next stage.
//! All external capabilities (search, scrape, LLM) are injected ports.

pub mod adapters;
pub mod deps;
pub mod engine;
pub mod router;
pub mod stages;
pub mod state;

pub use deps::WorkflowDeps;
pub use engine::Workflow;
pub use router::should_continue;
pub use state::{Stage, StageOutcome, WorkflowState};
