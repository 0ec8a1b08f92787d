//! The routing decision between stages.

use crate::state::{Stage, WorkflowState};

/// Pure routing function consulted by the engine after every stage.
///
/// A completed run always routes to `End`; otherwise the stage named by the
/// state runs next, and a state with no next stage routes to `Error` rather
/// than stalling. Stages never invoke each other directly.
pub fn should_continue(state: &WorkflowState) -> Stage {
    if state.workflow_completed {
        return Stage::End;
    }
    state.next_step.unwrap_or(Stage::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GLOBAL_LOCATION;

    #[test]
    fn completed_state_always_ends() {
        let mut state = WorkflowState::new("Acme", GLOBAL_LOCATION, None);
        state.workflow_completed = true;
        state.next_step = Some(Stage::DataCollection);
        assert_eq!(should_continue(&state), Stage::End);
    }

    #[test]
    fn next_step_is_followed_when_running() {
        let mut state = WorkflowState::new("Acme", GLOBAL_LOCATION, None);
        state.next_step = Some(Stage::CompetitorSearch);
        assert_eq!(should_continue(&state), Stage::CompetitorSearch);
    }

    #[test]
    fn missing_next_step_routes_to_error() {
        let mut state = WorkflowState::new("Acme", GLOBAL_LOCATION, None);
        state.next_step = None;
        assert_eq!(should_continue(&state), Stage::Error);
    }
}
