use thiserror::Error;

/// Failures raised while checking a sequence of actions against a problem.
/// Not finding a plan is not an error, see
/// [`SearchResult::Unsolvable`](crate::search::SearchResult::Unsolvable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("action {action} at step {step} is not applicable in state {state}")]
    IllegalAction {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {0}")]
    GoalNotReached(String),
}
