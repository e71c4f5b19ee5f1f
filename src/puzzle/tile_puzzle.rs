use crate::puzzle::{Move, TileState};
use crate::search::{replay, Cost, SearchError, SearchProblem, Successor};

/// The sliding-tile puzzle as a search problem: every move costs 1 and the
/// goal is the solved board of the same width.
#[derive(Debug, Clone)]
pub struct TilePuzzle {
    start: TileState,
}

impl TilePuzzle {
    pub fn new(start: TileState) -> Self {
        Self { start }
    }

    pub fn start(&self) -> &TileState {
        &self.start
    }
}

impl SearchProblem for TilePuzzle {
    type State = TileState;
    type Action = Move;

    fn start_state(&self) -> TileState {
        self.start.clone()
    }

    fn is_goal(&self, state: &TileState) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &TileState) -> Vec<Successor<TileState, Move>> {
        state
            .legal_moves()
            .into_iter()
            .filter_map(|mv| {
                state
                    .result(mv)
                    .ok()
                    .map(|next| Successor::new(next, mv, 1.))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Move]) -> Result<Cost, SearchError> {
        replay(self, actions).map(|(_, cost)| cost)
    }
}
