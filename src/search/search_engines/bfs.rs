//! Breadth first search

use crate::search::{
    open_lists::Queue,
    search_engines::{uninformed::uninformed_search, SearchEngine, SearchOutcome},
    SearchProblem,
};

/// Breadth first graph search. Returns a plan with the fewest actions, which
/// is the cheapest plan only when every step costs the same.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(&mut self, problem: &P) -> SearchOutcome<P::Action> {
        uninformed_search(problem, Queue::new())
    }
}
