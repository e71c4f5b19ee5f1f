//! Depth first search

use crate::search::{
    open_lists::Stack,
    search_engines::{uninformed::uninformed_search, SearchEngine, SearchOutcome},
    SearchProblem,
};

/// Depth first graph search. Successors are pushed in the order the problem
/// lists them, so the last one listed is explored first.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(&mut self, problem: &P) -> SearchOutcome<P::Action> {
        uninformed_search(problem, Stack::new())
    }
}
