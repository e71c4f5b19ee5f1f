//! Uniform cost search

use crate::search::{
    search_engines::{best_first::best_first_search, SearchEngine, SearchOutcome},
    SearchProblem, ZeroHeuristic,
};

/// Uniform cost search: best-first search on accumulated cost alone.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(&mut self, problem: &P) -> SearchOutcome<P::Action> {
        best_first_search(problem, &mut ZeroHeuristic::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, Cost, SearchResult};
    use crate::test_utils::*;

    #[test]
    fn ucs_finds_cheapest_plan() {
        let problem = diamond_graph();
        let outcome = UCS::new().search(&problem);
        let plan = outcome.result.plan().unwrap();
        assert_eq!(plan.steps(), &[(0, 2), (2, 3)]);
        assert_eq!(validate(&problem, plan), Ok(Cost::from(3.)));
    }

    #[test]
    fn ucs_lowers_priority_of_queued_state() {
        // 3 is first queued at cost 11 through 1, then lowered to 3 through 2
        let outcome = UCS::new().search(&diamond_graph());
        assert_eq!(outcome.statistics.decreased_nodes(), 1);
        assert_eq!(outcome.statistics.expanded_nodes(), 4);
        assert_eq!(outcome.statistics.max_frontier_size(), 2);
    }

    #[test]
    fn ucs_prefers_many_cheap_steps() {
        let problem = ladder_graph();
        let outcome = UCS::new().search(&problem);
        let plan = outcome.result.plan().unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(validate(&problem, plan), Ok(Cost::from(4.)));
    }

    #[test]
    fn ucs_reports_unsolvable() {
        let outcome = UCS::new().search(&dead_end_graph());
        assert_eq!(outcome.result, SearchResult::Unsolvable);
        assert_eq!(outcome.statistics.expanded_nodes(), 3);
    }
}
