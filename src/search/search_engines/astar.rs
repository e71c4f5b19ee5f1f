//! A* search

use crate::search::{
    search_engines::{best_first::best_first_search, SearchEngine, SearchOutcome},
    Heuristic, SearchProblem,
};

/// A* search: best-first search on accumulated cost plus the heuristic
/// estimate of the remaining cost.
#[derive(Debug)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P, H> SearchEngine<P> for AStar<H>
where
    P: SearchProblem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> SearchOutcome<P::Action> {
        best_first_search(problem, &mut self.heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::UCS, validate, Cost, ZeroHeuristic};
    use crate::test_utils::*;

    #[test]
    fn astar_with_zero_heuristic_is_ucs() {
        let problem = ladder_graph();
        let astar = AStar::new(ZeroHeuristic::new()).search(&problem);
        let ucs = UCS::new().search(&problem);
        assert_eq!(astar.result, ucs.result);
        assert_eq!(
            astar.statistics.expanded_nodes(),
            ucs.statistics.expanded_nodes()
        );
    }

    #[test]
    fn astar_finds_cheapest_plan_with_admissible_heuristic() {
        let problem = ladder_graph();
        let outcome = AStar::new(ladder_distance()).search(&problem);
        let plan = outcome.result.plan().unwrap();
        assert_eq!(validate(&problem, plan), Ok(Cost::from(4.)));
    }

    #[test]
    fn astar_expands_fewer_nodes_than_ucs() {
        let problem = ladder_graph();
        let astar = AStar::new(ladder_distance()).search(&problem);
        let ucs = UCS::new().search(&problem);
        assert!(astar.statistics.expanded_nodes() < ucs.statistics.expanded_nodes());
        assert!(astar.statistics.evaluated_nodes() > 0);
    }
}
