mod astar;
mod best_first;
mod bfs;
mod dfs;
mod search_engine;
mod search_node;
mod search_statistics;
mod ucs;
mod uninformed;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult};
pub use search_node::SearchNode;
pub use search_statistics::SearchStatistics;
pub use ucs::UCS;

use crate::search::{Heuristic, SearchProblem};

/// Depth first graph search.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    DFS::new().search(problem)
}

/// Breadth first graph search. Finds a plan with the fewest actions.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    BFS::new().search(problem)
}

/// Uniform cost search. Finds a cheapest plan.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    UCS::new().search(problem)
}

/// A* search guided by `heuristic`. Finds a cheapest plan when the heuristic
/// is admissible; pass a [`ZeroHeuristic`](crate::search::ZeroHeuristic) to
/// get uniform cost search.
pub fn astar_search<P, H>(problem: &P, heuristic: H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P::State>,
{
    AStar::new(heuristic).search(problem)
}
