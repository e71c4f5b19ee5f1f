//! The graph search skeleton shared by the engines that ignore costs. The
//! frontier alone decides the exploration order.

use crate::search::{
    open_lists::OpenList,
    search_engines::{SearchNode, SearchOutcome, SearchResult, SearchStatistics},
    SearchProblem,
};
use std::collections::HashSet;
use tracing::{debug, info};

pub(super) fn uninformed_search<P, L>(problem: &P, mut open_list: L) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    L: OpenList<SearchNode<P::State, P::Action>>,
{
    let mut statistics = SearchStatistics::new();
    let mut visited = HashSet::new();
    open_list.push(SearchNode::new_root(problem.start_state()));

    while !open_list.is_empty() {
        statistics.record_frontier_size(open_list.len());
        let Some(node) = open_list.pop() else {
            break;
        };
        statistics.increment_expanded_nodes();

        if problem.is_goal(node.get_state()) {
            let plan = node.get_path().to_plan();
            info!(plan_length = plan.len(), "goal reached");
            return SearchOutcome::finish(SearchResult::Success(plan), statistics);
        }

        // States are only marked when expanded, so duplicates can sit in the
        // frontier until the first copy is popped.
        if !visited.insert(node.get_state().clone()) {
            debug!(state = ?node.get_state(), "skipping already expanded state");
            statistics.increment_pruned_nodes();
            continue;
        }

        for successor in problem.successors(node.get_state()) {
            if visited.contains(&successor.state) {
                continue;
            }
            statistics.increment_generated_nodes();
            open_list.push(node.child(successor));
        }
    }

    info!("frontier exhausted without reaching a goal");
    SearchOutcome::finish(SearchResult::Unsolvable, statistics)
}
