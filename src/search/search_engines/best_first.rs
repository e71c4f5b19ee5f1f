//! The graph search skeleton shared by uniform cost search and A*. Nodes are
//! ranked by accumulated cost plus a heuristic estimate, and each state keeps
//! the cheapest cost with which it has been expanded.

use crate::search::{
    open_lists::{PriorityOpenList, UpdateOutcome},
    search_engines::{SearchNode, SearchOutcome, SearchResult, SearchStatistics},
    Cost, Heuristic, SearchProblem,
};
use std::collections::HashMap;
use tracing::{debug, info};

pub(super) fn best_first_search<P, H>(problem: &P, heuristic: &mut H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let mut statistics = SearchStatistics::new();
    let mut open_list = PriorityOpenList::new();
    let mut best_costs: HashMap<P::State, Cost> = HashMap::new();

    let root_node = SearchNode::new_root(problem.start_state());
    open_list.push(root_node.get_state().clone(), root_node, Cost::from(0.));

    while !open_list.is_empty() {
        statistics.record_frontier_size(open_list.len());
        let Some((state, node, _)) = open_list.pop() else {
            break;
        };
        statistics.increment_expanded_nodes();

        if problem.is_goal(&state) {
            let plan = node.get_path().to_plan();
            info!(
                plan_length = plan.len(),
                plan_cost = node.get_cost().into_inner(),
                "goal reached"
            );
            return SearchOutcome::finish(SearchResult::Success(plan), statistics);
        }

        let g_value = node.get_cost();
        if is_dominated(&best_costs, &state, g_value) {
            debug!(state = ?state, g_value = g_value.into_inner(), "skipping dominated node");
            statistics.increment_pruned_nodes();
            continue;
        }
        best_costs.insert(state.clone(), g_value);

        for successor in problem.successors(&state) {
            let child_g = g_value + successor.cost;
            if is_dominated(&best_costs, &successor.state, child_g) {
                continue;
            }
            statistics.increment_generated_nodes();
            let h_value = heuristic.evaluate(&successor.state);
            statistics.increment_evaluated_nodes();

            let child_node = node.child(successor);
            let key = child_node.get_state().clone();
            if open_list.update(key, child_node, child_g + h_value) == UpdateOutcome::Decreased {
                statistics.increment_decreased_nodes();
            }
        }
    }

    info!("frontier exhausted without reaching a goal");
    SearchOutcome::finish(SearchResult::Unsolvable, statistics)
}

/// Whether `state` has already been expanded with a cost no greater than
/// `cost`.
fn is_dominated<S>(best_costs: &HashMap<S, Cost>, state: &S, cost: Cost) -> bool
where
    S: std::hash::Hash + Eq,
{
    best_costs.get(state).is_some_and(|&best| best <= cost)
}
