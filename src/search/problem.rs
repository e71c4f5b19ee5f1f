use crate::search::SearchError;
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Accumulated path cost. Step costs and heuristic values share this type so
/// that priorities can be summed and ordered without float comparisons.
pub type Cost = OrderedFloat<f64>;

/// One outgoing transition of a state: the state reached, the action taken to
/// reach it and the (non-negative) cost of that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        debug_assert!(cost >= 0., "step costs must be non-negative");
        Self {
            state,
            action,
            cost: cost.into(),
        }
    }
}

/// The contract every search engine consumes.
///
/// States are only ever cloned, compared and hashed by the engines, never
/// mutated. The order of [`SearchProblem::successors`] matters: engines keep
/// insertion order as the tie-break among equally ranked successors, so the
/// same problem always produces the same plan.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Eq + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the start state. Engines never
    /// call this; it exists so callers can check the plans they get back.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<Cost, SearchError>;
}
