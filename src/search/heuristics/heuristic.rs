use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Whatever context the estimate needs (goal layout, board size, ...) is
/// captured when the heuristic is constructed; evaluation only sees the state.
/// Best-first search stays optimal only if the estimate is admissible, which
/// is the implementor's responsibility.
pub trait Heuristic<S>: Debug {
    fn evaluate(&mut self, state: &S) -> HeuristicValue;
}

impl<S, H> Heuristic<S> for Box<H>
where
    H: Heuristic<S> + ?Sized,
{
    fn evaluate(&mut self, state: &S) -> HeuristicValue {
        self.as_mut().evaluate(state)
    }
}
