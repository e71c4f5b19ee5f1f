use crate::search::{Cost, SearchError, SearchProblem};

/// Execute `actions` from the start state of `problem`, following the
/// successor function. Returns the state reached and the accumulated cost, or
/// the first action that is not among the legal successors.
pub fn replay<P: SearchProblem>(
    problem: &P,
    actions: &[P::Action],
) -> Result<(P::State, Cost), SearchError> {
    let mut state = problem.start_state();
    let mut cost = Cost::from(0.);
    for (step, action) in actions.iter().enumerate() {
        let successor = problem
            .successors(&state)
            .into_iter()
            .find(|successor| &successor.action == action)
            .ok_or_else(|| SearchError::IllegalAction {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", state),
            })?;
        cost = cost + successor.cost;
        state = successor.state;
    }
    Ok((state, cost))
}

/// Check that `plan` is executable and ends in a goal state. Returns the cost
/// of the plan.
pub fn validate<P: SearchProblem>(problem: &P, plan: &[P::Action]) -> Result<Cost, SearchError> {
    let (state, cost) = replay(problem, plan)?;
    if !problem.is_goal(&state) {
        return Err(SearchError::GoalNotReached(format!("{:?}", state)));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn validate_good_plan_ok() {
        let problem = diamond_graph();
        assert_eq!(validate(&problem, &[(0, 2), (2, 3)]), Ok(Cost::from(3.)));
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let problem = diamond_graph();
        let result = validate(&problem, &[(0, 1), (2, 3)]);
        assert!(matches!(
            result,
            Err(SearchError::IllegalAction { step: 1, .. })
        ));
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let problem = diamond_graph();
        assert!(matches!(
            validate(&problem, &[(0, 1)]),
            Err(SearchError::GoalNotReached(_))
        ));
    }

    #[test]
    fn replay_accumulates_step_costs() {
        let problem = diamond_graph();
        let (state, cost) = replay(&problem, &[(0, 1), (1, 3)]).unwrap();
        assert_eq!(state, 3);
        assert_eq!(cost, Cost::from(11.));
    }
}
