use crate::puzzle::{Move, Scrambler, TilePuzzle, TileState};
use crate::search::{replay, Cost, Heuristic, HeuristicValue, SearchError, SearchProblem, Successor};
use std::collections::HashMap;

/// A small explicit graph with weighted edges. Actions are the `(from, to)`
/// pairs of the edges taken.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    start: u32,
    goals: Vec<u32>,
    edges: Vec<(u32, u32, f64)>,
}

impl GraphProblem {
    pub fn new(start: u32, goals: Vec<u32>, edges: Vec<(u32, u32, f64)>) -> Self {
        Self {
            start,
            goals,
            edges,
        }
    }
}

impl SearchProblem for GraphProblem {
    type State = u32;
    type Action = (u32, u32);

    fn start_state(&self) -> u32 {
        self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &u32) -> Vec<Successor<u32, (u32, u32)>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, cost)| Successor::new(to, (from, to), cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[(u32, u32)]) -> Result<Cost, SearchError> {
        replay(self, actions).map(|(_, cost)| cost)
    }
}

/// Heuristic values looked up from a table, zero for states not listed.
#[derive(Debug, Clone)]
pub struct TableHeuristic {
    values: HashMap<u32, f64>,
}

impl Heuristic<u32> for TableHeuristic {
    fn evaluate(&mut self, state: &u32) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or_default().into()
    }
}

/// 0 reaches the goal 3 through 1 (cost 1 + 10) or through 2 (cost 2 + 1).
pub fn diamond_graph() -> GraphProblem {
    GraphProblem::new(
        0,
        vec![3],
        vec![(0, 1, 1.), (0, 2, 2.), (1, 3, 10.), (2, 3, 1.)],
    )
}

/// The diamond with no goal at all.
pub fn diamond_without_goal() -> GraphProblem {
    GraphProblem::new(
        0,
        vec![],
        vec![(0, 1, 1.), (0, 2, 2.), (1, 3, 10.), (2, 3, 1.)],
    )
}

/// Two leaves and a goal that nothing leads to.
pub fn dead_end_graph() -> GraphProblem {
    GraphProblem::new(0, vec![9], vec![(0, 1, 1.), (0, 2, 1.)])
}

/// A chain 0 → 1 → 2 → 3 → 4 of unit steps, an expensive shortcut 0 → 4 and a
/// dead-end branch 0 → 5 → 6 → 7 → 8 of unit steps. The goal is 4.
pub fn ladder_graph() -> GraphProblem {
    GraphProblem::new(
        0,
        vec![4],
        vec![
            (0, 1, 1.),
            (0, 4, 10.),
            (0, 5, 1.),
            (1, 2, 1.),
            (2, 3, 1.),
            (3, 4, 1.),
            (5, 6, 1.),
            (6, 7, 1.),
            (7, 8, 1.),
        ],
    )
}

/// Exact remaining cost along the chain of [`ladder_graph`], and a large
/// estimate on the dead-end branch, which cannot reach the goal at all.
pub fn ladder_distance() -> TableHeuristic {
    let mut values: HashMap<u32, f64> = (0..=4).map(|state| (state, 4. - state as f64)).collect();
    values.extend((5..=8).map(|state| (state, 100.)));
    TableHeuristic { values }
}

pub fn board(tiles: &[u8]) -> TileState {
    TileState::new(tiles.to_vec()).unwrap()
}

pub fn goal_board(width: usize) -> TileState {
    TileState::goal(width).unwrap()
}

/// The goal board after sliding the blank once in direction `mv`.
pub fn one_move_from_goal(width: usize, mv: Move) -> TileState {
    goal_board(width).result(mv).unwrap()
}

pub fn scrambled_board(width: usize, moves: usize, seed: u64) -> TileState {
    Scrambler::new(Some(seed)).scramble(width, moves).unwrap()
}

pub fn scrambled_puzzle(width: usize, moves: usize, seed: u64) -> TilePuzzle {
    TilePuzzle::new(scrambled_board(width, moves, seed))
}
