use crate::puzzle::{PuzzleError, TileState};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

/// Produces random boards by applying random legal moves to the solved board,
/// so every board it produces is solvable.
#[derive(Debug)]
pub struct Scrambler {
    rng: StdRng,
}

impl Scrambler {
    /// A seeded scrambler always produces the same sequence of boards.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn scramble(&mut self, width: usize, moves: usize) -> Result<TileState, PuzzleError> {
        let mut state = TileState::goal(width)?;
        for _ in 0..moves {
            let legal_moves = state.legal_moves();
            if let Some(&mv) = legal_moves.choose(&mut self.rng) {
                state = state.result(mv)?;
            }
        }
        debug!(width, moves, state = ?state.tiles(), "scrambled board");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::TilePuzzle;
    use crate::search::breadth_first_search;

    #[test]
    fn seeded_scrambles_repeat() {
        let first: Vec<TileState> = {
            let mut scrambler = Scrambler::new(Some(11));
            (0..5).map(|_| scrambler.scramble(4, 30).unwrap()).collect()
        };
        let mut scrambler = Scrambler::new(Some(11));
        for state in first {
            assert_eq!(scrambler.scramble(4, 30).unwrap(), state);
        }
    }

    #[test]
    fn zero_moves_is_the_goal() {
        let state = Scrambler::new(None).scramble(4, 0).unwrap();
        assert!(state.is_goal());
    }

    #[test]
    fn scrambles_are_solvable_within_the_move_count() {
        let mut scrambler = Scrambler::new(Some(5));
        for _ in 0..5 {
            let state = scrambler.scramble(3, 8).unwrap();
            let outcome = breadth_first_search(&TilePuzzle::new(state));
            let plan = outcome.result.plan().expect("scrambles are solvable");
            assert!(plan.len() <= 8);
        }
    }
}
