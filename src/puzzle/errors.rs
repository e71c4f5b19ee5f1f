use crate::puzzle::Move;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("a board needs a square number of at least 4 cells, got {0}")]
    InvalidSize(usize),
    #[error("tiles must be a permutation of 0..{expected}, found {found} more than once or out of range")]
    InvalidTiles { expected: usize, found: usize },
    #[error("the blank cannot move {0} from this position")]
    IllegalMove(Move),
    #[error("unknown move {0:?}, expected one of up, down, left, right")]
    UnknownMove(String),
}
