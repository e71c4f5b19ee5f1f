use crate::puzzle::{Move, PuzzleError};
use itertools::Itertools;
use std::fmt::{self, Display};

/// A board of the sliding-tile puzzle. Tiles are stored row-major, `0` is the
/// blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileState {
    width: usize,
    tiles: Box<[u8]>,
    blank: usize,
}

impl TileState {
    pub fn new(tiles: Vec<u8>) -> Result<Self, PuzzleError> {
        let cells = tiles.len();
        let width = (2..=16)
            .find(|width| width * width == cells)
            .ok_or(PuzzleError::InvalidSize(cells))?;

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let index = tile as usize;
            if index >= cells || seen[index] {
                return Err(PuzzleError::InvalidTiles {
                    expected: cells,
                    found: index,
                });
            }
            seen[index] = true;
        }

        // A permutation of 0..cells always contains the blank
        let blank = tiles.iter().position(|&tile| tile == 0).unwrap_or_default();
        Ok(Self {
            width,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The solved board: `1..width²` row-major, blank bottom-right.
    pub fn goal(width: usize) -> Result<Self, PuzzleError> {
        let cells = width * width;
        if !(2..=16).contains(&width) {
            return Err(PuzzleError::InvalidSize(cells));
        }
        let tiles = (1..cells).chain(std::iter::once(0));
        Self::new(tiles.map(|tile| tile as u8).collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.width + col]
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.width, self.blank % self.width)
    }

    /// Row and column `tile` occupies in the solved board.
    pub fn goal_position(&self, tile: u8) -> (usize, usize) {
        let index = match tile {
            0 => self.tiles.len() - 1,
            tile => tile as usize - 1,
        };
        (index / self.width, index % self.width)
    }

    /// Every tile except the blank with its current row and column.
    pub fn placed_tiles(&self) -> impl Iterator<Item = (u8, usize, usize)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile != 0)
            .map(|(index, &tile)| (tile, index / self.width, index % self.width))
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(index, &tile)| tile as usize == index + 1)
    }

    /// The moves that keep the blank on the board, in the order
    /// up, down, left, right.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.target(mv).is_some())
            .collect()
    }

    /// The board after sliding the blank in direction `mv`.
    pub fn result(&self, mv: Move) -> Result<Self, PuzzleError> {
        let target = self.target(mv).ok_or(PuzzleError::IllegalMove(mv))?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Ok(Self {
            width: self.width,
            tiles,
            blank: target,
        })
    }

    fn target(&self, mv: Move) -> Option<usize> {
        let (row, col) = self.blank_position();
        let (d_row, d_col) = mv.offset();
        let row = row.checked_add_signed(d_row).filter(|&row| row < self.width)?;
        let col = col.checked_add_signed(d_col).filter(|&col| col < self.width)?;
        Some(row * self.width + col)
    }
}

impl Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = (self.tiles.len() - 1).to_string().len();
        let rows: Vec<String> = self
            .tiles
            .chunks(self.width)
            .map(|row| {
                let cells = row.iter().map(|&tile| match tile {
                    0 => " ".repeat(cell_width),
                    tile => format!("{:>cell_width$}", tile),
                });
                format!("| {} |", cells.format(" "))
            })
            .collect();
        let border = "-".repeat(rows.first().map(String::len).unwrap_or_default());
        writeln!(f, "{}", border)?;
        for row in &rows {
            writeln!(f, "{}", row)?;
        }
        write!(f, "{}", border)
    }
}
