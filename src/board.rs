use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

/// The grid of cell kinds for one level. Every search state owns an
/// independent copy - `simulate` clones, mutates the clone and hands it to
/// the next state, so a `Board` is never shared between states.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<Cell>) -> Self {
        Board { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// `None` out of bounds.
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    /// In bounds and not a wall - the slide can enter this cell.
    pub(crate) fn is_free(&self, pos: Pos) -> bool {
        match self.grid.get(pos) {
            Some(&cell) => cell != Cell::Wall,
            None => false,
        }
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.grid[pos] = cell;
    }

    /// The current wall set as a bitset, one bit per cell in row-major
    /// order. This is the board's entire contribution to the canonical
    /// state identifier - empty cells carry no distinguishing information.
    pub(crate) fn wall_bits(&self) -> Vec<u64> {
        let cells = self.width() * self.height();
        let mut bits = vec![0u64; (cells + 63) / 64];
        for (i, &cell) in self.grid.iter().enumerate() {
            if cell == Cell::Wall {
                bits[i / 64] |= 1 << (i % 64);
            }
        }
        bits
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.grid[Pos::new(x as i32, y as i32)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn queries_and_bounds() {
        let level: Level = "3 0 0\n0 1 0\n0 0 2\n".parse().unwrap();
        let board = &level.board;

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.cell(Pos::new(0, 0)), Some(Cell::Player));
        assert_eq!(board.cell(Pos::new(1, 1)), Some(Cell::Wall));
        assert_eq!(board.cell(Pos::new(2, 2)), Some(Cell::Target));
        assert_eq!(board.cell(Pos::new(3, 0)), None);
        assert_eq!(board.cell(Pos::new(0, -1)), None);

        assert!(board.is_free(Pos::new(1, 0)));
        assert!(board.is_free(Pos::new(2, 2))); // target is enterable
        assert!(!board.is_free(Pos::new(1, 1))); // wall
        assert!(!board.is_free(Pos::new(-1, 0))); // out of bounds
    }

    #[test]
    fn formatting_round_trip() {
        let text = "3 0 0\n0 1 0\n0 0 2\n";
        let level: Level = text.parse().unwrap();
        assert_eq!(level.board.to_string(), text);
    }

    #[test]
    fn wall_bits_tracks_walls_only() {
        let level: Level = "3 0 0\n0 1 0\n0 0 2\n".parse().unwrap();
        let mut board = level.board.clone();

        // one wall at (1,1) = cell index 4
        assert_eq!(board.wall_bits(), vec![1 << 4]);

        board.set(Pos::new(0, 0), Cell::Wall);
        assert_eq!(board.wall_bits(), vec![(1 << 4) | 1]);

        // player and target never show up in the wall set
        board.set(Pos::new(2, 2), Cell::Player);
        assert_eq!(board.wall_bits(), vec![(1 << 4) | 1]);
    }
}
