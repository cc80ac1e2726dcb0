use crate::cell::Cell;
use crate::mark::Mark;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const SIDE: usize = 3;
pub const SIZE: usize = SIDE * SIDE;

/// A 3x3 board in row-major order. Boards are values: playing a mark
/// produces a new board and leaves the old one untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; SIZE],
}

impl Board {
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; SIZE] {
        &self.cells
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some_and(|cell| !cell.is_empty())
    }

    /// Returns a copy of this board with `mark` at `index`, or `None` when
    /// the index is off the board or the cell is taken.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let Some(Cell::Empty) = self.get(index) else {
            return None;
        };
        let mut next = *self;
        next.cells[index] = Cell::Marked(mark);
        Some(next)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks_exact(SIDE) {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
