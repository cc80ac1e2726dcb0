use crate::board::SIDE;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Where a mark was played, 0-based. Displayed 1-based as `(row,col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / SIDE) as u8,
            col: (index % SIDE) as u8,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row + 1, self.col + 1)
    }
}
