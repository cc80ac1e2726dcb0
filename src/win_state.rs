use crate::board::Board;
use crate::mark::Mark;

/// Three board indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Checked in this order; the first complete line wins.
pub const LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line held entirely by one mark.
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cells = board.cells();
        cells[a].mark().is_some() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WinState {
    #[default]
    Ongoing,
    Won { mark: Mark, line: Line },
}

impl WinState {
    pub fn of(board: &Board) -> Self {
        let Some(line) = winning_line(board) else {
            return Self::Ongoing;
        };
        match board.cells()[line[0]].mark() {
            Some(mark) => Self::Won { mark, line },
            None => Self::Ongoing,
        }
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Ongoing => None,
            Self::Won { mark, .. } => Some(mark),
        }
    }

    pub fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}
