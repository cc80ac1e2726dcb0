use crate::board::Board;
use crate::highlight::Highlights;

/// One row of the move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDescriptor {
    /// History position this row jumps to.
    pub position: usize,
    pub label: String,
    /// Last row picked from the list.
    pub bold: bool,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub board: Board,
    pub highlights: Highlights,
    /// In presentation order.
    pub moves: Vec<MoveDescriptor>,
    pub status: String,
    pub winner: bool,
    pub descending: bool,
}
