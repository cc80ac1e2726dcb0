use crate::board::SIZE;
use crate::win_state::WinState;

/// Background color of a board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    White,
    Yellow,
}

pub type Highlights = [Highlight; SIZE];

pub const PLAIN: Highlights = [Highlight::White; SIZE];

/// Highlights for a new snapshot: a copy of `previous` with the winning
/// line, if any, recolored.
pub fn carry_forward(previous: &Highlights, win_state: WinState) -> Highlights {
    let mut next = *previous;
    if let WinState::Won { line, .. } = win_state {
        for i in line {
            next[i] = Highlight::Yellow;
        }
    }
    next
}
