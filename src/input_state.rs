use crate::action::Action;
use crate::util::Cursor;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Board,
    Moves,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

#[derive(Default, Debug)]
pub struct InputState {
    pub cursor: Cursor,
    /// Row in the move list as presented, not a history position.
    pub list_cursor: usize,
    pub focus: Focus,
    pub action: Option<Action>,
}
