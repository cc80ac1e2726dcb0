use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// A player's mark. X always moves first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    pub fn next(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The mark to play after `position` moves have been made.
    pub fn at_position(position: usize) -> Self {
        if position % 2 == 0 { Self::X } else { Self::O }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
