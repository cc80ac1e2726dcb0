use crate::mark::Mark;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Empty => '.',
            Self::Marked(mark) => mark.as_char(),
        };
        f.write_char(c)
    }
}
