use crate::board::Board;
use crate::highlight::{Highlights, PLAIN};
use crate::move_record::Move;
use crate::win_state::WinState;

/// One point in the game: the board, the move that produced it and how
/// its cells are colored. Never modified after being pushed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub board: Board,
    pub last_move: Option<Move>,
    pub highlights: Highlights,
    pub win_state: WinState,
}

impl Entry {
    pub fn initial() -> Self {
        Self {
            highlights: PLAIN,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    // never empty, entries[0] is the empty board
    entries: Vec<Entry>,
    position: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: vec![Entry::initial()],
            position: 0,
        }
    }
}

impl History {
    /// Drops everything after the current position, appends `entry` and
    /// moves to it.
    pub fn push(&mut self, entry: Entry) {
        self.entries.truncate(self.position + 1);
        self.entries.push(entry);
        self.position = self.entries.len() - 1;
    }

    /// Moves to `position` without touching the entries. Returns false if
    /// there is no such entry.
    pub fn jump(&mut self, position: usize) -> bool {
        if position >= self.entries.len() {
            return false;
        }
        self.position = position;
        true
    }

    pub fn current(&self) -> &Entry {
        &self.entries[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
