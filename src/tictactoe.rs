use crate::action::Action;
use crate::action::Action::*;
use crate::args::TicTacToeArgs;
use crate::board::SIDE;
use crate::highlight::carry_forward;
use crate::history::{Entry, History};
use crate::input_state::InputState;
use crate::mark::Mark;
use crate::move_record::Move;
use crate::util::{Unit, step_clamped};
use crate::view::{MoveDescriptor, View};
use crate::win_state::WinState;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Default)]
pub struct TicTacToe {
    pub state: GameState,
    pub input_state: InputState,
}

/// The whole game, independent of any terminal. Changed only through
/// [`GameState::apply`] or the operations it dispatches to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub history: History,
    pub next: Mark,
    pub selection: Option<usize>,
    pub descending: bool,
}

impl TicTacToe {
    pub fn new(args: &TicTacToeArgs) -> Self {
        Self {
            state: GameState {
                descending: args.descending,
                ..GameState::default()
            },
            ..Self::default()
        }
    }

    pub fn update(&mut self) {
        let Some(action) = self.input_state.action.take() else {
            return;
        };
        self.state.apply(action);
        // a move played after jumping back can shorten the list
        let last_row = self.state.history.entries().len() - 1;
        let cursor = &mut self.input_state.list_cursor;
        *cursor = (*cursor).min(last_row);
    }

    pub fn move_cursor(&mut self, dx: Unit, dy: Unit) {
        let (x, y) = &mut self.input_state.cursor;
        *x = step_clamped(*x as usize, dx, SIDE) as u16;
        *y = step_clamped(*y as usize, dy, SIDE) as u16;
    }

    pub fn move_list_cursor(&mut self, dy: Unit) {
        let len = self.state.history.entries().len();
        let cursor = &mut self.input_state.list_cursor;
        *cursor = step_clamped(*cursor, dy, len);
    }
}

impl GameState {
    pub fn apply(&mut self, action: Action) {
        match action {
            CellClicked(index) => self.apply_move(index),
            MoveSelected(position) => self.select_move(position),
            OrderToggled => self.toggle_order(),
        }
    }

    /// Plays the next mark at `index`. Ignored when the shown board is
    /// already won or the cell is taken.
    pub fn apply_move(&mut self, index: usize) {
        let current = self.history.current();
        if current.win_state.is_won() {
            log::debug!("ignoring move at {index}, game already won");
            return;
        }
        let Some(board) = current.board.with_mark(index, self.next) else {
            log::debug!("ignoring move at {index}, cell unavailable");
            return;
        };

        let win_state = WinState::of(&board);
        let last_move = Move::from_index(index);
        let entry = Entry {
            board,
            last_move: Some(last_move),
            highlights: carry_forward(&current.highlights, win_state),
            win_state,
        };
        log::info!(
            "move #{}: {} at {last_move}",
            self.history.position() + 1,
            self.next
        );
        if let WinState::Won { mark, line } = win_state {
            log::info!("{mark} wins on {line:?}");
        }

        self.history.push(entry);
        self.next = self.next.next();
        self.selection = None;
    }

    pub fn jump_to(&mut self, position: usize) {
        if !self.history.jump(position) {
            log::debug!("ignoring jump to missing position {position}");
            return;
        }
        self.next = Mark::at_position(position);
        log::debug!("jumped to position {position}");
    }

    /// Jumps to `position` and remembers it as the emphasised list row.
    pub fn select_move(&mut self, position: usize) {
        if position >= self.history.entries().len() {
            log::debug!("ignoring selection of missing position {position}");
            return;
        }
        self.selection = Some(position);
        self.jump_to(position);
    }

    pub fn toggle_order(&mut self) {
        self.descending = !self.descending;
        log::debug!("move list descending: {}", self.descending);
    }

    /// History position shown at `row` of the move list.
    pub fn position_at(&self, row: usize) -> Option<usize> {
        let len = self.history.entries().len();
        if row >= len {
            return None;
        }
        Some(if self.descending { len - 1 - row } else { row })
    }

    pub fn status(&self) -> String {
        match self.history.current().win_state.winner() {
            Some(mark) => format!("Winner: {mark}"),
            None => format!("Next player: {}", self.next),
        }
    }

    pub fn view(&self) -> View {
        let current = self.history.current();
        let entries = self.history.entries();
        let moves = (0..entries.len())
            .filter_map(|row| self.position_at(row))
            .map(|position| MoveDescriptor {
                position,
                label: describe(position, entries[position].last_move),
                bold: self.selection == Some(position),
            })
            .collect();

        View {
            board: current.board,
            highlights: current.highlights,
            moves,
            status: self.status(),
            winner: current.win_state.is_won(),
            descending: self.descending,
        }
    }
}

fn describe(position: usize, last_move: Option<Move>) -> String {
    match (position, last_move) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (n, Some(m)) => format!("Go to move #{n} {m}"),
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.history.current().board)?;
        writeln!(f, "{}", self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::highlight::{Highlight, PLAIN};
    use crate::mark::Mark::*;
    use proptest::prelude::*;

    fn play(cells: &[usize]) -> GameState {
        let mut state = GameState::default();
        for &i in cells {
            state.apply(CellClicked(i));
        }
        state
    }

    #[test]
    fn starts_empty_with_x_to_move() {
        let state = GameState::default();
        let view = state.view();
        assert_eq!(state.history.entries().len(), 1);
        assert_eq!(state.next, X);
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(!view.moves[0].bold);
    }

    #[test]
    fn moves_alternate_and_record_position() {
        let state = play(&[4, 0]);
        let board = state.history.current().board;
        assert_eq!(board.get(4), Some(Cell::Marked(X)));
        assert_eq!(board.get(0), Some(Cell::Marked(O)));
        assert_eq!(state.next, X);
        assert_eq!(state.history.position(), 2);
        let labels: Vec<_> = state.view().moves.into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1 (2,2)", "Go to move #2 (1,1)"]
        );
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let before = play(&[4]);
        let mut after = before.clone();
        after.apply(CellClicked(4));
        assert_eq!(after, before);
    }

    #[test]
    fn off_board_cell_is_ignored() {
        let before = play(&[4]);
        let mut after = before.clone();
        after.apply(CellClicked(9));
        assert_eq!(after, before);
    }

    #[test]
    fn diagonal_win_highlights_line() {
        // X: 0, 4, 8  O: 1, 2
        let state = play(&[0, 1, 4, 2, 8]);
        let current = state.history.current();
        assert_eq!(
            current.win_state,
            WinState::Won {
                mark: X,
                line: [0, 4, 8]
            }
        );
        for (i, h) in current.highlights.iter().enumerate() {
            let expected = if [0, 4, 8].contains(&i) {
                Highlight::Yellow
            } else {
                Highlight::White
            };
            assert_eq!(*h, expected);
        }
        for entry in &state.history.entries()[..5] {
            assert_eq!(entry.highlights, PLAIN);
        }
        assert_eq!(state.status(), "Winner: X");
        assert!(state.view().winner);
    }

    #[test]
    fn won_board_ignores_every_cell() {
        let before = play(&[0, 1, 4, 2, 8]);
        for i in 0..9 {
            let mut after = before.clone();
            after.apply(CellClicked(i));
            assert_eq!(after.history, before.history);
        }
    }

    #[test]
    fn jump_to_start_shows_empty_board() {
        let mut state = play(&[4, 0, 1]);
        state.jump_to(0);
        let view = state.view();
        assert!(view.board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(view.status, "Next player: X");
        assert_eq!(state.history.entries().len(), 4);
    }

    #[test]
    fn jump_to_missing_position_is_ignored() {
        let before = play(&[4, 0]);
        let mut after = before.clone();
        after.jump_to(3);
        after.apply(MoveSelected(7));
        assert_eq!(after, before);
    }

    #[test]
    fn jump_back_to_a_win_shows_winner() {
        let mut state = play(&[0, 1, 4, 2, 8]);
        state.jump_to(2);
        assert_eq!(state.status(), "Next player: X");
        state.jump_to(5);
        assert_eq!(state.status(), "Winner: X");
    }

    #[test]
    fn playing_after_jump_discards_future() {
        let mut state = play(&[4, 0, 1, 7]);
        state.apply(MoveSelected(1));
        state.apply(CellClicked(8));
        assert_eq!(state.history.entries().len(), 3);
        assert_eq!(state.history.position(), 2);
        let board = state.history.current().board;
        assert_eq!(board.get(8), Some(Cell::Marked(O)));
        assert_eq!(board.get(0), Some(Cell::Empty));
        assert_eq!(state.next, X);
    }

    #[test]
    fn selection_bolds_row_until_next_move() {
        let mut state = play(&[4, 0]);
        state.apply(MoveSelected(1));
        let bold: Vec<_> = state.view().moves.iter().map(|m| m.bold).collect();
        assert_eq!(bold, [false, true, false]);
        assert_eq!(state.next, O);

        state.apply(CellClicked(8));
        assert_eq!(state.selection, None);
        assert!(state.view().moves.iter().all(|m| !m.bold));
    }

    #[test]
    fn descending_reverses_rows_only() {
        let mut state = play(&[4, 0, 8]);
        let ascending = state.view().moves;
        state.apply(OrderToggled);
        let descending = state.view().moves;
        assert!(state.view().descending);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(state.position_at(0), Some(3));
        assert_eq!(state.position_at(4), None);

        state.apply(OrderToggled);
        assert_eq!(state.view().moves, ascending);
        assert_eq!(state.history.entries().len(), 4);
    }

    #[test]
    fn update_consumes_pending_action() {
        let mut game = TicTacToe::default();
        game.input_state.action = Some(CellClicked(4));
        game.update();
        assert_eq!(game.input_state.action, None);
        assert_eq!(game.state.history.entries().len(), 2);
        game.update();
        assert_eq!(game.state.history.entries().len(), 2);
    }

    #[test]
    fn cursors_stay_in_range() {
        let mut game = TicTacToe::default();
        game.move_cursor(Unit::Negative, Unit::Negative);
        assert_eq!(game.input_state.cursor, (0, 0));
        for _ in 0..5 {
            game.move_cursor(Unit::Positive, Unit::Positive);
        }
        assert_eq!(game.input_state.cursor, (2, 2));

        game.state.apply(CellClicked(0));
        for _ in 0..5 {
            game.move_list_cursor(Unit::Positive);
        }
        assert_eq!(game.input_state.list_cursor, 1);
    }

    #[test]
    fn list_cursor_follows_truncated_history() {
        let mut game = TicTacToe::default();
        for i in [4, 0, 1, 7, 2] {
            game.state.apply(CellClicked(i));
        }
        for _ in 0..5 {
            game.move_list_cursor(Unit::Positive);
        }
        assert_eq!(game.input_state.list_cursor, 5);

        game.input_state.action = Some(MoveSelected(1));
        game.update();
        game.input_state.action = Some(CellClicked(8));
        game.update();

        assert_eq!(game.state.history.entries().len(), 3);
        assert_eq!(game.input_state.list_cursor, 2);
        assert_eq!(game.state.position_at(game.input_state.list_cursor), Some(2));

        game.move_list_cursor(Unit::Negative);
        assert_eq!(game.input_state.list_cursor, 1);
        assert_eq!(game.state.position_at(1), Some(1));
    }

    proptest! {
        #[test]
        fn turn_follows_position_parity(
            actions in proptest::collection::vec((0usize..3, 0usize..10), 0..40)
        ) {
            let mut state = GameState::default();
            for (kind, arg) in actions {
                let action = match kind {
                    0 => CellClicked(arg),
                    1 => MoveSelected(arg),
                    _ => OrderToggled,
                };
                state.apply(action);
                prop_assert_eq!(state.next, Mark::at_position(state.history.position()));
                prop_assert!(!state.history.entries().is_empty());
            }
        }

        #[test]
        fn no_entry_is_played_on_after_a_win(
            cells in proptest::collection::vec(0usize..9, 0..20)
        ) {
            let state = play(&cells);
            let entries = state.history.entries();
            for pair in entries.windows(2) {
                prop_assert!(!pair[0].win_state.is_won());
                prop_assert_eq!(pair[1].win_state, WinState::of(&pair[1].board));
            }
        }
    }
}
