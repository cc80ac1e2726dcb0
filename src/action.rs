/// Everything that can change a [`GameState`](crate::tictactoe::GameState).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Play the current mark on a board index.
    CellClicked(usize),
    /// Jump to a history position picked from the move list.
    MoveSelected(usize),
    /// Flip the move list between ascending and descending.
    OrderToggled,
}
