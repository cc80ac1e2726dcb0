use crate::action::Action::*;
use crate::args::TicTacToeArgs;
use crate::board::{Board, SIDE};
use crate::cell::Cell;
use crate::highlight::{Highlight, Highlights};
use crate::input_state::Focus;
use crate::tictactoe::TicTacToe;
use crate::util::Unit::{Negative, Positive, Zero};
use crate::util::{i_xy, xy_i};
use crate::view::View;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Color::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, List, ListState, Paragraph},
};

// each cell is drawn 3 wide, with a 1 wide separator
const CELL_WIDTH: u16 = 3;
const BOARD_WIDTH: u16 = SIDE as u16 * (CELL_WIDTH + 1) - 1;
const BOARD_HEIGHT: u16 = SIDE as u16 * 2 - 1;
const TITLE: &str = "Tic-Tac-Toe";
const HINTS: &str = "(1-9/Space) play (Tab) focus (o)rder (q)uit";

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = std::io::stdout().execute(event::DisableMouseCapture) {
            log::warn!("failed to disable mouse capture: {e}");
        }
    }
}

pub fn main(args: TicTacToeArgs) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(&args).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug, Default)]
pub struct App {
    /// Is the application running?
    running: bool,
    game: TicTacToe,
    /// Inner areas from the last frame, for mouse hit testing.
    board_area: Rect,
    moves_area: Rect,
    /// Keeps the move list scrolled onto the cursor.
    moves_state: ListState,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(args: &TicTacToeArgs) -> Self {
        Self {
            game: TicTacToe::new(args),
            ..Self::default()
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        std::io::stdout().execute(event::EnableMouseCapture)?;
        let _guard = TerminalGuard;

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.game.update();
        }

        log::info!("quitting at\n{}", self.game.state);
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let view = self.game.state.view();
        let focus = self.game.input_state.focus;

        let [board_column, info_area] =
            Layout::horizontal([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(0)])
                .areas(frame.area());
        let [board_pane, _] =
            Layout::vertical([Constraint::Length(BOARD_HEIGHT + 2), Constraint::Min(0)])
                .areas(board_column);

        let board_title = Line::from(TITLE).bold().light_blue().centered();
        let board_block = Block::bordered()
            .title(board_title)
            .border_style(focused_border(focus == Focus::Board));
        self.board_area = board_block.inner(board_pane);
        frame.render_widget(
            Paragraph::new(self.board_lines(&view)).block(board_block),
            board_pane,
        );

        let status = if view.winner {
            Line::from(view.status.as_str()).bold().light_green()
        } else {
            Line::from(view.status.as_str()).light_blue()
        };
        let order = if view.descending {
            "newest first"
        } else {
            "oldest first"
        };
        let moves_block = Block::bordered()
            .title(status)
            .title_bottom(Line::from(order).centered())
            .border_style(focused_border(focus == Focus::Moves));
        let [moves_pane, hints_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(info_area);
        self.moves_area = moves_block.inner(moves_pane);
        let list_focused = focus == Focus::Moves;
        let selected_row = if list_focused {
            self.game.input_state.list_cursor
        } else {
            let shown = self.game.state.history.position();
            view.moves
                .iter()
                .position(|m| m.position == shown)
                .unwrap_or_default()
        };
        self.moves_state.select(Some(selected_row));
        let highlight = if list_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(self.move_lines(&view))
            .block(moves_block)
            .highlight_style(highlight);
        frame.render_stateful_widget(list, moves_pane, &mut self.moves_state);
        frame.render_widget(Line::from(HINTS).dark_gray().centered(), hints_area);

        if focus == Focus::Board {
            let (x, y) = self.game.input_state.cursor;
            frame.set_cursor_position(Position {
                x: self.board_area.x + x * (CELL_WIDTH + 1) + CELL_WIDTH / 2,
                y: self.board_area.y + y * 2,
            });
        }
    }

    fn board_lines(&self, view: &View) -> Vec<Line<'static>> {
        let View {
            board, highlights, ..
        } = view;
        let cursor = xy_i(self.game.input_state.cursor);
        let board_focused = self.game.input_state.focus == Focus::Board;

        let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
        for row in 0..SIDE {
            if row > 0 {
                lines.push(Line::from("───┼───┼───").dark_gray());
            }
            let mut spans = Vec::with_capacity(SIDE * 2);
            for col in 0..SIDE {
                if col > 0 {
                    spans.push(Span::from("│").dark_gray());
                }
                let i = row * SIDE + col;
                let selected = board_focused && cursor == Some(i);
                spans.push(cell_span(board, highlights, i, selected));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn move_lines(&self, view: &View) -> Vec<Line<'static>> {
        let shown = self.game.state.history.position();
        view.moves
            .iter()
            .enumerate()
            .map(|(row, m)| {
                let marker = if m.position == shown { "> " } else { "  " };
                let mut style = Style::default();
                if m.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::raw(format!("{marker}{:>2}. ", row + 1)),
                    Span::styled(m.label.clone(), style),
                ])
            })
            .collect()
    }

    fn handle_crossterm_events(&mut self) -> Result<()> {
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(m) => self.on_mouse_event(m),
            Event::Resize(_, _) => {}
            _ => {}
        }
        Ok(())
    }

    fn on_mouse_event(&mut self, m: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = m.kind else {
            return;
        };
        let at = Position::new(m.column, m.row);
        if self.board_area.contains(at) {
            let dx = at.x - self.board_area.x;
            let dy = at.y - self.board_area.y;
            // separators
            if dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % 2 == 1 {
                return;
            }
            let cursor = (dx / (CELL_WIDTH + 1), dy / 2);
            let Some(i) = xy_i(cursor) else { return };
            let input = &mut self.game.input_state;
            input.focus = Focus::Board;
            input.cursor = cursor;
            input.action = Some(CellClicked(i));
        } else if self.moves_area.contains(at) {
            let row = self.moves_state.offset() + (at.y - self.moves_area.y) as usize;
            let Some(position) = self.game.state.position_at(row) else {
                return;
            };
            let input = &mut self.game.input_state;
            input.focus = Focus::Moves;
            input.list_cursor = row;
            input.action = Some(MoveSelected(position));
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let focus = self.game.input_state.focus;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q' | 'Q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::BackTab) => {
                self.game.input_state.focus = focus.toggled();
            }
            (_, KeyCode::Char('o')) => {
                self.game.input_state.action = Some(OrderToggled);
            }
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let i = c as usize - '1' as usize;
                let input = &mut self.game.input_state;
                if let Some(cursor) = i_xy(i) {
                    input.cursor = cursor;
                }
                input.action = Some(CellClicked(i));
            }
            (_, KeyCode::Char(' ') | KeyCode::Enter) => self.activate(),
            (_, key @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down)) => {
                let (x, y) = match key {
                    KeyCode::Left => (Negative, Zero),
                    KeyCode::Right => (Positive, Zero),
                    KeyCode::Up => (Zero, Negative),
                    KeyCode::Down => (Zero, Positive),
                    _ => unreachable!(),
                };
                match focus {
                    Focus::Board => self.game.move_cursor(x, y),
                    Focus::Moves => self.game.move_list_cursor(y),
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self) {
        let input = &mut self.game.input_state;
        input.action = match input.focus {
            Focus::Board => xy_i(input.cursor).map(CellClicked),
            Focus::Moves => self.game.state.position_at(input.list_cursor).map(MoveSelected),
        };
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn focused_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(LightBlue)
    } else {
        Style::default().fg(DarkGray)
    }
}

fn cell_span(board: &Board, highlights: &Highlights, i: usize, selected: bool) -> Span<'static> {
    const MARK_COLOR: Color = Black;

    let bg = match highlights[i] {
        Highlight::White => White,
        Highlight::Yellow => Yellow,
    };
    let (text, mut style) = match board.get(i) {
        Some(Cell::Marked(mark)) => (
            format!(" {mark} "),
            Style::default()
                .fg(MARK_COLOR)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Empty) | None => ("   ".to_string(), Style::default().bg(bg)),
    };
    if selected {
        style = style.add_modifier(if board.is_occupied(i) {
            Modifier::CROSSED_OUT
        } else {
            Modifier::REVERSED
        });
    }
    Span::styled(text, style)
}
