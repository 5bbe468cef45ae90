use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{self, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};
use tracing::{debug, warn};

use crate::error::GameError;
use crate::grid::{Board, Cell};
use crate::input::{InputEvent, InputSource, Key};
use crate::render::{Rgb, Surface};

/// Terminal columns used per board cell, so cells come out roughly square.
const CELL_COLS: u16 = 2;
const SQUARE: &str = "[]";
const BLANK: &str = "  ";
const HELP: &str = "Arrows/WASD to move, Esc or Q to quit";

type Coords = (u16, u16);

/// Owns the terminal for the lifetime of a session: alternate screen, raw
/// mode, hidden cursor. Everything is put back on drop.
pub struct TermManager {
    stdout: Stdout,
    columns: u16,
    rows: u16,
    grid_size: i32,
    /// Top-left corner of the board frame.
    origin: Coords,
    active: bool,
}

/// Where the board goes on a terminal of a given size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Layout {
    columns: u16,
    rows: u16,
    origin: Coords,
}

impl Layout {
    fn fit(board: &Board, terminal: Coords) -> Result<Self, GameError> {
        let too_big = || GameError::InvalidConfig("board does not fit any terminal".to_string());
        let columns = u16::try_from(board.columns()).map_err(|_| too_big())?;
        let rows = u16::try_from(board.rows()).map_err(|_| too_big())?;

        // Frame on both sides plus one line of help under the board
        let need_cols = columns.checked_mul(CELL_COLS).and_then(|c| c.checked_add(2)).ok_or_else(too_big)?;
        let need_rows = rows.checked_add(3).ok_or_else(too_big)?;

        let (width, height) = terminal;
        if width < need_cols || height < need_rows {
            return Err(GameError::TerminalTooSmall {
                have_cols: width,
                have_rows: height,
                need_cols,
                need_rows,
            });
        }

        let origin = ((width - need_cols) / 2, (height - need_rows) / 2);
        Ok(Layout { columns, rows, origin })
    }
}

impl TermManager {
    pub fn new(board: &Board) -> Result<Self, GameError> {
        let size = terminal::size().map_err(GameError::terminal)?;
        let Layout { columns, rows, origin } = Layout::fit(board, size)?;

        Ok(TermManager {
            stdout: stdout(),
            columns,
            rows,
            grid_size: board.grid_size(),
            origin,
            active: false,
        })
    }

    pub fn setup(&mut self) -> Result<(), GameError> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle("Snake"))
            .map_err(GameError::terminal)?;
        self.active = true;
        terminal::enable_raw_mode().map_err(GameError::terminal)?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).map_err(GameError::terminal)?;
        debug!(origin = ?self.origin, "terminal ready");
        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), GameError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode().map_err(GameError::terminal)?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
        .map_err(GameError::terminal)?;
        Ok(())
    }

    fn screen_pos(&self, cell: Cell) -> Coords {
        let col = (cell.x / self.grid_size) as u16;
        let row = (cell.y / self.grid_size) as u16;
        (self.origin.0 + 1 + col * CELL_COLS, self.origin.1 + 1 + row)
    }

    fn print_at(&mut self, pos: Coords, text: &str) -> Result<(), GameError> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(text)).map_err(GameError::terminal)
    }

    fn draw_borders(&mut self) -> Result<(), GameError> {
        queue!(self.stdout, style::ResetColor).map_err(GameError::terminal)?;

        let (left, top) = self.origin;
        let width = self.columns * CELL_COLS + 2;
        let bottom = top + self.rows + 1;

        let horizontal: String = (0..width)
            .map(|x| if x == 0 || x == width - 1 { '+' } else { '-' })
            .collect();
        self.print_at((left, top), &horizontal)?;
        self.print_at((left, bottom), &horizontal)?;

        for y in top + 1..bottom {
            self.print_at((left, y), "|")?;
            self.print_at((left + width - 1, y), "|")?;
        }

        self.print_at((left, bottom + 1), HELP)
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

impl Surface for TermManager {
    fn clear(&mut self, color: Rgb) -> Result<(), GameError> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
            .map_err(GameError::terminal)?;
        self.draw_borders()?;

        let blank_row = BLANK.repeat(self.columns as usize);
        queue!(self.stdout, style::SetBackgroundColor(to_color(color))).map_err(GameError::terminal)?;
        for row in 0..self.rows {
            let pos = (self.origin.0 + 1, self.origin.1 + 1 + row);
            self.print_at(pos, &blank_row)?;
        }
        queue!(self.stdout, style::ResetColor).map_err(GameError::terminal)
    }

    fn draw_square(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<(), GameError> {
        let (x, y) = self.screen_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetForegroundColor(to_color(border)),
            style::SetBackgroundColor(to_color(fill)),
            style::Print(SQUARE),
            style::ResetColor
        )
        .map_err(GameError::terminal)
    }

    fn erase(&mut self, cell: Cell, color: Rgb) -> Result<(), GameError> {
        let (x, y) = self.screen_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetBackgroundColor(to_color(color)),
            style::Print(BLANK),
            style::ResetColor
        )
        .map_err(GameError::terminal)
    }

    fn present(&mut self) -> Result<(), GameError> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Reads key presses from the terminal. Needs raw mode, see [`TermManager::setup`].
pub struct KeyReader;

impl InputSource for KeyReader {
    /// Drains every key event already queued, without blocking.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).map_err(GameError::terminal)? {
            if let Event::Key(ev) = read().map_err(GameError::terminal)? {
                events.push(map_key(&ev));
            }
        }

        Ok(events)
    }
}

pub fn map_key(ev: &KeyEvent) -> InputEvent {
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match ev.code {
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
        KeyCode::Char('w') | KeyCode::Up => InputEvent::Key(Key::Up),
        KeyCode::Char('a') | KeyCode::Left => InputEvent::Key(Key::Left),
        KeyCode::Char('s') | KeyCode::Down => InputEvent::Key(Key::Down),
        KeyCode::Char('d') | KeyCode::Right => InputEvent::Key(Key::Right),
        _ => InputEvent::Key(Key::Other),
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}
