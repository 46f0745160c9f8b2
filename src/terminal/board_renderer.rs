//! Coloured terminal view of a running game.
//!
//! The renderer never asks the game whether something changed. It drains the
//! board's event queue and compares the clocks' displayed seconds against the
//! last frame, and only produces a new frame when either moved.

use std::fmt::Write as _;
use std::time::Duration;

use colored::{ColoredString, Colorize};

use crate::game::game::{Game, GameOutcome};
use crate::game_state::board::{Board, BoardEvent};
use crate::game_state::chess_types::Team;
use crate::game_state::coord::{Coord, BOARD_SIZE};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Default)]
pub struct BoardRenderer {
    last_seconds: Option<[u64; 2]>,
    frames: usize,
}

impl BoardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// True on the first call, when any event arrived, or when a clock's
    /// whole-second reading differs from the previous call.
    pub fn needs_redraw(&mut self, events: &[BoardEvent], clocks: [Duration; 2]) -> bool {
        let seconds = clocks.map(|c| c.as_secs());
        let clock_changed = self.last_seconds != Some(seconds);
        self.last_seconds = Some(seconds);
        clock_changed || !events.is_empty()
    }

    /// Drains the game's board events and returns a new frame if anything
    /// visible changed.
    pub fn frame(&mut self, game: &mut Game<'_>) -> Option<String> {
        let events = game.drain_board_events();
        let clocks = [game.timer(0).time(), game.timer(1).time()];
        if !self.needs_redraw(&events, clocks) {
            return None;
        }
        self.frames += 1;
        Some(format!("{CLEAR_SCREEN}{}", render_game(game)))
    }
}

/// Board, clocks and the prompt line for `game`.
pub fn render_game(game: &Game<'_>) -> String {
    let mut out = render_board(game.board());
    out.push('\n');
    for number in 0..2 {
        let player = game.player(number);
        let _ = writeln!(
            out,
            "{:<24} {}",
            format!("{} ({})", player.name(), player.team()),
            format_clock(game.timer(number).time())
        );
    }
    let status = match game.outcome() {
        Some(GameOutcome::Checkmate { winner }) => format!("Checkmate. {winner} wins."),
        Some(GameOutcome::Timeout { loser }) => {
            format!("{loser} ran out of time. {} wins.", loser.opposite())
        }
        Some(GameOutcome::Abandoned { by }) => format!("{by} left the game."),
        None => format!(
            "{} to move. w/a/s/d + enter to steer, empty line or x to select, or type e2e4.",
            game.current_player().name()
        ),
    };
    out.push_str(&status);
    out.push('\n');
    out
}

/// The board with rank and file labels, the cursor and highlighted squares.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(&file_labels());
    for y in 0..BOARD_SIZE {
        let rank = (BOARD_SIZE - y).to_string();
        let _ = write!(out, "{} ", rank.cyan());
        for x in 0..BOARD_SIZE {
            let _ = write!(out, "{}", render_square(board, Coord::new(x, y)));
        }
        let _ = writeln!(out, " {}", rank.cyan());
    }
    out.push_str(&file_labels());
    out
}

fn file_labels() -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_SIZE {
        let file = char::from(b'a' + x as u8);
        let _ = write!(out, " {} ", file.to_string().cyan());
    }
    out.push('\n');
    out
}

fn render_square(board: &Board, c: Coord) -> ColoredString {
    let cell = match board.piece(c) {
        Some(piece) => {
            let text = format!(" {} ", piece.symbol());
            match piece.team() {
                Team::White => text.bright_white().bold(),
                Team::Black => text.bright_red().bold(),
            }
        }
        None => " · ".dimmed(),
    };
    if board.cursor() == c {
        cell.on_yellow()
    } else if board.highlighted_squares().contains(&c) {
        cell.on_green()
    } else if (c.x + c.y) % 2 == 0 {
        cell.on_bright_black()
    } else {
        cell.on_black()
    }
}

/// `mm:ss`, rounded down to the second.
pub fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
