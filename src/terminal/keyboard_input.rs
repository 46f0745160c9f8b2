//! Line-based keyboard input for hot-seat play.
//!
//! A background thread reads stdin line by line and forwards each line over
//! a channel. The game thread only ever calls `try_recv`, so a tick never
//! waits for the user. Parsed keys wait in a queue shared by both keyboard
//! players; whatever the mover typed ahead stays there for the next turn.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use log::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::game::command::Command;
use crate::game::player::{Player, TurnContext};
use crate::game_state::chess_types::Team;
use crate::game_state::coord::{Coord, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Step(Direction),
    Select,
    Move(Command),
}

impl KeyCommand {
    /// Parses one input line.
    ///
    /// An empty line selects. A line made only of `w`, `a`, `s`, `d` and `x`
    /// is one key per character, spaces ignored. Anything else must be a
    /// long algebraic move such as `e2e4`.
    pub fn parse_line(line: &str) -> Result<Vec<KeyCommand>, ChessErrors> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(vec![KeyCommand::Select]);
        }
        let keys: Option<Vec<KeyCommand>> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(KeyCommand::from_key)
            .collect();
        match keys {
            Some(keys) => Ok(keys),
            None => Ok(vec![KeyCommand::Move(Command::from_long_algebraic(line)?)]),
        }
    }

    fn from_key(key: char) -> Option<KeyCommand> {
        match key.to_ascii_lowercase() {
            'w' => Some(KeyCommand::Step(Direction::Up)),
            'a' => Some(KeyCommand::Step(Direction::Left)),
            's' => Some(KeyCommand::Step(Direction::Down)),
            'd' => Some(KeyCommand::Step(Direction::Right)),
            'x' => Some(KeyCommand::Select),
            _ => None,
        }
    }
}

pub struct KeyboardInput {
    lines: Receiver<String>,
    pending: RefCell<VecDeque<KeyCommand>>,
    disconnected: Cell<bool>,
}

impl KeyboardInput {
    /// Starts the stdin reader thread.
    pub fn spawn_stdin() -> Self {
        let (line_tx, line_rx) = channel::<String>();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("stdin closed: {e}");
                        break;
                    }
                }
            }
        });
        Self::from_receiver(line_rx)
    }

    pub fn from_receiver(lines: Receiver<String>) -> Self {
        Self {
            lines,
            pending: RefCell::new(VecDeque::new()),
            disconnected: Cell::new(false),
        }
    }

    /// True once the reader has hung up and every key has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.disconnected.get() && self.pending.borrow().is_empty()
    }

    /// Next key, pulling any newly typed lines first. Never blocks.
    pub fn next_key(&self) -> Option<KeyCommand> {
        let mut pending = self.pending.borrow_mut();
        loop {
            match self.lines.try_recv() {
                Ok(line) => match KeyCommand::parse_line(&line) {
                    Ok(keys) => pending.extend(keys),
                    Err(e) => warn!("ignoring input {line:?}: {e}"),
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected.set(true);
                    break;
                }
            }
        }
        pending.pop_front()
    }
}

/// A human at the keyboard.
///
/// Selecting one of your own pieces highlights where it can go; selecting a
/// highlighted square then plays the move. Typed moves skip the cursor.
pub struct KeyboardPlayer {
    team: Team,
    name: String,
    input: Rc<KeyboardInput>,
    selected: Option<Coord>,
}

impl KeyboardPlayer {
    pub fn new(team: Team, name: impl Into<String>, input: Rc<KeyboardInput>) -> Self {
        Self {
            team,
            name: name.into(),
            input,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    fn clear_selection(&mut self, turn: &mut TurnContext<'_>) {
        self.selected = None;
        if !turn.highlighted_squares().is_empty() {
            turn.set_highlighted_squares(Vec::new());
        }
    }

    fn select(&mut self, turn: &mut TurnContext<'_>) -> Option<Command> {
        let cursor = turn.cursor();
        if let Some(from) = self.selected {
            if turn.highlighted_squares().contains(&cursor) {
                self.clear_selection(turn);
                return Some(Command::new(from, cursor));
            }
        }

        let moves = match turn.board().piece(cursor) {
            Some(piece) if piece.team() == self.team && self.selected != Some(cursor) => {
                Some(piece.possible_moves(turn.board()))
            }
            _ => None,
        };
        match moves {
            Some(moves) => {
                debug!("{} selected {cursor}, {} moves", self.team, moves.len());
                self.selected = Some(cursor);
                turn.set_highlighted_squares(moves);
            }
            None => self.clear_selection(turn),
        }
        None
    }
}

impl Player for KeyboardPlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, turn: &mut TurnContext<'_>) -> Option<Command> {
        while let Some(key) = self.input.next_key() {
            match key {
                KeyCommand::Step(direction) => turn.move_cursor(direction),
                KeyCommand::Move(command) => {
                    self.clear_selection(turn);
                    return Some(command);
                }
                KeyCommand::Select => {
                    if let Some(command) = self.select(turn) {
                        return Some(command);
                    }
                }
            }
        }
        None
    }

    fn command_rejected(&mut self, command: Command) {
        debug!("{}: {command} rejected, dropping selection", self.name);
        self.selected = None;
    }

    fn has_left(&self) -> bool {
        self.input.is_exhausted()
    }
}
