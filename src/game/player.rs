//! Player abstraction polled by the game loop.
//!
//! Each tick the game hands the active player a `TurnContext`: read access
//! to the position plus the cursor and highlight controls. The player answers
//! with at most one `Command`. Pieces can only move through the game.

use std::collections::VecDeque;

use crate::game::command::Command;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Team;
use crate::game_state::coord::{Coord, Direction};

pub trait Player {
    fn team(&self) -> Team;

    fn name(&self) -> &str {
        match self.team() {
            Team::White => "White",
            Team::Black => "Black",
        }
    }

    /// Polls for a move. Must not block.
    fn tick(&mut self, turn: &mut TurnContext<'_>) -> Option<Command>;

    /// Called when the command returned by the last `tick` was rejected.
    fn command_rejected(&mut self, _command: Command) {}

    /// True once the player can never send another command, for example
    /// because its input stream closed. The game treats this as abandoning.
    fn has_left(&self) -> bool {
        false
    }
}

/// What a player may see and touch during its turn.
pub struct TurnContext<'a> {
    board: &'a mut Board,
    team: Team,
}

impl<'a> TurnContext<'a> {
    pub fn new(board: &'a mut Board, team: Team) -> Self {
        Self { board, team }
    }

    pub fn board(&self) -> &Board {
        &*self.board
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn cursor(&self) -> Coord {
        self.board.cursor()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.board.move_cursor(direction);
    }

    pub fn highlighted_squares(&self) -> &[Coord] {
        self.board.highlighted_squares()
    }

    pub fn set_highlighted_squares(&mut self, squares: Vec<Coord>) {
        self.board.set_highlighted_squares(squares);
    }
}

/// Plays a fixed queue of commands, one per tick, then idles.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    team: Team,
    name: String,
    queue: VecDeque<Command>,
    rejected: Vec<Command>,
}

impl ScriptedPlayer {
    pub fn new(team: Team, commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            team,
            name: format!("{team} (scripted)"),
            queue: commands.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn idle(team: Team) -> Self {
        Self::new(team, [])
    }

    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn rejected(&self) -> &[Command] {
        &self.rejected
    }
}

impl Player for ScriptedPlayer {
    fn team(&self) -> Team {
        self.team
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, _turn: &mut TurnContext<'_>) -> Option<Command> {
        self.queue.pop_front()
    }

    fn command_rejected(&mut self, command: Command) {
        self.rejected.push(command);
    }
}
