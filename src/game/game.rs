//! Turn state machine.
//!
//! A game is either waiting for `current_player` to move or over. Applying a
//! command moves the piece, records the command, hands the turn over and then
//! checks whether the new side can still play:
//!
//! - no moves and in check: checkmate, the game ends;
//! - no moves and not in check: the turn goes straight back to the mover.
//!
//! Each tick polls the active player, then runs down the active clock; an
//! empty clock ends the game, and so does a player whose input has gone. The move history is written exactly once, at
//! the moment the game ends.

use std::time::Duration;

use log::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::game::command::Command;
use crate::game::player::{Player, TurnContext};
use crate::game::timer::Timer;
use crate::game_state::board::{Board, BoardEvent};
use crate::game_state::chess_types::{PieceKind, Team};
use crate::persistence::save_strategy::SaveStrategy;

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Team },
    Timeout { loser: Team },
    /// The side to move stopped sending input.
    Abandoned { by: Team },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Team),
    GameOver(GameOutcome),
}

pub struct Game<'p> {
    board: Board,
    players: [&'p mut dyn Player; 2],
    timers: [Timer; 2],
    current_player: usize,
    history: Vec<Command>,
    outcome: Option<GameOutcome>,
    save_strategy: Box<dyn SaveStrategy>,
    saved: bool,
    tick: Duration,
}

impl<'p> Game<'p> {
    /// Whichever player is White moves first. Both clocks start at
    /// `timer_start`.
    pub fn new(
        board: Board,
        player1: &'p mut dyn Player,
        player2: &'p mut dyn Player,
        timer_start: Duration,
        save_strategy: Box<dyn SaveStrategy>,
    ) -> Self {
        let current_player = if player1.team() == Team::White { 0 } else { 1 };
        let mut game = Self {
            board,
            players: [player1, player2],
            timers: [Timer::new(timer_start), Timer::new(timer_start)],
            current_player,
            history: Vec::new(),
            outcome: None,
            save_strategy,
            saved: false,
            tick: DEFAULT_TICK,
        };
        game.timers[current_player].start_timer();
        game
    }

    /// Sets how much clock time one tick consumes.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drain_board_events(&mut self) -> Vec<BoardEvent> {
        self.board.drain_events()
    }

    pub fn player(&self, number: usize) -> &dyn Player {
        &*self.players[number]
    }

    pub fn timer(&self, number: usize) -> &Timer {
        &self.timers[number]
    }

    pub fn current_player(&self) -> &dyn Player {
        &*self.players[self.current_player]
    }

    pub fn current_timer(&self) -> &Timer {
        &self.timers[self.current_player]
    }

    pub fn current_turn(&self) -> Team {
        self.current_player().team()
    }

    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(outcome) => GameStatus::GameOver(outcome),
            None => GameStatus::AwaitingMove(self.current_turn()),
        }
    }

    fn advance_turn(&mut self) {
        self.timers[self.current_player].stop_timer();
        self.current_player = (self.current_player + 1) % 2;
    }

    /// Checks `command` against the current position without touching it.
    pub fn validate(&self, command: Command) -> Result<(), ChessErrors> {
        if self.is_over() {
            return Err(ChessErrors::GameIsOver);
        }
        for c in [command.source(), command.destination()] {
            if !c.is_in_bounds() {
                return Err(ChessErrors::CoordOutOfBounds(c));
            }
        }
        let piece = self
            .board
            .piece(command.source())
            .ok_or(ChessErrors::TryToMoveFromEmptySquare(command.source()))?;
        let to_move = self.current_turn();
        if piece.team() != to_move {
            return Err(ChessErrors::NotYourTurn {
                location: command.source(),
                owner: piece.team(),
                to_move,
            });
        }
        if !piece.possible_moves(&self.board).contains(&command.destination()) {
            return Err(ChessErrors::IllegalMove(command));
        }
        Ok(())
    }

    /// Applies `command` for the side to move.
    ///
    /// Illegal commands are rejected before anything changes. If the move
    /// ends the game, the history is saved before returning and a save
    /// failure is returned here.
    pub fn move_piece(&mut self, command: Command) -> Result<(), ChessErrors> {
        self.validate(command)?;

        let (source, destination) = (command.source(), command.destination());
        let piece = self
            .board
            .take_piece(source)
            .ok_or(ChessErrors::TryToMoveFromEmptySquare(source))?;
        let capture = piece.capture_coord(&self.board, destination);
        self.board.maybe_remove_piece(capture);
        let kind = piece.kind();
        let double_step = kind == PieceKind::Pawn && (destination.y - source.y).abs() == 2;
        self.board.place_piece(piece, destination);
        self.board.set_en_passant_target(if double_step {
            Some(source.offset(0, (destination.y - source.y) / 2)?)
        } else {
            None
        });

        self.history.push(command);
        let mover = self.current_turn();
        debug!("{mover} played {} {command}", kind.name());
        self.advance_turn();

        let next = self.current_turn();
        if !self.board.can_make_move(next) {
            if self.board.is_in_check(next) {
                info!("checkmate, {mover} wins after {} moves", self.history.len());
                return self.end_game(GameOutcome::Checkmate { winner: mover });
            }
            info!("{next} has no moves and is not in check, turn returns to {mover}");
            self.advance_turn();
        }
        self.timers[self.current_player].start_timer();
        Ok(())
    }

    /// One iteration of the game loop.
    pub fn tick(&mut self) -> Result<(), ChessErrors> {
        if self.is_over() {
            return Ok(());
        }

        let team = self.current_turn();
        let player = &mut *self.players[self.current_player];
        let mut turn = TurnContext::new(&mut self.board, team);
        if let Some(command) = player.tick(&mut turn) {
            match self.move_piece(command) {
                Ok(()) => {}
                Err(e @ (ChessErrors::Io(_) | ChessErrors::Serialization(_))) => return Err(e),
                Err(e) => {
                    warn!("rejected {command} from {team}: {e}");
                    self.players[self.current_player].command_rejected(command);
                }
            }
            if self.is_over() {
                return Ok(());
            }
        }

        if self.players[self.current_player].has_left() {
            let by = self.current_turn();
            info!("{by} left the game");
            return self.end_game(GameOutcome::Abandoned { by });
        }

        let tick = self.tick;
        let timer = &mut self.timers[self.current_player];
        timer.tick(tick);
        if timer.is_expired() {
            let loser = self.current_turn();
            info!("{loser} ran out of time");
            return self.end_game(GameOutcome::Timeout { loser });
        }
        Ok(())
    }

    /// Ticks until the game ends, calling `after_tick` after each tick.
    pub fn run(
        &mut self,
        mut after_tick: impl FnMut(&mut Self),
    ) -> Result<GameOutcome, ChessErrors> {
        self.timers[self.current_player].start_timer();
        loop {
            self.tick()?;
            after_tick(self);
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) -> Result<(), ChessErrors> {
        self.outcome = Some(outcome);
        for timer in &mut self.timers {
            timer.stop_timer();
        }
        if !self.saved {
            self.saved = true;
            self.save_strategy.write(&self.history)?;
        }
        Ok(())
    }
}
