//! The 8x8 board: owning piece slots plus the cursor and highlight state the
//! terminal front-end draws.
//!
//! Every slot owns at most one `Piece`. Placing into an occupied slot hands the
//! displaced piece back to the caller, so a capture can never silently lose or
//! duplicate a piece. Each mutation also queues a `BoardEvent` that the
//! renderer drains to know what to redraw; the board never talks to the
//! terminal itself.

use crate::game_state::chess_types::{PieceKind, Team};
use crate::game_state::coord::{Coord, Direction};
use crate::game_state::piece::Piece;
use crate::game_state::rule_set::RuleSet;
use crate::move_generation::legal_move_checks::{can_make_move, is_in_check};

/// Redraw notification for the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The slot at `at` now shows `symbol` (or nothing).
    PieceDrawn { at: Coord, symbol: Option<char> },
    CursorMoved { from: Coord, to: Coord },
    HighlightsChanged,
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Default)]
pub struct Board {
    // [y][x]
    squares: [[Option<Piece>; 8]; 8],
    cursor: Coord,
    highlighted: Vec<Coord>,
    // Where each team's king stands, indexed by `Team::index`.
    kings: [Option<Coord>; 2],
    // Square skipped by the last two-square pawn advance.
    en_passant_target: Option<Coord>,
    rules: RuleSet,
    events: Vec<BoardEvent>,
}

impl Board {
    /// An empty board with the classic rule set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// A standard starting position.
    pub fn new_game(rules: RuleSet) -> Self {
        let mut board = Self::with_rules(rules);
        board.place_initial_pieces();
        board
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    fn slot(&self, c: Coord) -> &Option<Piece> {
        assert!(c.is_in_bounds(), "board access out of bounds: {c}");
        &self.squares[c.y as usize][c.x as usize]
    }

    fn slot_mut(&mut self, c: Coord) -> &mut Option<Piece> {
        assert!(c.is_in_bounds(), "board access out of bounds: {c}");
        &mut self.squares[c.y as usize][c.x as usize]
    }

    /// The occupant of `c`, if any. Panics if `c` is off the board.
    pub fn piece(&self, c: Coord) -> Option<&Piece> {
        let piece = self.slot(c).as_ref();
        if let Some(p) = piece {
            assert_eq!(p.location(), c, "piece location diverged from its slot");
        }
        piece
    }

    /// Puts `piece` on `c` and returns whatever stood there before.
    pub fn place_piece(&mut self, mut piece: Piece, c: Coord) -> Option<Piece> {
        piece.update_location(c);
        let (kind, team, symbol) = (piece.kind(), piece.team(), piece.symbol());
        let displaced = self.slot_mut(c).replace(piece);
        if let Some(old) = &displaced {
            self.forget_king_at(old, c);
        }
        if kind == PieceKind::King {
            self.kings[team.index()] = Some(c);
        }
        self.events.push(BoardEvent::PieceDrawn {
            at: c,
            symbol: Some(symbol),
        });
        displaced
    }

    /// Empties `c` and hands its occupant back to the caller.
    pub fn take_piece(&mut self, c: Coord) -> Option<Piece> {
        let taken = self.slot_mut(c).take();
        if let Some(piece) = &taken {
            self.forget_king_at(piece, c);
        }
        self.events.push(BoardEvent::PieceDrawn { at: c, symbol: None });
        taken
    }

    /// Destroys any occupant of `c`. The square is redrawn either way.
    pub fn maybe_remove_piece(&mut self, c: Coord) {
        drop(self.take_piece(c));
    }

    fn forget_king_at(&mut self, piece: &Piece, c: Coord) {
        let king = &mut self.kings[piece.team().index()];
        if piece.kind() == PieceKind::King && *king == Some(c) {
            *king = None;
        }
    }

    /// Destroys every piece on the board.
    pub fn clear_board(&mut self) {
        for c in Coord::all() {
            if self.slot(c).is_some() {
                self.maybe_remove_piece(c);
            }
        }
        self.en_passant_target = None;
    }

    /// Clears the board and returns the cursor and highlights to their
    /// initial state, ready for a new game.
    pub fn reset(&mut self) {
        self.clear_board();
        let from = self.cursor;
        self.cursor = Coord::default();
        self.highlighted.clear();
        self.events.push(BoardEvent::CursorMoved {
            from,
            to: self.cursor,
        });
        self.events.push(BoardEvent::HighlightsChanged);
    }

    /// Places the 32 pieces of the standard starting position.
    pub fn place_initial_pieces(&mut self) {
        for team in [Team::White, Team::Black] {
            for (x, kind) in (0i8..).zip(BACK_ROW) {
                let c = Coord::new(x, team.back_row());
                self.place_piece(Piece::new(kind, team, c), c);
            }
            for x in 0..8 {
                let c = Coord::new(x, team.pawn_row());
                self.place_piece(Piece::new(PieceKind::Pawn, team, c), c);
            }
        }
    }

    /// Every piece on the board, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    pub fn king_location(&self, team: Team) -> Option<Coord> {
        self.kings[team.index()]
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        is_in_check(self, team)
    }

    pub fn can_make_move(&self, team: Team) -> bool {
        can_make_move(self, team)
    }

    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Coord>) {
        self.en_passant_target = target;
    }

    /// Copy of the position without UI state or pending events, for trying
    /// out a move.
    pub fn scratch_copy(&self) -> Board {
        Board {
            squares: self.squares.clone(),
            cursor: Coord::default(),
            highlighted: Vec::new(),
            kings: self.kings,
            en_passant_target: self.en_passant_target,
            rules: self.rules,
            events: Vec::new(),
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let from = self.cursor;
        self.cursor.add_wrapped(direction.delta());
        self.events.push(BoardEvent::CursorMoved {
            from,
            to: self.cursor,
        });
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn highlighted_squares(&self) -> &[Coord] {
        &self.highlighted
    }

    /// Replaces the highlighted set. The board keeps its own vector.
    pub fn set_highlighted_squares(&mut self, squares: Vec<Coord>) {
        assert!(
            squares.iter().all(Coord::is_in_bounds),
            "highlighted square out of bounds"
        );
        self.highlighted = squares;
        self.events.push(BoardEvent::HighlightsChanged);
    }

    /// Takes the redraw notifications queued since the last call.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }
}
