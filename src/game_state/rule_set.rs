/// Optional rules layered on top of plain piece movement.
///
/// Both default to off, which reproduces the classic behaviour of this game:
/// moves are not filtered for king safety and pawns never capture in passing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Drop moves that leave the mover's own king in check.
    pub king_safety: bool,
    /// Allow a pawn to capture a pawn that just advanced two squares past it.
    pub en_passant: bool,
}

impl RuleSet {
    pub const fn classic() -> Self {
        Self {
            king_safety: false,
            en_passant: false,
        }
    }

    pub const fn strict() -> Self {
        Self {
            king_safety: true,
            en_passant: true,
        }
    }
}
