//! Piece kinds and their protocol tokens.
//!
//! A cell either holds nothing (no entry in the piece map) or exactly one
//! of the kinds below. The token codec matches the text interface: `j` and
//! `u` for the two obstacle kinds, a decimal index for player pieces.

use std::fmt;

/// The kind of a piece occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// A piece owned by the player with this index.
    Player(usize),
    /// An obstacle that may be jumped over but not landed on.
    Jumpable,
    /// An obstacle that blocks both landing and jumping.
    Unjumpable,
}

impl PieceKind {
    /// Whether a neighboring piece may leap over this one.
    pub const fn is_jump_passable(self) -> bool {
        !matches!(self, PieceKind::Unjumpable)
    }

    /// Parses a protocol token: `j`, `u`, or a decimal player index.
    pub fn from_token(token: &str) -> Option<PieceKind> {
        match token {
            "j" => Some(PieceKind::Jumpable),
            "u" => Some(PieceKind::Unjumpable),
            _ => token.parse::<usize>().ok().map(PieceKind::Player),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Player(i) => write!(f, "{}", i),
            PieceKind::Jumpable => write!(f, "j"),
            PieceKind::Unjumpable => write!(f, "u"),
        }
    }
}
