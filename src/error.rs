//! Error taxonomy for the rules engine.
//!
//! Every mutating operation validates fully before touching state, so a
//! returned error implies the game is exactly as it was. The documented
//! no-ops (removing an absent piece or board cell, rotating or popping an
//! empty player ledger) are successes, not errors.

use thiserror::Error;

use crate::board::coord::Coord;

/// Errors surfaced by the game-state operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The referenced cell is not on the board.
    #[error("cell {0} is not on the board")]
    OutOfBoard(Coord),

    /// The referenced cell already holds a piece.
    #[error("cell {0} holds a piece")]
    OccupiedCell(Coord),

    /// A piece or operation names a player index that is not registered.
    #[error("player {0} is not registered")]
    UnknownPlayer(usize),

    /// A move was requested from a cell with no piece on it.
    #[error("no piece at {0}")]
    EmptySource(Coord),

    /// A move was requested for an obstacle piece.
    #[error("piece at {0} is not a player piece")]
    NotAPlayerPiece(Coord),

    /// A move was requested for a piece outside its owner's turn.
    #[error("piece at {at} belongs to player {owner}, who is not the current player")]
    WrongTurn { at: Coord, owner: usize },

    /// The move destination is not a board cell.
    #[error("destination {0} is not on the board")]
    DestinationOffBoard(Coord),

    /// The move destination is on the board but not reachable in one move.
    #[error("no route from {from} to {to}")]
    NoRoute { from: Coord, to: Coord },

    /// A popped player still owns pieces; the lowest such index is reported.
    #[error("player {0} still owns pieces on the board")]
    PlayersOwnPieces(usize),

    /// A player-count argument was not positive.
    #[error("player count argument must be positive, got {0}")]
    InvalidCount(usize),
}
