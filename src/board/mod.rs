//! Board representation and game-state types.
//!
//! Contains the lattice coordinates, piece kinds, and the mutable
//! `GameState` holding board cells, occupancy, and the turn ledger.

pub mod coord;
pub mod piece;
pub mod state;

pub use coord::{Coord, DIRECTIONS};
pub use piece::PieceKind;
pub use state::GameState;
