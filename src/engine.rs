//! Session state for the text interface.
//!
//! Owns one `GameState` and applies parsed commands against it, writing
//! any responses to the caller's sink. Mutating commands are silent on
//! success; core failures surface as single `error:` lines so the driving
//! layer can relay them verbatim.

use std::io::Write;

use crate::board::{Coord, GameState, PieceKind};
use crate::error::GameError;

/// Holds the mutable state of one interactive session.
pub struct Session {
    game: GameState,
}

impl Session {
    /// Creates a session over an empty game.
    pub fn new() -> Self {
        Session {
            game: GameState::new(),
        }
    }

    /// Read access to the underlying game, for embedding callers.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Resets the session to an empty game.
    pub fn reset(&mut self) {
        self.game = GameState::new();
    }

    fn report<W: Write>(result: Result<(), GameError>, out: &mut W) {
        if let Err(e) = result {
            writeln!(out, "error: {}", e).unwrap();
            out.flush().unwrap();
        }
    }

    /// Handles `boardadd`.
    pub fn board_add(&mut self, cells: Vec<Coord>) {
        self.game.board_add_many(cells);
    }

    /// Handles `boardremove`.
    pub fn board_remove<W: Write>(&mut self, cell: Coord, out: &mut W) {
        Self::report(self.game.board_remove(cell), out);
    }

    /// Handles `boardclear`.
    pub fn board_clear<W: Write>(&mut self, out: &mut W) {
        Self::report(self.game.board_remove_all().map(|_| ()), out);
    }

    /// Handles `pieceadd`.
    pub fn piece_add<W: Write>(&mut self, cell: Coord, kind: PieceKind, out: &mut W) {
        Self::report(self.game.piece_add(cell, kind), out);
    }

    /// Handles `pieceremove`.
    pub fn piece_remove(&mut self, cell: Coord) {
        self.game.piece_remove(cell);
    }

    /// Handles `piececlear`.
    pub fn piece_clear(&mut self) {
        self.game.piece_remove_all();
    }

    /// Handles `playeradd`.
    pub fn player_add<W: Write>(&mut self, n: usize, out: &mut W) {
        Self::report(self.game.player_add(n), out);
    }

    /// Handles `playerpop`.
    pub fn player_pop<W: Write>(&mut self, n: usize, out: &mut W) {
        Self::report(self.game.player_pop(n).map(|_| ()), out);
    }

    /// Handles `playernext`.
    pub fn player_next(&mut self) {
        self.game.player_next();
    }

    /// Handles `playerset`.
    pub fn player_set<W: Write>(&mut self, i: usize, out: &mut W) {
        Self::report(self.game.player_set(i), out);
    }

    /// Handles `paths`: one `cell <- predecessor` line per reached cell,
    /// sorted by cell, with `-` for the source's missing predecessor.
    pub fn paths<W: Write>(&self, cell: Coord, out: &mut W) {
        match self.game.paths(cell) {
            Ok(tree) => {
                let mut entries: Vec<(Coord, Option<Coord>)> = tree.iter().collect();
                entries.sort();
                for (reached, prev) in entries {
                    match prev {
                        Some(prev) => writeln!(out, "{} <- {}", reached, prev).unwrap(),
                        None => writeln!(out, "{} <- -", reached).unwrap(),
                    }
                }
            }
            Err(e) => writeln!(out, "error: {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `move`: prints the travelled path on success.
    pub fn move_piece<W: Write>(&mut self, from: Coord, to: Coord, out: &mut W) {
        match self.game.move_piece(from, to) {
            Ok(path) => {
                let rendered: Vec<String> = path.iter().map(|cell| cell.to_string()).collect();
                writeln!(out, "path = {}", rendered.join(" -> ")).unwrap();
            }
            Err(e) => writeln!(out, "error: {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `moveforce`.
    pub fn move_force<W: Write>(&mut self, from: Coord, to: Coord, out: &mut W) {
        Self::report(self.game.move_force(from, to), out);
    }

    /// Handles `shift`.
    pub fn shift(&mut self, dx: i64, dy: i64) {
        self.game.shift(dx, dy);
    }

    /// Handles `show`: the sorted state dump.
    pub fn show<W: Write>(&self, out: &mut W) {
        write!(out, "{}", self.game).unwrap();
        out.flush().unwrap();
    }
}
