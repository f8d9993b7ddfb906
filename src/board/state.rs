//! Game state: board cells, piece occupancy, and the turn ledger.
//!
//! One `GameState` is one game instance. The board is an arbitrary set of
//! lattice cells that can grow and shrink during play; pieces are keyed by
//! cell; the ledger tracks how many players exist and whose turn it is.
//! All mutation goes through the named operations, and accessors hand out
//! owned snapshots, so the invariants (no piece off the board, at most one
//! piece per cell, player pieces only for registered players) cannot be
//! broken from outside the crate.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::board::coord::Coord;
use crate::board::piece::PieceKind;
use crate::error::GameError;
use crate::movegen::{self, PathTree};

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: HashSet<Coord>,
    pieces: HashMap<Coord, PieceKind>,
    /// Cells holding a piece that can be leapt over. Derived from `pieces`
    /// and rebuilt after every piece mutation; never authoritative.
    jump_passable: HashSet<Coord>,
    player_count: usize,
    /// `None` exactly while `player_count` is zero.
    current_player: Option<usize>,
}

impl GameState {
    /// Creates an empty game: no cells, no pieces, no players.
    pub fn new() -> Self {
        GameState {
            board: HashSet::new(),
            pieces: HashMap::new(),
            jump_passable: HashSet::new(),
            player_count: 0,
            current_player: None,
        }
    }

    fn rebuild_cache(&mut self) {
        self.jump_passable = self
            .pieces
            .iter()
            .filter(|(_, kind)| kind.is_jump_passable())
            .map(|(&cell, _)| cell)
            .collect();
    }

    // ---- board store ----

    /// Adds a cell to the board. Idempotent when the cell is present.
    pub fn board_add(&mut self, cell: Coord) {
        self.board.insert(cell);
    }

    /// Adds every cell in `cells` to the board.
    pub fn board_add_many<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Coord>,
    {
        self.board.extend(cells);
    }

    /// Removes a cell from the board; no-op when it was never added.
    ///
    /// Fails with `OccupiedCell` while a piece sits on the cell.
    pub fn board_remove(&mut self, cell: Coord) -> Result<(), GameError> {
        if self.pieces.contains_key(&cell) {
            return Err(GameError::OccupiedCell(cell));
        }
        self.board.remove(&cell);
        Ok(())
    }

    /// Removes every board cell matching `pred`; returns how many went.
    ///
    /// Occupied cells are checked up front: if any piece sits on a matching
    /// cell the call fails with `OccupiedCell` and the board is untouched.
    pub fn board_remove_where<F>(&mut self, pred: F) -> Result<usize, GameError>
    where
        F: Fn(Coord) -> bool,
    {
        if let Some(cell) = self.pieces.keys().copied().find(|&c| pred(c)) {
            return Err(GameError::OccupiedCell(cell));
        }
        let before = self.board.len();
        self.board.retain(|&c| !pred(c));
        Ok(before - self.board.len())
    }

    /// Removes every board cell; fails with `OccupiedCell` while any piece
    /// remains.
    pub fn board_remove_all(&mut self) -> Result<usize, GameError> {
        self.board_remove_where(|_| true)
    }

    /// Owned snapshot of the board cells.
    pub fn board(&self) -> HashSet<Coord> {
        self.board.clone()
    }

    /// Whether `cell` is on the board.
    pub fn on_board(&self, cell: Coord) -> bool {
        self.board.contains(&cell)
    }

    // ---- piece store ----

    /// Places a piece on an empty board cell.
    ///
    /// Fails with `OutOfBoard` off the board, `OccupiedCell` on a taken
    /// cell, and `UnknownPlayer` when a player piece names an index at or
    /// above the player count.
    pub fn piece_add(&mut self, cell: Coord, kind: PieceKind) -> Result<(), GameError> {
        if !self.board.contains(&cell) {
            return Err(GameError::OutOfBoard(cell));
        }
        if self.pieces.contains_key(&cell) {
            return Err(GameError::OccupiedCell(cell));
        }
        if let PieceKind::Player(index) = kind {
            if index >= self.player_count {
                return Err(GameError::UnknownPlayer(index));
            }
        }
        self.pieces.insert(cell, kind);
        self.rebuild_cache();
        Ok(())
    }

    /// Removes and returns any piece at `cell`. Never fails.
    pub fn piece_remove(&mut self, cell: Coord) -> Option<PieceKind> {
        let removed = self.pieces.remove(&cell);
        if removed.is_some() {
            self.rebuild_cache();
        }
        removed
    }

    /// Removes every piece matching `pred`; returns how many went.
    pub fn piece_remove_where<F>(&mut self, pred: F) -> usize
    where
        F: Fn(Coord, PieceKind) -> bool,
    {
        let before = self.pieces.len();
        self.pieces.retain(|&cell, &mut kind| !pred(cell, kind));
        let removed = before - self.pieces.len();
        if removed > 0 {
            self.rebuild_cache();
        }
        removed
    }

    /// Removes every piece; returns how many went.
    pub fn piece_remove_all(&mut self) -> usize {
        self.piece_remove_where(|_, _| true)
    }

    /// Owned snapshot of the piece map.
    pub fn pieces(&self) -> HashMap<Coord, PieceKind> {
        self.pieces.clone()
    }

    /// The piece at `cell`, if any.
    pub fn piece_at(&self, cell: Coord) -> Option<PieceKind> {
        self.pieces.get(&cell).copied()
    }

    /// Whether `cell` holds a piece that can be leapt over.
    pub fn is_jump_passable(&self, cell: Coord) -> bool {
        self.jump_passable.contains(&cell)
    }

    // ---- turn & player ledger ----

    /// Registers `n` new players; the first registration makes player 0
    /// the current player. Fails with `InvalidCount` when `n` is zero.
    pub fn player_add(&mut self, n: usize) -> Result<(), GameError> {
        if n < 1 {
            return Err(GameError::InvalidCount(n));
        }
        self.player_count += n;
        if self.current_player.is_none() {
            self.current_player = Some(0);
        }
        Ok(())
    }

    /// Advances the turn round-robin; no-op while no player exists.
    pub fn player_next(&mut self) {
        if let Some(current) = self.current_player {
            self.current_player = Some((current + 1) % self.player_count);
        }
    }

    /// Removes the `n` highest-indexed players, clamped to the ledger size;
    /// returns how many were removed. Fails with `InvalidCount` when `n` is
    /// zero, and with `PlayersOwnPieces` -- leaving everything unchanged --
    /// while any piece still references a removed index. The current player
    /// falls back to 0 when its index is removed, or to none at zero
    /// players.
    pub fn player_pop(&mut self, n: usize) -> Result<usize, GameError> {
        if n < 1 {
            return Err(GameError::InvalidCount(n));
        }
        let n = n.min(self.player_count);
        let survivors = self.player_count - n;
        let owner = self
            .pieces
            .values()
            .filter_map(|kind| match kind {
                PieceKind::Player(index) if *index >= survivors => Some(*index),
                _ => None,
            })
            .min();
        if let Some(owner) = owner {
            return Err(GameError::PlayersOwnPieces(owner));
        }
        self.player_count = survivors;
        match self.current_player {
            _ if survivors == 0 => self.current_player = None,
            Some(current) if current >= survivors => self.current_player = Some(0),
            _ => {}
        }
        Ok(n)
    }

    /// Hands the turn to player `i`. Fails with `UnknownPlayer` when `i`
    /// is not registered.
    pub fn player_set(&mut self, i: usize) -> Result<(), GameError> {
        if i >= self.player_count {
            return Err(GameError::UnknownPlayer(i));
        }
        self.current_player = Some(i);
        Ok(())
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Index of the player whose turn it is; `None` while no player exists.
    pub fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    // ---- moves ----

    /// Every cell reachable in one move from `source`; see
    /// [`movegen::paths`].
    pub fn paths(&self, source: Coord) -> Result<PathTree, GameError> {
        movegen::paths(self, source)
    }

    /// Moves the current player's piece from `from` to a reachable `to`,
    /// then hands the turn to the next player. Returns the cell sequence
    /// travelled, both endpoints included.
    ///
    /// Preconditions are checked in order: `from` must hold a piece
    /// (`EmptySource`) of player kind (`NotAPlayerPiece`) owned by the
    /// current player (`WrongTurn`); `to` must be a board cell
    /// (`DestinationOffBoard`), free, and present in the path tree of
    /// `from` (`NoRoute`). Nothing is mutated until every check passes.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<Vec<Coord>, GameError> {
        let kind = match self.pieces.get(&from) {
            Some(&kind) => kind,
            None => return Err(GameError::EmptySource(from)),
        };
        let owner = match kind {
            PieceKind::Player(index) => index,
            _ => return Err(GameError::NotAPlayerPiece(from)),
        };
        if self.current_player != Some(owner) {
            return Err(GameError::WrongTurn { at: from, owner });
        }

        let tree = self.paths(from)?;
        if !self.board.contains(&to) {
            return Err(GameError::DestinationOffBoard(to));
        }
        // The source is the only occupied cell in the tree, so the
        // occupancy check also rejects a move onto itself.
        if self.pieces.contains_key(&to) {
            return Err(GameError::NoRoute { from, to });
        }
        let path = match tree.path_to(to) {
            Some(path) => path,
            None => return Err(GameError::NoRoute { from, to }),
        };

        self.pieces.remove(&from);
        self.pieces.insert(to, kind);
        self.rebuild_cache();
        self.player_next();
        Ok(path)
    }

    /// Relocates the piece at `from` to the free board cell `to`, keeping
    /// its kind, without consulting reachability or the turn ledger.
    ///
    /// Fails with `OutOfBoard` when either endpoint is off the board,
    /// `EmptySource` when `from` holds no piece, and `OccupiedCell` when
    /// `to` is taken.
    pub fn move_force(&mut self, from: Coord, to: Coord) -> Result<(), GameError> {
        if !self.board.contains(&from) {
            return Err(GameError::OutOfBoard(from));
        }
        let kind = match self.pieces.get(&from) {
            Some(&kind) => kind,
            None => return Err(GameError::EmptySource(from)),
        };
        if !self.board.contains(&to) {
            return Err(GameError::OutOfBoard(to));
        }
        if self.pieces.contains_key(&to) {
            return Err(GameError::OccupiedCell(to));
        }
        self.pieces.remove(&from);
        self.pieces.insert(to, kind);
        self.rebuild_cache();
        Ok(())
    }

    // ---- miscellaneous ----

    /// Translates every stored coordinate by `(dx, dy)`.
    pub fn shift(&mut self, dx: i64, dy: i64) {
        let offset = Coord::new(dx, dy);
        self.board = self.board.iter().map(|&cell| cell + offset).collect();
        self.pieces = self
            .pieces
            .iter()
            .map(|(&cell, &kind)| (cell + offset, kind))
            .collect();
        self.rebuild_cache();
    }
}

impl fmt::Display for GameState {
    /// Debug dump consumed by the `show` command: sorted board, sorted
    /// pieces, then `player = (current: count)` with `-` for no player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<Coord> = self.board.iter().copied().collect();
        cells.sort();
        write!(f, "board =")?;
        for cell in cells {
            write!(f, " {}", cell)?;
        }
        writeln!(f)?;

        let mut pieces: Vec<(Coord, PieceKind)> =
            self.pieces.iter().map(|(&c, &k)| (c, k)).collect();
        pieces.sort_by_key(|&(cell, _)| cell);
        write!(f, "pieces =")?;
        for (cell, kind) in pieces {
            write!(f, " {}:{}", cell, kind)?;
        }
        writeln!(f)?;

        match self.current_player {
            Some(current) => writeln!(f, "player = ({}: {})", current, self.player_count),
            None => writeln!(f, "player = (-: {})", self.player_count),
        }
    }
}
