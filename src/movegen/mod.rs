//! One-move reachability.
//!
//! A piece moves either one step to an adjacent free cell or by a chain of
//! jumps, each leaping over a jump-passable piece and landing two cells
//! further. The two shapes are searched independently because the rules
//! never mix a plain step into a jump chain; `paths` runs both and returns
//! the combined predecessor tree.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::board::coord::{Coord, DIRECTIONS};
use crate::board::piece::PieceKind;
use crate::board::state::GameState;
use crate::error::GameError;

/// Predecessor tree of every cell reachable from a source in one move.
///
/// The source maps to no predecessor; every other reached cell maps to the
/// cell it was entered from. Where several equally short jump chains reach
/// the same cell, which chain is recorded is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    source: Coord,
    parent: HashMap<Coord, Option<Coord>>,
}

impl PathTree {
    fn new(source: Coord) -> Self {
        let mut parent = HashMap::new();
        parent.insert(source, None);
        PathTree { source, parent }
    }

    /// The cell the tree was grown from.
    pub fn source(&self) -> Coord {
        self.source
    }

    /// Whether `cell` was reached; the source itself always is.
    pub fn contains(&self, cell: Coord) -> bool {
        self.parent.contains_key(&cell)
    }

    /// The predecessor entry of a reached cell: `Some(None)` for the
    /// source, `Some(Some(prev))` for other reached cells, `None` for
    /// cells outside the tree.
    pub fn predecessor(&self, cell: Coord) -> Option<Option<Coord>> {
        self.parent.get(&cell).copied()
    }

    /// Iterates over every reached cell with its predecessor.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Coord>)> + '_ {
        self.parent.iter().map(|(&cell, &prev)| (cell, prev))
    }

    /// Number of reached cells, source included.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: the source is reached by construction.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The source-to-`dest` cell sequence, both endpoints included, or
    /// `None` when `dest` was not reached.
    pub fn path_to(&self, dest: Coord) -> Option<Vec<Coord>> {
        if !self.parent.contains_key(&dest) {
            return None;
        }
        let mut path = vec![dest];
        let mut cell = dest;
        while let Some(&Some(prev)) = self.parent.get(&cell) {
            path.push(prev);
            cell = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes every cell reachable in one move from `source`.
///
/// The source need not hold a piece; it is always in the tree. Fails with
/// `OutOfBoard` when the source is not a board cell.
pub fn paths(state: &GameState, source: Coord) -> Result<PathTree, GameError> {
    if !state.on_board(source) {
        return Err(GameError::OutOfBoard(source));
    }

    let mut tree = PathTree::new(source);

    // Jump chains, breadth-first over landing cells: every recorded entry
    // is therefore a shortest chain's predecessor. The membership check
    // keeps each landing cell unique and bounds the search by the board.
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(cell) = queue.pop_front() {
        for dir in DIRECTIONS {
            let over = cell + dir;
            let goal = over + dir;
            if !state.is_jump_passable(over)
                || !state.on_board(goal)
                || state.piece_at(goal).is_some()
                || tree.contains(goal)
            {
                continue;
            }
            tree.parent.insert(goal, Some(cell));
            queue.push_back(goal);
        }
    }

    // Plain steps are the other legal move shape. A free adjacent cell is
    // always enterable directly, so the step entry overwrites whatever
    // predecessor the jump search may have recorded there.
    for dir in DIRECTIONS {
        let goal = source + dir;
        if state.on_board(goal) && state.piece_at(goal).is_none() {
            tree.parent.insert(goal, Some(source));
        }
    }

    Ok(tree)
}

/// Picks a uniformly random legal move for the current player: first one
/// of the player's pieces that can move at all, then one of its reachable
/// destinations.
///
/// Returns `None` while no player is registered or no piece of the current
/// player has a destination. Candidates are sorted so the choice depends
/// only on the RNG seed, not on hash order.
pub fn random_move(state: &GameState, rng: &mut impl Rng) -> Option<(Coord, Coord)> {
    let current = state.current_player()?;

    let mut sources: Vec<Coord> = state
        .pieces()
        .into_iter()
        .filter(|&(_, kind)| kind == PieceKind::Player(current))
        .map(|(cell, _)| cell)
        .collect();
    sources.sort();

    let mut movable: Vec<(Coord, Vec<Coord>)> = Vec::new();
    for source in sources {
        let Ok(tree) = paths(state, source) else {
            continue;
        };
        let mut dests: Vec<Coord> = tree
            .iter()
            .map(|(cell, _)| cell)
            .filter(|&cell| cell != source)
            .collect();
        dests.sort();
        if !dests.is_empty() {
            movable.push((source, dests));
        }
    }

    if movable.is_empty() {
        return None;
    }
    let (source, dests) = &movable[rng.gen_range(0..movable.len())];
    let dest = dests[rng.gen_range(0..dests.len())];
    Some((*source, dest))
}
