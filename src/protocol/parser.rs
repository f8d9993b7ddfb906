//! Text command parser.
//!
//! Parses one line of the text interface into a structured `Command` for
//! the driver loop to dispatch on. Blank lines, unknown verbs, and
//! malformed arguments all parse to `None`; malformed arguments for known
//! verbs additionally log to stderr.

use crate::board::{Coord, PieceKind};

/// A parsed command of the text interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add every listed cell to the board: `boardadd <x> <y> [<x> <y>]...`.
    BoardAdd(Vec<Coord>),

    /// Remove one board cell: `boardremove <x> <y>`.
    BoardRemove(Coord),

    /// Remove every board cell: `boardclear`.
    BoardClear,

    /// Place a piece: `pieceadd <x> <y> <kind>` with kind `j`, `u`, or a
    /// player index.
    PieceAdd(Coord, PieceKind),

    /// Remove any piece at a cell: `pieceremove <x> <y>`.
    PieceRemove(Coord),

    /// Remove every piece: `piececlear`.
    PieceClear,

    /// Register players: `playeradd [n]`.
    PlayerAdd(usize),

    /// Remove the highest-indexed players: `playerpop [n]`.
    PlayerPop(usize),

    /// Advance the turn: `playernext`.
    PlayerNext,

    /// Hand the turn to a player: `playerset <i>`.
    PlayerSet(usize),

    /// Print the reachability tree of a cell: `paths <x> <y>`.
    Paths(Coord),

    /// Move the current player's piece: `move <x1> <y1> <x2> <y2>`.
    Move(Coord, Coord),

    /// Relocate a piece without legality checks:
    /// `moveforce <x1> <y1> <x2> <y2>`.
    MoveForce(Coord, Coord),

    /// Translate every stored coordinate: `shift <dx> <dy>`.
    Shift(i64, i64),

    /// Print the state dump.
    Show,

    /// Reset the session to an empty game.
    NewGame,

    /// Terminate the driver.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "boardclear" => Some(Command::BoardClear),
        "piececlear" => Some(Command::PieceClear),
        "playernext" => Some(Command::PlayerNext),
        "show" => Some(Command::Show),
        "newgame" => Some(Command::NewGame),
        "quit" => Some(Command::Quit),

        "boardadd" => parse_board_add(&tokens),
        "boardremove" => parse_cell(&tokens).map(Command::BoardRemove),
        "pieceadd" => parse_piece_add(&tokens),
        "pieceremove" => parse_cell(&tokens).map(Command::PieceRemove),
        "playeradd" => parse_count(&tokens).map(Command::PlayerAdd),
        "playerpop" => parse_count(&tokens).map(Command::PlayerPop),
        "playerset" => parse_index(&tokens).map(Command::PlayerSet),
        "paths" => parse_cell(&tokens).map(Command::Paths),
        "move" => parse_cell_pair(&tokens).map(|(from, to)| Command::Move(from, to)),
        "moveforce" => parse_cell_pair(&tokens).map(|(from, to)| Command::MoveForce(from, to)),
        "shift" => parse_shift(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

fn parse_i64(token: &str, verb: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("{}: invalid coordinate '{}'", verb, token);
            None
        }
    }
}

/// Parses `<verb> <x> <y>`.
fn parse_cell(tokens: &[&str]) -> Option<Coord> {
    if tokens.len() != 3 {
        eprintln!("{}: expected '{} <x> <y>'", tokens[0], tokens[0]);
        return None;
    }
    let x = parse_i64(tokens[1], tokens[0])?;
    let y = parse_i64(tokens[2], tokens[0])?;
    Some(Coord::new(x, y))
}

/// Parses `<verb> <x1> <y1> <x2> <y2>`.
fn parse_cell_pair(tokens: &[&str]) -> Option<(Coord, Coord)> {
    if tokens.len() != 5 {
        eprintln!("{}: expected '{} <x1> <y1> <x2> <y2>'", tokens[0], tokens[0]);
        return None;
    }
    let x1 = parse_i64(tokens[1], tokens[0])?;
    let y1 = parse_i64(tokens[2], tokens[0])?;
    let x2 = parse_i64(tokens[3], tokens[0])?;
    let y2 = parse_i64(tokens[4], tokens[0])?;
    Some((Coord::new(x1, y1), Coord::new(x2, y2)))
}

/// Parses `boardadd <x> <y> [<x> <y>]...` -- at least one pair.
fn parse_board_add(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens.len() % 2 == 0 {
        eprintln!("boardadd: expected 'boardadd <x> <y> [<x> <y>]...'");
        return None;
    }
    let mut cells = Vec::with_capacity((tokens.len() - 1) / 2);
    for pair in tokens[1..].chunks(2) {
        let x = parse_i64(pair[0], "boardadd")?;
        let y = parse_i64(pair[1], "boardadd")?;
        cells.push(Coord::new(x, y));
    }
    Some(Command::BoardAdd(cells))
}

/// Parses `pieceadd <x> <y> <kind>`.
fn parse_piece_add(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("pieceadd: expected 'pieceadd <x> <y> <kind>'");
        return None;
    }
    let x = parse_i64(tokens[1], "pieceadd")?;
    let y = parse_i64(tokens[2], "pieceadd")?;
    match PieceKind::from_token(tokens[3]) {
        Some(kind) => Some(Command::PieceAdd(Coord::new(x, y), kind)),
        None => {
            eprintln!("pieceadd: unknown kind '{}'", tokens[3]);
            None
        }
    }
}

/// Parses `playeradd [n]` / `playerpop [n]`; the count defaults to 1.
fn parse_count(tokens: &[&str]) -> Option<usize> {
    match tokens {
        [_] => Some(1),
        [verb, count] => match count.parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("{}: invalid count '{}'", verb, count);
                None
            }
        },
        _ => {
            eprintln!("{}: expected '{} [n]'", tokens[0], tokens[0]);
            None
        }
    }
}

/// Parses `playerset <i>`.
fn parse_index(tokens: &[&str]) -> Option<usize> {
    if tokens.len() != 2 {
        eprintln!("playerset: expected 'playerset <i>'");
        return None;
    }
    match tokens[1].parse::<usize>() {
        Ok(i) => Some(i),
        Err(_) => {
            eprintln!("playerset: invalid index '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `shift <dx> <dy>`.
fn parse_shift(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("shift: expected 'shift <dx> <dy>'");
        return None;
    }
    let dx = parse_i64(tokens[1], "shift")?;
    let dy = parse_i64(tokens[2], "shift")?;
    Some(Command::Shift(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i64, y: i64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("boardclear"), Some(Command::BoardClear));
        assert_eq!(parse_command("piececlear"), Some(Command::PieceClear));
        assert_eq!(parse_command("playernext"), Some(Command::PlayerNext));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  show  "), Some(Command::Show));
        assert_eq!(parse_command(" boardadd 0 0 "), Some(Command::BoardAdd(vec![c(0, 0)])));
    }

    #[test]
    fn parse_boardadd_single_and_bulk() {
        assert_eq!(
            parse_command("boardadd 0 0"),
            Some(Command::BoardAdd(vec![c(0, 0)]))
        );
        assert_eq!(
            parse_command("boardadd -1 2 0 0 3 -4"),
            Some(Command::BoardAdd(vec![c(-1, 2), c(0, 0), c(3, -4)]))
        );
    }

    #[test]
    fn parse_boardadd_malformed_returns_none() {
        assert_eq!(parse_command("boardadd"), None);
        assert_eq!(parse_command("boardadd 0"), None);
        assert_eq!(parse_command("boardadd 0 0 1"), None);
        assert_eq!(parse_command("boardadd 0 zero"), None);
        assert_eq!(parse_command("boardadd 0.5 1"), None);
    }

    #[test]
    fn parse_boardremove_cell() {
        assert_eq!(
            parse_command("boardremove -3 7"),
            Some(Command::BoardRemove(c(-3, 7)))
        );
        assert_eq!(parse_command("boardremove 1"), None);
        assert_eq!(parse_command("boardremove 1 2 3"), None);
    }

    #[test]
    fn parse_pieceadd_all_kinds() {
        assert_eq!(
            parse_command("pieceadd 0 0 j"),
            Some(Command::PieceAdd(c(0, 0), PieceKind::Jumpable))
        );
        assert_eq!(
            parse_command("pieceadd 1 -1 u"),
            Some(Command::PieceAdd(c(1, -1), PieceKind::Unjumpable))
        );
        assert_eq!(
            parse_command("pieceadd 2 2 0"),
            Some(Command::PieceAdd(c(2, 2), PieceKind::Player(0)))
        );
        assert_eq!(
            parse_command("pieceadd 2 2 12"),
            Some(Command::PieceAdd(c(2, 2), PieceKind::Player(12)))
        );
    }

    #[test]
    fn parse_pieceadd_malformed_returns_none() {
        assert_eq!(parse_command("pieceadd 0 0"), None);
        assert_eq!(parse_command("pieceadd 0 0 x"), None);
        assert_eq!(parse_command("pieceadd 0 0 -1"), None);
        assert_eq!(parse_command("pieceadd 0 0 j extra"), None);
    }

    #[test]
    fn parse_player_counts_default_to_one() {
        assert_eq!(parse_command("playeradd"), Some(Command::PlayerAdd(1)));
        assert_eq!(parse_command("playeradd 4"), Some(Command::PlayerAdd(4)));
        assert_eq!(parse_command("playerpop"), Some(Command::PlayerPop(1)));
        assert_eq!(parse_command("playerpop 2"), Some(Command::PlayerPop(2)));
        // Zero parses; the core rejects it with its own error.
        assert_eq!(parse_command("playeradd 0"), Some(Command::PlayerAdd(0)));
    }

    #[test]
    fn parse_player_counts_malformed_returns_none() {
        assert_eq!(parse_command("playeradd -1"), None);
        assert_eq!(parse_command("playeradd two"), None);
        assert_eq!(parse_command("playeradd 1 2"), None);
    }

    #[test]
    fn parse_playerset_index() {
        assert_eq!(parse_command("playerset 3"), Some(Command::PlayerSet(3)));
        assert_eq!(parse_command("playerset"), None);
        assert_eq!(parse_command("playerset -1"), None);
    }

    #[test]
    fn parse_paths_cell() {
        assert_eq!(parse_command("paths -1 2"), Some(Command::Paths(c(-1, 2))));
        assert_eq!(parse_command("paths"), None);
    }

    #[test]
    fn parse_move_and_moveforce() {
        assert_eq!(
            parse_command("move 0 0 2 0"),
            Some(Command::Move(c(0, 0), c(2, 0)))
        );
        assert_eq!(
            parse_command("moveforce -1 0 4 4"),
            Some(Command::MoveForce(c(-1, 0), c(4, 4)))
        );
        assert_eq!(parse_command("move 0 0 2"), None);
        assert_eq!(parse_command("moveforce 0 0 2 0 9"), None);
    }

    #[test]
    fn parse_shift_offsets() {
        assert_eq!(parse_command("shift 5 -3"), Some(Command::Shift(5, -3)));
        assert_eq!(parse_command("shift 5"), None);
    }
}
