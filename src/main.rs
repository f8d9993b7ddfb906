//! tiaoqi -- a rules engine for peg-jumping games on arbitrary boards.
//!
//! This binary reads line-oriented commands from stdin and writes
//! responses to stdout; see `protocol::parser` for the command grammar.

use std::io::{self, BufRead};

use tiaoqi::engine::Session;
use tiaoqi::protocol::parser::{parse_command, Command};

/// Runs the main command loop, reading from stdin and writing responses
/// to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::BoardAdd(cells) => session.board_add(cells),
            Command::BoardRemove(cell) => session.board_remove(cell, &mut out),
            Command::BoardClear => session.board_clear(&mut out),
            Command::PieceAdd(cell, kind) => session.piece_add(cell, kind, &mut out),
            Command::PieceRemove(cell) => session.piece_remove(cell),
            Command::PieceClear => session.piece_clear(),
            Command::PlayerAdd(n) => session.player_add(n, &mut out),
            Command::PlayerPop(n) => session.player_pop(n, &mut out),
            Command::PlayerNext => session.player_next(),
            Command::PlayerSet(i) => session.player_set(i, &mut out),
            Command::Paths(cell) => session.paths(cell, &mut out),
            Command::Move(from, to) => session.move_piece(from, to, &mut out),
            Command::MoveForce(from, to) => session.move_force(from, to, &mut out),
            Command::Shift(dx, dy) => session.shift(dx, dy),
            Command::Show => session.show(&mut out),
            Command::NewGame => session.reset(),
            Command::Quit => break,
        }
    }
}
