//! Position module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal-move generation, castling, en passant, promotion
//! - `zobrist.rs` - Hash maintenance, transpositions, repetition draws
//! - `eval.rs` - Static evaluation and terminal detection
//! - `search.rs` - Search behavior and alpha-beta equivalence
//! - `variants.rs` - Atomic and King-of-the-Hill rules
//! - `proptest.rs` - Property-based invariants over random games

mod movegen;
mod search;

use crate::notation::parse_san;
use crate::position::{Coord, Move, Position};

/// Parse and apply one SAN move, panicking on anything illegal.
pub(crate) fn apply_san(position: &Position, san: &str) -> Position {
    let mv = parse_san(position, san).unwrap_or_else(|err| panic!("{san}: {err}"));
    position.derive(mv)
}

/// Play a SAN move sequence from the starting position.
pub(crate) fn play(sans: &[&str]) -> Position {
    let mut position = Position::new();
    for san in sans {
        position = apply_san(&position, san);
    }
    position
}

pub(crate) fn coord(name: &str) -> Coord {
    name.parse().unwrap_or_else(|err| panic!("{name}: {err}"))
}

/// Look up a legal move by its squares.
pub(crate) fn find_move(position: &Position, from: &str, to: &str) -> Move {
    let from = coord(from);
    let to = coord(to);
    position
        .legal_moves()
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("expected legal move {from}{to}"))
}

/// True when a move with the given squares is legal.
pub(crate) fn has_move(position: &Position, from: &str, to: &str) -> bool {
    let from = coord(from);
    let to = coord(to);
    position
        .legal_moves()
        .iter()
        .any(|m| m.from == from && m.to == to)
}
