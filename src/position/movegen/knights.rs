//! Knight move generation.

use super::super::types::{Coord, Move};
use super::super::Position;

/// The eight L-shaped knight offsets.
pub(super) const JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Position {
    pub(super) fn knight_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        for (dfile, drank) in JUMPS {
            let to = from.offset(dfile, drank);
            if self.can_move_to(to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
