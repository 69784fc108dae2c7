//! Sliding-piece move generation: bishops, rooks, and both halves of the
//! queen.

use super::super::types::{Coord, Move};
use super::super::Position;
use super::{DIAGONALS, ORTHOGONALS};

impl Position {
    pub(super) fn diagonal_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        self.ray_moves(from, &DIAGONALS, moves);
    }

    pub(super) fn orthogonal_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        self.ray_moves(from, &ORTHOGONALS, moves);
    }

    /// Cast rays in each direction, stopping after a capture or before a
    /// friendly piece.
    fn ray_moves(&self, from: Coord, directions: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dfile, drank) in directions {
            let mut to = from.offset(dfile, drank);
            while self.can_move_to(to) {
                moves.push(Move::new(from, to));
                if self.piece_at(to).is_some() {
                    break;
                }
                to = to.offset(dfile, drank);
            }
        }
    }
}
