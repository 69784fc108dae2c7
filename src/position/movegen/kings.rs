//! King move generation, including castling.

use super::super::types::{Coord, Move};
use super::super::Position;

impl Position {
    pub(super) fn king_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        for drank in -1..=1 {
            for dfile in -1..=1 {
                if dfile == 0 && drank == 0 {
                    continue;
                }
                let to = from.offset(dfile, drank);
                if self.can_move_to(to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        self.castling_moves(from, moves);
    }

    /// Castling is a two-file king move. It requires the right to still be
    /// held, empty squares between king and rook, and the king's current,
    /// crossed, and destination squares to all be safe.
    fn castling_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let back = color.back_rank();

        if self.castling.has(color, false)
            && self.piece_at(Coord::new(1, back)).is_none()
            && self.piece_at(Coord::new(2, back)).is_none()
            && self.piece_at(Coord::new(3, back)).is_none()
            && !self.square_attacked(Coord::new(2, back))
            && !self.square_attacked(Coord::new(3, back))
            && !self.square_attacked(Coord::new(4, back))
        {
            moves.push(Move::new(from, Coord::new(2, back)));
        }

        if self.castling.has(color, true)
            && self.piece_at(Coord::new(5, back)).is_none()
            && self.piece_at(Coord::new(6, back)).is_none()
            && !self.square_attacked(Coord::new(4, back))
            && !self.square_attacked(Coord::new(5, back))
            && !self.square_attacked(Coord::new(6, back))
        {
            moves.push(Move::new(from, Coord::new(6, back)));
        }
    }
}
