//! Pawn move generation.

use super::super::types::{Coord, Move};
use super::super::Position;

impl Position {
    pub(super) fn pawn_moves(&self, from: Coord, moves: &mut Vec<Move>) {
        let forward = self.side_to_move.pawn_direction();

        let one_ahead = from.offset(0, forward);
        if one_ahead.on_board() && self.piece_at(one_ahead).is_none() {
            moves.push(Move::new(from, one_ahead));
            let two_ahead = from.offset(0, 2 * forward);
            if from.rank == self.side_to_move.pawn_start_rank()
                && self.piece_at(two_ahead).is_none()
            {
                moves.push(Move::new(from, two_ahead));
            }
        }

        for dfile in [-1, 1] {
            let target = from.offset(dfile, forward);
            if !target.on_board() {
                continue;
            }
            let enemy_occupied = matches!(
                self.piece_at(target),
                Some((color, _)) if color != self.side_to_move
            );
            if enemy_occupied || self.en_passant == Some(target) {
                moves.push(Move::new(from, target));
            }
        }
    }
}
