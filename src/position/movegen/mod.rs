//! Legal-move enumeration.
//!
//! Generation runs in two passes: a mailbox scan collects pseudo-legal
//! moves per piece kind, then each candidate is applied to a scratch
//! successor and kept only if the mover's king survives unattacked. The
//! variant hooks live here too: a King-of-the-Hill game that is already
//! lost, or an Atomic side without a king, has no moves at all.

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::variant::Variant;

use super::types::{Color, Coord, Move, Piece};
use super::Position;

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Enumerate every legal move for the side to move.
    pub(crate) fn enumerate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(50);
        let mut king_present = false;

        for rank in 0..8 {
            for file in 0..8 {
                let from = Coord::new(file, rank);
                let Some((color, piece)) = self.piece_at(from) else {
                    continue;
                };
                if color != self.side_to_move {
                    // The hill is already taken: the game is lost and the
                    // loser has nothing to play.
                    if self.variant == Variant::Hill
                        && piece == Piece::King
                        && from.is_central()
                    {
                        return Vec::new();
                    }
                    continue;
                }
                match piece {
                    Piece::Pawn => self.pawn_moves(from, &mut moves),
                    Piece::Knight => self.knight_moves(from, &mut moves),
                    Piece::Bishop => self.diagonal_moves(from, &mut moves),
                    Piece::Rook => self.orthogonal_moves(from, &mut moves),
                    Piece::Queen => {
                        self.diagonal_moves(from, &mut moves);
                        self.orthogonal_moves(from, &mut moves);
                    }
                    Piece::King => {
                        self.king_moves(from, &mut moves);
                        king_present = true;
                    }
                }
            }
        }

        if !king_present {
            return Vec::new();
        }

        moves.retain(|&mv| self.is_legal(mv));
        moves
    }

    /// True when the target square is on the board and either empty or
    /// held by the enemy.
    pub(crate) fn can_move_to(&self, at: Coord) -> bool {
        if !at.on_board() {
            return false;
        }
        match self.piece_at(at) {
            None => true,
            Some((color, _)) => color != self.side_to_move,
        }
    }

    /// Whether a pseudo-legal move survives: the mover's king must still
    /// exist and stand unattacked afterwards. Removing the enemy king
    /// (possible only in Atomic) wins outright and is always legal.
    fn is_legal(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        let child = self.make_child(mv, false);
        if child.king_coord(mover.opponent()).is_none() {
            return true;
        }
        match child.king_coord(mover) {
            None => false,
            Some(king) => !child.square_attacked_by(king, mover.opponent()),
        }
    }

    /// Is the square attacked by the opponent of the side to move?
    pub(crate) fn square_attacked(&self, at: Coord) -> bool {
        self.square_attacked_by(at, self.side_to_move.opponent())
    }

    /// Is the square attacked by any piece of `attacker`? Scans sliding
    /// rays until the first occupied square, then the pawn capture
    /// squares, the knight jumps, and the adjacent kings.
    pub(crate) fn square_attacked_by(&self, at: Coord, attacker: Color) -> bool {
        for (dfile, drank) in DIAGONALS {
            if self.ray_hits(at, dfile, drank, attacker, Piece::Bishop) {
                return true;
            }
        }
        for (dfile, drank) in ORTHOGONALS {
            if self.ray_hits(at, dfile, drank, attacker, Piece::Rook) {
                return true;
            }
        }

        // Pawns capture toward their own forward direction, so the
        // attacker sits one rank behind the target along that direction.
        let forward = attacker.pawn_direction();
        for dfile in [-1, 1] {
            let sq = at.offset(dfile, -forward);
            if sq.on_board() && self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                return true;
            }
        }

        for (dfile, drank) in knights::JUMPS {
            let sq = at.offset(dfile, drank);
            if sq.on_board() && self.piece_at(sq) == Some((attacker, Piece::Knight)) {
                return true;
            }
        }

        for drank in -1..=1 {
            for dfile in -1..=1 {
                if dfile == 0 && drank == 0 {
                    continue;
                }
                let sq = at.offset(dfile, drank);
                if sq.on_board() && self.piece_at(sq) == Some((attacker, Piece::King)) {
                    return true;
                }
            }
        }

        false
    }

    /// Walk a ray from `at`; true when the first occupied square holds an
    /// attacker slider of the given kind (or a queen).
    fn ray_hits(&self, at: Coord, dfile: i8, drank: i8, attacker: Color, slider: Piece) -> bool {
        let mut sq = at.offset(dfile, drank);
        while sq.on_board() {
            match self.piece_at(sq) {
                None => sq = sq.offset(dfile, drank),
                Some((color, piece)) => {
                    return color == attacker && (piece == slider || piece == Piece::Queen);
                }
            }
        }
        false
    }
}
