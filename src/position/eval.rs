//! Static position evaluation.
//!
//! Scores are signed centipawns from White's perspective: material plus
//! piece-square bonuses, a pawn-shelter bonus for each king in the
//! middlegame, and the bishop pair. Terminal positions collapse to the
//! sentinel scores below. The result is cached on the position.

use crate::variant::Variant;

use super::pst;
use super::types::{Color, Coord, Piece};
use super::Position;

/// Best possible score: Black is mated or loses by variant rule.
pub const SCORE_MAX: i32 = i16::MAX as i32;
/// Worst possible score: White is mated or loses by variant rule.
pub const SCORE_MIN: i32 = i16::MIN as i32;

const BISHOP_PAIR_BONUS: i32 = 20;
const KING_SHELTER_BONUS: i32 = 50;

/// The winning sentinel for a color.
const fn win_for(color: Color) -> i32 {
    match color {
        Color::White => SCORE_MAX,
        Color::Black => SCORE_MIN,
    }
}

/// The losing sentinel for a color.
const fn loss_for(color: Color) -> i32 {
    match color {
        Color::White => SCORE_MIN,
        Color::Black => SCORE_MAX,
    }
}

impl Position {
    /// Evaluate the position, caching the result. Repetition draws carry
    /// a pre-seeded cache of zero from construction.
    pub fn evaluate(&mut self) -> i32 {
        if let Some(score) = self.eval {
            return score;
        }
        let score = self.static_eval();
        self.eval = Some(score);
        score
    }

    fn static_eval(&self) -> i32 {
        let to_move = self.side_to_move;

        // In Atomic the king itself can be blown off the board; a side
        // that must move without one has already lost.
        if self.variant == Variant::Atomic
            && self.material[to_move.index()][Piece::King.index()] == 0
        {
            return loss_for(to_move);
        }

        // King of the Hill ends the moment either king stands centrally,
        // regardless of anything else on the board.
        if self.variant == Variant::Hill {
            for color in Color::BOTH {
                if let Some(king) = self.king_coord(color) {
                    if king.is_central() {
                        return win_for(color);
                    }
                }
            }
        }

        // An enumerated position with no moves is checkmate or stalemate.
        if self.moves_enumerated && self.moves.is_empty() {
            if let Some(king) = self.king_coord(to_move) {
                if !self.square_attacked(king) {
                    return 0;
                }
                return loss_for(to_move);
            }
        }

        let mut score = [0i32; 2];
        for rank in 0..8 {
            for file in 0..8 {
                let at = Coord::new(file, rank);
                let Some((color, piece)) = self.piece_at(at) else {
                    continue;
                };
                score[color.index()] +=
                    piece.value() + pst::bonus(piece, color, at, self.endgame);

                if piece == Piece::King && !self.endgame {
                    score[color.index()] += self.king_shelter(at, color);
                }
            }
        }

        for color in Color::BOTH {
            if self.material[color.index()][Piece::Bishop.index()] == 2 {
                score[color.index()] += BISHOP_PAIR_BONUS;
            }
        }

        score[Color::White.index()] - score[Color::Black.index()]
    }

    /// Middlegame king safety: one bonus if a friendly pawn stands within
    /// the two squares directly in front of the king.
    fn king_shelter(&self, king: Coord, color: Color) -> i32 {
        let forward = color.pawn_direction();
        for step in 1..=2 {
            let sq = king.offset(0, forward * step);
            if !sq.on_board() {
                break;
            }
            if self.piece_at(sq) == Some((color, Piece::Pawn)) {
                return KING_SHELTER_BONUS;
            }
        }
        0
    }
}
