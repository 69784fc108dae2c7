//! Fluent builder for constructing arbitrary positions.
//!
//! Used by tests and tools to set up positions piece by piece instead of
//! replaying a move sequence.
//!
//! # Example
//! ```
//! use emberhill::{Color, Coord, Piece, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece(Coord::new(4, 0), Color::White, Piece::King)
//!     .piece(Coord::new(4, 7), Color::Black, Piece::King)
//!     .piece(Coord::new(0, 1), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!position.legal_moves().is_empty());
//! ```

use crate::variant::Variant;
use crate::zobrist;

use super::types::{CastlingRights, Color, Coord, Piece};
use super::Position;

/// A fluent builder for [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Coord, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Coord>,
    variant: Variant,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            variant: Variant::Standard,
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, at: Coord, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != at);
        self.pieces.push((at, color, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set all four castling rights at once.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.castling.set(color, kingside);
        self
    }

    /// Set the en-passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Coord) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Set the game variant.
    #[must_use]
    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Build the position: compute material counts and the Zobrist hash,
    /// derive the endgame flag from the material on the board, and
    /// enumerate legal moves.
    #[must_use]
    pub fn build(self) -> Position {
        let mut pos = Position::empty(self.variant);
        for (at, color, piece) in self.pieces {
            pos.put_piece(at, color, piece);
        }

        pos.castling = self.castling;
        for color in Color::BOTH {
            for kingside in [true, false] {
                if pos.castling.has(color, kingside) {
                    zobrist::toggle_castling(&mut pos.hash, color, kingside);
                }
            }
        }

        pos.en_passant = self.en_passant;
        if let Some(ep) = pos.en_passant {
            zobrist::toggle_en_passant(&mut pos.hash, ep.file);
        }

        pos.side_to_move = self.side_to_move;
        if pos.side_to_move == Color::Black {
            zobrist::toggle_side(&mut pos.hash);
        }

        pos.endgame = Color::BOTH.iter().all(|&color| {
            let m = &pos.material[color.index()];
            m[Piece::Queen.index()] == 0
                || m[Piece::Knight.index()] + m[Piece::Bishop.index()] + m[Piece::Rook.index()] < 2
        });

        pos.moves = pos.enumerate_moves();
        pos.moves_enumerated = true;
        pos
    }
}
