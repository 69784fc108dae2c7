//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A move as a (from, to) coordinate pair.
///
/// Special moves are encoded implicitly: castling is a king move of two
/// files, en passant is a diagonal pawn move onto an empty square, and a
/// pawn reaching the last rank always promotes to a queen. Interpreting a
/// `Move` therefore requires the position it was generated for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// File displacement of the move.
    #[inline]
    #[must_use]
    pub(crate) const fn file_delta(self) -> i8 {
        self.to.file - self.from.file
    }

    /// Rank displacement of the move.
    #[inline]
    #[must_use]
    pub(crate) const fn rank_delta(self) -> i8 {
        self.to.rank - self.from.rank
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
