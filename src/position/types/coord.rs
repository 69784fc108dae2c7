//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::error::CoordError;

/// A square coordinate: file 0-7 (a-h) and rank 0-7, with rank 0 being
/// White's back rank.
///
/// Coordinates produced by [`Coord::offset`] may lie off the board; use
/// [`Coord::on_board`] before indexing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// The coordinate shifted by the given file and rank deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dfile: i8, drank: i8) -> Self {
        Coord {
            file: self.file + dfile,
            rank: self.rank + drank,
        }
    }

    /// True when both components are within 0-7.
    #[inline]
    #[must_use]
    pub const fn on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Flat 0-63 index (rank * 8 + file). Caller must ensure the
    /// coordinate is on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// True for the four central squares d4, e4, d5, e5.
    #[inline]
    #[must_use]
    pub(crate) const fn is_central(self) -> bool {
        self.file >= 3 && self.file <= 4 && self.rank >= 3 && self.rank <= 4
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            self.rank + 1
        )
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(CoordError::InvalidNotation {
                notation: s.to_string(),
            });
        };
        if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return Err(CoordError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        Ok(Coord::new(file_ch as i8 - 'a' as i8, rank_ch as i8 - '1' as i8))
    }
}
