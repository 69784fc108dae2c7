//! Game variant selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess variant played by a game.
///
/// The variant is carried inside every [`crate::Position`] so that
/// independent games with different rules can coexist in one process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// Classical chess.
    #[default]
    Standard,
    /// Captures detonate a 3x3 blast that removes every non-pawn piece
    /// around the capture square, including the capturing piece.
    Atomic,
    /// A side wins the moment its king stands on one of the four
    /// central squares.
    Hill,
}

impl Variant {
    /// Parse a variant from user input. Matches on the first letter,
    /// case-insensitively; anything else selects standard chess.
    #[must_use]
    pub fn from_name(name: &str) -> Variant {
        match name.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a') => Variant::Atomic,
            Some('h') => Variant::Hill,
            _ => Variant::Standard,
        }
    }
}
