//! Short algebraic notation for moves.
//!
//! Formatting and parsing both resolve against a position's legal move
//! list, so a parsed move is always playable. Accepted forms: pawn pushes
//! (`e4`), pawn captures (`exd5`), piece moves with optional single
//! disambiguation character (`Nf3`, `Nbd2`, `R1e2`, `Rxe5`), and castling
//! (`O-O`, `O-O-O`). A trailing `+` or `#` is accepted and ignored.

use std::fmt;

use crate::position::{Coord, Move, Piece, Position};

/// Error type for algebraic-notation parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty input.
    Empty,
    /// Input does not have the shape of any accepted form.
    InvalidNotation { notation: String },
    /// Well-formed input, but no legal move matches it.
    NoMatchingMove { san: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty move string"),
            SanError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

fn file_char(file: i8) -> char {
    (b'a' + file as u8) as char
}

fn is_file(c: char) -> bool {
    ('a'..='h').contains(&c)
}

fn is_rank(c: char) -> bool {
    ('1'..='8').contains(&c)
}

/// Format a legal move of `position` in short algebraic notation.
#[must_use]
pub fn format_san(position: &Position, mv: Move) -> String {
    let Some((_, piece)) = position.piece_at(mv.from) else {
        // Not a move of this position; fall back to bare coordinates.
        return mv.to_string();
    };

    if piece == Piece::King && mv.file_delta().abs() == 2 {
        return if mv.to.file == 6 { "O-O" } else { "O-O-O" }.to_string();
    }

    if piece == Piece::Pawn {
        // Pushes stay on the file; anything else is a capture, including
        // en passant onto an empty square.
        if mv.from.file == mv.to.file {
            return mv.to.to_string();
        }
        return format!("{}x{}", file_char(mv.from.file), mv.to);
    }

    let mut out = String::new();
    if let Some(letter) = piece.san_letter() {
        out.push(letter);
    }
    if let Some(tiebreak) = disambiguation(position, mv, piece) {
        out.push(tiebreak);
    }
    if position.piece_at(mv.to).is_some() {
        out.push('x');
    }
    out.push_str(&mv.to.to_string());
    out
}

/// A single disambiguation character when another piece of the same kind
/// can also reach the destination: the source file if that settles it,
/// the source rank otherwise.
fn disambiguation(position: &Position, mv: Move, piece: Piece) -> Option<char> {
    let mut rival_on_same_file = false;
    let mut any_rival = false;
    for other in position.legal_moves() {
        if other.to != mv.to || other.from == mv.from {
            continue;
        }
        if !matches!(position.piece_at(other.from), Some((_, p)) if p == piece) {
            continue;
        }
        any_rival = true;
        if other.from.file == mv.from.file {
            rival_on_same_file = true;
        }
    }
    if !any_rival {
        return None;
    }
    if rival_on_same_file {
        Some((b'1' + mv.from.rank as u8) as char)
    } else {
        Some(file_char(mv.from.file))
    }
}

/// Parse short algebraic notation against the legal moves of `position`.
pub fn parse_san(position: &Position, input: &str) -> Result<Move, SanError> {
    let trimmed = input.trim().trim_end_matches(['+', '#']);
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.is_empty() {
        return Err(SanError::Empty);
    }

    match chars[0] {
        'O' => parse_castle(position, trimmed),
        'N' => parse_piece_move(position, trimmed, &chars, Piece::Knight),
        'B' => parse_piece_move(position, trimmed, &chars, Piece::Bishop),
        'R' => parse_piece_move(position, trimmed, &chars, Piece::Rook),
        'Q' => parse_piece_move(position, trimmed, &chars, Piece::Queen),
        'K' => parse_piece_move(position, trimmed, &chars, Piece::King),
        c if is_file(c) => parse_pawn_move(position, trimmed, &chars),
        _ => Err(SanError::InvalidNotation {
            notation: input.to_string(),
        }),
    }
}

fn parse_castle(position: &Position, san: &str) -> Result<Move, SanError> {
    let to_file = match san {
        "O-O" => 6,
        "O-O-O" => 2,
        _ => {
            return Err(SanError::InvalidNotation {
                notation: san.to_string(),
            })
        }
    };
    position
        .legal_moves()
        .iter()
        .copied()
        .find(|m| {
            m.from.file == 4
                && m.to.file == to_file
                && matches!(position.piece_at(m.from), Some((_, Piece::King)))
        })
        .ok_or_else(|| SanError::NoMatchingMove {
            san: san.to_string(),
        })
}

fn parse_pawn_move(position: &Position, san: &str, chars: &[char]) -> Result<Move, SanError> {
    let (from_file, dest) = match chars {
        // Plain push: the destination names the pawn's own file.
        [file, rank] if is_file(*file) && is_rank(*rank) => {
            (*file, square(*file, *rank))
        }
        // Capture: source file, 'x', destination.
        [file, 'x', to_file, to_rank] if is_file(*to_file) && is_rank(*to_rank) => {
            (*file, square(*to_file, *to_rank))
        }
        _ => {
            return Err(SanError::InvalidNotation {
                notation: san.to_string(),
            })
        }
    };

    let from_file = from_file as i8 - 'a' as i8;
    position
        .legal_moves()
        .iter()
        .copied()
        .find(|m| {
            m.to == dest
                && m.from.file == from_file
                && matches!(position.piece_at(m.from), Some((_, Piece::Pawn)))
        })
        .ok_or_else(|| SanError::NoMatchingMove {
            san: san.to_string(),
        })
}

fn parse_piece_move(
    position: &Position,
    san: &str,
    chars: &[char],
    piece: Piece,
) -> Result<Move, SanError> {
    // [letter] [disambiguation?] [x?] [dest file] [dest rank]
    let mut idx = 1;
    let mut tiebreak = None;
    if chars.len() > idx + 2
        && (is_file(chars[idx]) || is_rank(chars[idx]))
        && (is_file(chars[idx + 1]) || chars[idx + 1] == 'x')
    {
        tiebreak = Some(chars[idx]);
        idx += 1;
    }
    if chars.get(idx) == Some(&'x') {
        idx += 1;
    }
    let (Some(&to_file), Some(&to_rank)) = (chars.get(idx), chars.get(idx + 1)) else {
        return Err(SanError::InvalidNotation {
            notation: san.to_string(),
        });
    };
    if !is_file(to_file) || !is_rank(to_rank) || chars.len() != idx + 2 {
        return Err(SanError::InvalidNotation {
            notation: san.to_string(),
        });
    }
    let dest = square(to_file, to_rank);

    position
        .legal_moves()
        .iter()
        .copied()
        .find(|m| {
            if m.to != dest {
                return false;
            }
            if !matches!(position.piece_at(m.from), Some((_, p)) if p == piece) {
                return false;
            }
            // Castling is written O-O, never Kg1.
            if piece == Piece::King && m.file_delta().abs() == 2 {
                return false;
            }
            match tiebreak {
                None => true,
                Some(c) if is_file(c) => m.from.file == c as i8 - 'a' as i8,
                Some(c) => m.from.rank == c as i8 - '1' as i8,
            }
        })
        .ok_or_else(|| SanError::NoMatchingMove {
            san: san.to_string(),
        })
}

fn square(file: char, rank: char) -> Coord {
    Coord::new(file as i8 - 'a' as i8, rank as i8 - '1' as i8)
}
