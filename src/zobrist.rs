//! Zobrist hashing keys and toggles.
//!
//! The position hash is the XOR of feature-specific 64-bit keys: one per
//! (piece, color, square), one for the side to move, one per castling
//! right, and one per en-passant file. Every toggle below both adds and
//! removes its feature, since XOR is its own inverse.
//!
//! The key table is reproducible across runs; the transposition table
//! relies on hashes being stable within a process.

use once_cell::sync::Lazy;

use crate::position::{Color, Coord, Piece};

/// Piece-square region: 12 piece types (color * 6 + kind) times 64 squares.
const PIECE_KEYS: usize = 64 * 12;
/// Index of the side-to-move key.
const SIDE_KEY: usize = PIECE_KEYS;
/// Start of the four castling-right keys.
const CASTLING_KEYS: usize = SIDE_KEY + 1;
/// Start of the eight en-passant file keys.
const EN_PASSANT_KEYS: usize = CASTLING_KEYS + 4;
const NUM_KEYS: usize = EN_PASSANT_KEYS + 8;

const LCG_MULTIPLIER: u64 = 48271;
const LCG_SEED: u64 = 11_195_303_932_578_022_943;

static KEYS: Lazy<[u64; NUM_KEYS]> = Lazy::new(|| {
    // Multiplicative congruential generator modulo 2^64. Fixed seed keeps
    // hashes identical across runs.
    let mut state = LCG_SEED;
    let mut keys = [0u64; NUM_KEYS];
    for key in &mut keys {
        state = state.wrapping_mul(LCG_MULTIPLIER);
        *key = state;
    }
    keys
});

/// Toggle the key for a piece standing on a square.
#[inline]
pub(crate) fn toggle_piece(hash: &mut u64, color: Color, piece: Piece, at: Coord) {
    let piece_type = color.index() * 6 + piece.index();
    *hash ^= KEYS[piece_type * 64 + at.index()];
}

/// Toggle the side-to-move key (applied when Black is to move).
#[inline]
pub(crate) fn toggle_side(hash: &mut u64) {
    *hash ^= KEYS[SIDE_KEY];
}

/// Toggle the key for one castling right.
#[inline]
pub(crate) fn toggle_castling(hash: &mut u64, color: Color, kingside: bool) {
    let right = color.index() * 2 + usize::from(!kingside);
    *hash ^= KEYS[CASTLING_KEYS + right];
}

/// Toggle the key for the en-passant file.
#[inline]
pub(crate) fn toggle_en_passant(hash: &mut u64, file: i8) {
    *hash ^= KEYS[EN_PASSANT_KEYS + file as usize];
}
