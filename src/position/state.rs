//! Position state and the derived-position constructor.
//!
//! A `Position` is a self-contained snapshot: board, side to move,
//! castling rights, en-passant target, per-color material counts, the
//! incrementally maintained Zobrist hash, and the legal move list for the
//! side to move. Successor positions are built with [`Position::derive`];
//! a position is never mutated after construction except through its
//! evaluation cache.
//!
//! Instead of a back-pointer to the predecessor, each position owns the
//! compact list of ancestor hashes it needs for repetition detection, so
//! the game history can live in a plain owned sequence on the driver side.

use std::fmt;

use crate::variant::Variant;
use crate::zobrist;

use super::types::{CastlingRights, Color, Coord, Move, Piece};

/// A game position with its derived state.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Coord>,
    pub(crate) material: [[u8; 6]; 2],
    pub(crate) hash: u64,
    pub(crate) endgame: bool,
    pub(crate) variant: Variant,
    pub(crate) moves: Vec<Move>,
    pub(crate) moves_enumerated: bool,
    pub(crate) eval: Option<i32>,
    pub(crate) history: Vec<u64>,
    pub(crate) last_move: Option<Move>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Position {
    /// The standard starting position, legal moves enumerated.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_variant(Variant::Standard)
    }

    /// The standard starting position for the given variant.
    #[must_use]
    pub fn new_with_variant(variant: Variant) -> Self {
        let mut pos = Position::empty(variant);
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            pos.put_piece(Coord::new(file, 0), Color::White, piece);
            pos.put_piece(Coord::new(file, 1), Color::White, Piece::Pawn);
            pos.put_piece(Coord::new(file, 6), Color::Black, Piece::Pawn);
            pos.put_piece(Coord::new(file, 7), Color::Black, piece);
        }
        for color in Color::BOTH {
            for kingside in [true, false] {
                pos.castling.set(color, kingside);
                zobrist::toggle_castling(&mut pos.hash, color, kingside);
            }
        }
        pos.moves = pos.enumerate_moves();
        pos.moves_enumerated = true;
        pos
    }

    /// An empty board with no rights and nothing to do. Used as the seed
    /// for the starting position and by the builder.
    pub(crate) fn empty(variant: Variant) -> Self {
        Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            material: [[0; 6]; 2],
            hash: 0,
            endgame: false,
            variant,
            moves: Vec::new(),
            moves_enumerated: false,
            eval: None,
            history: Vec::new(),
            last_move: None,
        }
    }

    /// Build the successor position reached by playing `mv`, enumerating
    /// its legal moves.
    ///
    /// `mv` must come from this position's [`Position::legal_moves`];
    /// applying anything else leaves the successor unspecified.
    #[must_use]
    pub fn derive(&self, mv: Move) -> Position {
        self.make_child(mv, true)
    }

    /// Successor constructor with optional enumeration. Leaf nodes in the
    /// search never read their own move lists, so skipping enumeration
    /// there saves the dominant cost.
    pub(crate) fn make_child(&self, mv: Move, enumerate: bool) -> Position {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(self.hash);

        let mut next = Position {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            material: self.material,
            hash: self.hash,
            endgame: self.endgame,
            variant: self.variant,
            moves: Vec::new(),
            moves_enumerated: false,
            eval: None,
            history,
            last_move: Some(mv),
        };
        next.apply(mv, enumerate);
        next
    }

    /// Apply `mv` to this freshly copied state. This is the single
    /// choke-point for state transitions.
    fn apply(&mut self, mv: Move, enumerate: bool) {
        let mover = self.piece_at(mv.from);
        let mut piece_captured = false;

        // The predecessor's en-passant window closes now.
        if let Some(ep) = self.en_passant.take() {
            zobrist::toggle_en_passant(&mut self.hash, ep.file);
        }

        if let Some((_, Piece::Pawn)) = mover {
            let drank = mv.rank_delta();
            if drank == 2 || drank == -2 {
                // A double advance opens the window on the skipped square.
                self.en_passant = Some(Coord::new(mv.from.file, mv.from.rank + drank / 2));
                zobrist::toggle_en_passant(&mut self.hash, mv.from.file);
            } else if mv.from.file != mv.to.file && self.piece_at(mv.to).is_none() {
                // A pawn moving diagonally onto an empty square captures
                // en passant; the victim sits one rank behind the target.
                self.remove_piece(Coord::new(mv.to.file, mv.to.rank - drank));
                piece_captured = true;
            }
        }

        if let Some((_, Piece::King)) = mover {
            let dfile = mv.file_delta();
            if dfile == 2 || dfile == -2 {
                // Castling: the rook sits on the edge file in the king's
                // direction and lands on the square the king crossed.
                let direction = dfile / 2;
                let mut rook_file = mv.to.file;
                while rook_file % 7 != 0 {
                    rook_file += direction;
                }
                let rook_from = Coord::new(rook_file, mv.from.rank);
                if let Some((color, piece)) = self.piece_at(rook_from) {
                    self.remove_piece(rook_from);
                    self.put_piece(
                        Coord::new(mv.from.file + direction, mv.from.rank),
                        color,
                        piece,
                    );
                }
            }
        }

        // A right survives only while its king and rook sit on their home
        // squares and the rook's home square has not been captured onto.
        for color in Color::BOTH {
            let back = color.back_rank();
            let king_home = Coord::new(4, back);
            for kingside in [true, false] {
                if !self.castling.has(color, kingside) {
                    continue;
                }
                let rook_home = Coord::new(if kingside { 7 } else { 0 }, back);
                if mv.from == king_home || mv.from == rook_home || mv.to == rook_home {
                    self.castling.remove(color, kingside);
                    zobrist::toggle_castling(&mut self.hash, color, kingside);
                }
            }
        }

        match self.variant {
            Variant::Atomic => {
                if self.piece_at(mv.to).is_some() {
                    // Captures detonate: every piece in the 3x3 blast goes,
                    // except pawns away from the capture square. The
                    // capturing piece never lands.
                    for drank in -1..=1 {
                        for dfile in -1..=1 {
                            let sq = mv.to.offset(dfile, drank);
                            if !sq.on_board() {
                                continue;
                            }
                            match self.piece_at(sq) {
                                None => {}
                                Some((_, Piece::Pawn)) if dfile != 0 || drank != 0 => {}
                                Some(_) => {
                                    self.remove_piece(sq);
                                    piece_captured = true;
                                }
                            }
                        }
                    }
                } else if let Some((color, piece)) = mover {
                    self.put_piece(mv.to, color, piece);
                }
                // The mover leaves its square unless the blast already
                // took it (adjacent non-pawn capture).
                if self.piece_at(mv.from).is_some() {
                    self.remove_piece(mv.from);
                    piece_captured = true;
                }
            }
            Variant::Standard | Variant::Hill => {
                if self.piece_at(mv.to).is_some() {
                    self.remove_piece(mv.to);
                    piece_captured = true;
                }
                if let Some((color, piece)) = self.piece_at(mv.from) {
                    self.remove_piece(mv.from);
                    self.put_piece(mv.to, color, piece);
                }
            }
        }

        // A pawn that reached the end becomes a queen.
        if let Some((color, Piece::Pawn)) = self.piece_at(mv.to) {
            if mv.to.rank == 0 || mv.to.rank == 7 {
                self.remove_piece(mv.to);
                self.put_piece(mv.to, color, Piece::Queen);
            }
        }

        self.side_to_move = self.side_to_move.opponent();
        zobrist::toggle_side(&mut self.hash);

        if enumerate {
            self.moves = self.enumerate_moves();
        }
        self.moves_enumerated = enumerate;

        // The endgame flag latches once both sides are reduced.
        if !self.endgame && piece_captured {
            let both_reduced = Color::BOTH.iter().all(|&color| {
                let m = &self.material[color.index()];
                m[Piece::Queen.index()] == 0
                    || m[Piece::Knight.index()]
                        + m[Piece::Bishop.index()]
                        + m[Piece::Rook.index()]
                        < 2
            });
            if both_reduced {
                self.endgame = true;
            }
        }

        // A third occurrence of the same hash is a draw: no moves to
        // make, evaluation fixed at zero.
        let repetitions = self.history.iter().filter(|&&h| h == self.hash).count();
        if repetitions >= 2 {
            self.moves.clear();
            self.moves_enumerated = true;
            self.eval = Some(0);
        }
    }

    pub(crate) fn put_piece(&mut self, at: Coord, color: Color, piece: Piece) {
        debug_assert!(self.board[at.rank as usize][at.file as usize].is_none());
        self.board[at.rank as usize][at.file as usize] = Some((color, piece));
        zobrist::toggle_piece(&mut self.hash, color, piece, at);
        self.material[color.index()][piece.index()] += 1;
    }

    pub(crate) fn remove_piece(&mut self, at: Coord) {
        if let Some((color, piece)) = self.board[at.rank as usize][at.file as usize].take() {
            zobrist::toggle_piece(&mut self.hash, color, piece, at);
            self.material[color.index()][piece.index()] -= 1;
        }
    }

    /// The piece standing on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<(Color, Piece)> {
        self.board[at.rank as usize][at.file as usize]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// How many pieces of a (color, kind) are on the board.
    #[inline]
    #[must_use]
    pub fn material_count(&self, color: Color, piece: Piece) -> u8 {
        self.material[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The move that produced this position, if it was derived.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal moves for the side to move. Empty for terminal positions;
    /// also empty when the position was built without enumeration.
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.moves
    }

    /// True when moves were enumerated and none exist: checkmate,
    /// stalemate, a variant terminal, or a repetition draw.
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.moves_enumerated && self.moves.is_empty()
    }

    /// Locate a color's king.
    pub(crate) fn king_coord(&self, color: Color) -> Option<Coord> {
        for rank in 0..8 {
            for file in 0..8 {
                let at = Coord::new(file, rank);
                if self.piece_at(at) == Some((color, Piece::King)) {
                    return Some(at);
                }
            }
        }
        None
    }

    /// Recompute the hash from scratch. Used to validate the incremental
    /// maintenance in tests and by the builder.
    pub(crate) fn recompute_hash(&self) -> u64 {
        let mut hash = 0u64;
        for rank in 0..8 {
            for file in 0..8 {
                let at = Coord::new(file, rank);
                if let Some((color, piece)) = self.piece_at(at) {
                    zobrist::toggle_piece(&mut hash, color, piece, at);
                }
            }
        }
        if self.side_to_move == Color::Black {
            zobrist::toggle_side(&mut hash);
        }
        for color in Color::BOTH {
            for kingside in [true, false] {
                if self.castling.has(color, kingside) {
                    zobrist::toggle_castling(&mut hash, color, kingside);
                }
            }
        }
        if let Some(ep) = self.en_passant {
            zobrist::toggle_en_passant(&mut hash, ep.file);
        }
        hash
    }

    /// Overwrite the cached evaluation. The searcher feeds deeper scores
    /// back into root children so the next iteration's ordering improves.
    pub(crate) fn set_eval(&mut self, score: i32) {
        self.eval = Some(score);
    }

    /// The cached evaluation; zero when nothing has been cached yet.
    pub(crate) fn cached_eval(&self) -> i32 {
        self.eval.unwrap_or(0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let ch = match self.piece_at(Coord::new(file, rank)) {
                    Some((color, piece)) => piece.to_board_char(color),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
