//! Chess engine library with Atomic and King-of-the-Hill variants.
//!
//! Provides a self-contained decision engine:
//! - Mailbox position model with incremental Zobrist hashing
//! - Legal-move generation for standard chess and two variants
//! - Material and piece-square evaluation with terminal detection
//! - Iterative-deepening alpha-beta search with a transposition table
//!
//! # Quick Start
//!
//! ```
//! use emberhill::{Position, Searcher};
//! use std::time::Duration;
//!
//! // Create a new game from the starting position
//! let position = Position::new();
//! assert_eq!(position.legal_moves().len(), 20);
//!
//! // Find a move within a small time budget
//! let mut searcher = Searcher::with_budget(Duration::from_millis(50));
//! let best = searcher.find_best_move(&position);
//! assert!(best.is_some());
//!
//! // Play it
//! let next = position.derive(best.unwrap());
//! assert_ne!(next.hash(), position.hash());
//! ```
//!
//! # Building Positions
//!
//! ```
//! use emberhill::{Color, Coord, Piece, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece(Coord::new(4, 0), Color::White, Piece::King)
//!     .piece(Coord::new(4, 7), Color::Black, Piece::King)
//!     .piece(Coord::new(0, 1), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for the small value types

// Enable pedantic lints with domain-specific exceptions
#![warn(clippy::pedantic)]
// Chess engines have intentionally similar names (file/rank deltas, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe here (board and table indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod notation;
pub mod position;
pub mod tt;
pub mod variant;
pub mod zobrist;

pub use notation::{format_san, parse_san, SanError};
pub use position::{
    CastlingRights, Color, Coord, CoordError, Move, Piece, Position, PositionBuilder,
    SearchStats, Searcher, DEFAULT_BUDGET, SCORE_MAX, SCORE_MIN,
};
pub use tt::{Bound, TranspositionTable, TtEntry};
pub use variant::Variant;
