//! Search tests: move legality, mate finding, resignation, and
//! alpha-beta equivalence against a plain minimax reference.

use std::time::Duration;

use crate::position::{
    Color, Move, Piece, Position, PositionBuilder, Searcher, SCORE_MAX, SCORE_MIN,
};
use crate::variant::Variant;

use super::{coord, play};

fn quick_searcher() -> Searcher {
    Searcher::with_budget(Duration::from_millis(40))
}

#[test]
fn test_best_move_is_drawn_from_legal_moves() {
    let position = Position::new();
    let mut searcher = Searcher::with_budget(Duration::ZERO);
    let best = searcher.find_best_move(&position).expect("a move exists");
    assert!(position.legal_moves().contains(&best));
    // Even a zero budget completes the depth-0 iteration.
    assert_eq!(searcher.stats().depth, 0);
    assert!(searcher.stats().nodes > 0);
}

#[test]
fn test_no_moves_means_no_best_move() {
    // Stalemate: nothing to search.
    let position = PositionBuilder::new()
        .piece(coord("a8"), Color::Black, Piece::King)
        .piece(coord("c7"), Color::White, Piece::King)
        .piece(coord("b6"), Color::White, Piece::Queen)
        .side_to_move(Color::Black)
        .build();
    let mut searcher = quick_searcher();
    assert_eq!(searcher.find_best_move(&position), None);
}

#[test]
fn test_finds_back_rank_mate_in_one() {
    let position = PositionBuilder::new()
        .piece(coord("g8"), Color::Black, Piece::King)
        .piece(coord("f7"), Color::Black, Piece::Pawn)
        .piece(coord("g7"), Color::Black, Piece::Pawn)
        .piece(coord("h7"), Color::Black, Piece::Pawn)
        .piece(coord("e1"), Color::White, Piece::Queen)
        .piece(coord("h1"), Color::White, Piece::King)
        .build();
    let mut searcher = quick_searcher();
    let best = searcher.find_best_move(&position).expect("a move exists");
    assert_eq!(best, Move::new(coord("e1"), coord("e8")));
    assert!(searcher.stats().score > 9000, "mate score expected");
}

#[test]
fn test_grabs_a_hanging_queen() {
    let position = PositionBuilder::new()
        .piece(coord("d1"), Color::White, Piece::Queen)
        .piece(coord("h1"), Color::White, Piece::King)
        .piece(coord("h2"), Color::White, Piece::Pawn)
        .piece(coord("d5"), Color::Black, Piece::Queen)
        .piece(coord("h8"), Color::Black, Piece::King)
        .piece(coord("h7"), Color::Black, Piece::Pawn)
        .build();
    let mut searcher = quick_searcher();
    let best = searcher.find_best_move(&position).expect("a move exists");
    assert_eq!(best, Move::new(coord("d1"), coord("d5")));
}

#[test]
fn test_resigns_hopeless_standard_position() {
    let hopeless = PositionBuilder::new()
        .piece(coord("h1"), Color::White, Piece::King)
        .piece(coord("b8"), Color::Black, Piece::King)
        .piece(coord("d4"), Color::Black, Piece::Queen)
        .piece(coord("c3"), Color::Black, Piece::Rook)
        .build();
    let mut searcher = quick_searcher();
    assert_eq!(searcher.find_best_move(&hopeless), None, "should resign");
    assert!(searcher.stats().score <= -1000);
}

#[test]
fn test_variants_never_resign() {
    for variant in [Variant::Atomic, Variant::Hill] {
        let hopeless = PositionBuilder::new()
            .piece(coord("h1"), Color::White, Piece::King)
            .piece(coord("b8"), Color::Black, Piece::King)
            .piece(coord("d4"), Color::Black, Piece::Queen)
            .piece(coord("c3"), Color::Black, Piece::Rook)
            .variant(variant)
            .build();
        let mut searcher = quick_searcher();
        assert!(
            searcher.find_best_move(&hopeless).is_some(),
            "{variant:?} should play on"
        );
    }
}

/// Reference minimax over the same tree shape the searcher explores:
/// children below depth 2 skip enumeration, and terminal positions use
/// the static evaluation. Returns a White-perspective score.
fn minimax(state: &mut Position, depth: u32) -> i32 {
    if depth == 0 || state.legal_moves().is_empty() {
        return state.evaluate();
    }
    let moves: Vec<Move> = state.legal_moves().to_vec();
    let mut best = None;
    for mv in moves {
        let mut child = state.make_child(mv, depth > 1);
        let score = minimax(&mut child, depth - 1);
        best = Some(match (best, state.side_to_move()) {
            (None, _) => score,
            (Some(b), Color::White) => score.max(b),
            (Some(b), Color::Black) => score.min(b),
        });
    }
    best.expect("at least one move was searched")
}

fn assert_alphabeta_matches_minimax(position: &Position, max_depth: u32) {
    let colour = match position.side_to_move() {
        Color::White => 1,
        Color::Black => -1,
    };
    for depth in 0..=max_depth {
        let expected = minimax(&mut position.clone(), depth);
        let mut searcher = quick_searcher();
        let got = searcher.negamax(&mut position.clone(), depth, SCORE_MIN, SCORE_MAX, colour);
        assert_eq!(
            got,
            expected * colour,
            "alpha-beta diverged from minimax at depth {depth}"
        );
    }
}

#[test]
fn test_alphabeta_equals_minimax_from_start() {
    assert_alphabeta_matches_minimax(&Position::new(), 3);
}

#[test]
fn test_alphabeta_equals_minimax_black_to_move() {
    assert_alphabeta_matches_minimax(&play(&["e4"]), 2);
}

#[test]
fn test_alphabeta_equals_minimax_sparse_position() {
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("d3"), Color::White, Piece::Rook)
        .piece(coord("g2"), Color::White, Piece::Pawn)
        .piece(coord("e8"), Color::Black, Piece::King)
        .piece(coord("d6"), Color::Black, Piece::Knight)
        .piece(coord("g7"), Color::Black, Piece::Pawn)
        .build();
    assert_alphabeta_matches_minimax(&position, 3);
}

#[test]
fn test_deeper_search_feeds_root_ordering() {
    // After one full iteration every root child carries a searched score
    // rather than its raw static evaluation; just verify the search
    // deepens past depth 0 within a normal budget.
    let position = play(&["e4", "e5"]);
    let mut searcher = Searcher::with_budget(Duration::from_millis(150));
    let best = searcher.find_best_move(&position).expect("a move exists");
    assert!(position.legal_moves().contains(&best));
    assert!(searcher.stats().depth >= 1);
    assert!(searcher.stats().elapsed >= Duration::from_millis(150));
}
