//! Move generation tests: counts, legality filtering, castling, en
//! passant, and promotion.

use pretty_assertions::assert_eq;

use crate::position::{CastlingRights, Color, Piece, Position, PositionBuilder};

use super::{coord, find_move, has_move, play};

#[test]
fn test_starting_position_has_twenty_moves() {
    let position = Position::new();
    assert_eq!(position.legal_moves().len(), 20);
}

#[test]
fn test_starting_move_breakdown() {
    let position = Position::new();
    let pawn_moves = position
        .legal_moves()
        .iter()
        .filter(|m| matches!(position.piece_at(m.from), Some((_, Piece::Pawn))))
        .count();
    let knight_moves = position
        .legal_moves()
        .iter()
        .filter(|m| matches!(position.piece_at(m.from), Some((_, Piece::Knight))))
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_black_also_has_twenty_replies() {
    let position = play(&["e4"]);
    assert_eq!(position.side_to_move(), Color::Black);
    assert_eq!(position.legal_moves().len(), 20);
}

#[test]
fn test_pinned_rook_stays_on_its_file() {
    // The e2 rook shields its king from the e8 queen; it may slide along
    // the e-file (including capturing the queen) but never off it.
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("e2"), Color::White, Piece::Rook)
        .piece(coord("e8"), Color::Black, Piece::Queen)
        .piece(coord("h8"), Color::Black, Piece::King)
        .build();

    let rook_moves: Vec<_> = position
        .legal_moves()
        .iter()
        .filter(|m| m.from == coord("e2"))
        .collect();
    assert!(!rook_moves.is_empty());
    for m in rook_moves {
        assert_eq!(m.to.file, coord("e2").file, "pinned rook left the file");
    }
    assert!(has_move(&position, "e2", "e8"));
}

#[test]
fn test_moves_while_in_check_resolve_the_check() {
    // White king on e1 checked by the e8 rook; every legal reply must
    // block, capture, or step off the file.
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("d2"), Color::White, Piece::Queen)
        .piece(coord("a1"), Color::White, Piece::Knight)
        .piece(coord("e8"), Color::Black, Piece::Rook)
        .piece(coord("h8"), Color::Black, Piece::King)
        .build();

    assert!(position.square_attacked_by(coord("e1"), Color::Black));
    for &m in position.legal_moves() {
        let child = position.make_child(m, false);
        let king = child.king_coord(Color::White).expect("king survives");
        assert!(
            !child.square_attacked_by(king, Color::Black),
            "move {m} leaves the king in check"
        );
    }
    // The queen can block on e2 but may not wander off to a2.
    assert!(has_move(&position, "d2", "e2"));
    assert!(!has_move(&position, "d2", "a2"));
}

fn castling_position() -> PositionBuilder {
    PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("a1"), Color::White, Piece::Rook)
        .piece(coord("h1"), Color::White, Piece::Rook)
        .piece(coord("e8"), Color::Black, Piece::King)
        .castling(CastlingRights::all())
}

#[test]
fn test_castling_both_sides_available() {
    let position = castling_position().build();
    assert!(has_move(&position, "e1", "g1"));
    assert!(has_move(&position, "e1", "c1"));
}

#[test]
fn test_castling_blocked_by_own_piece() {
    let position = castling_position()
        .piece(coord("f1"), Color::White, Piece::Bishop)
        .build();
    assert!(!has_move(&position, "e1", "g1"));
    assert!(has_move(&position, "e1", "c1"));
}

#[test]
fn test_cannot_castle_out_of_check() {
    let position = castling_position()
        .piece(coord("e5"), Color::Black, Piece::Rook)
        .build();
    assert!(!has_move(&position, "e1", "g1"));
    assert!(!has_move(&position, "e1", "c1"));
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // A rook on f5 covers f1, the square the king would cross kingside;
    // queenside is unaffected.
    let position = castling_position()
        .piece(coord("f5"), Color::Black, Piece::Rook)
        .build();
    assert!(!has_move(&position, "e1", "g1"));
    assert!(has_move(&position, "e1", "c1"));
}

#[test]
fn test_cannot_castle_into_attacked_square() {
    let position = castling_position()
        .piece(coord("g5"), Color::Black, Piece::Rook)
        .build();
    assert!(!has_move(&position, "e1", "g1"));
    assert!(has_move(&position, "e1", "c1"));
}

#[test]
fn test_king_move_revokes_both_rights() {
    let position = castling_position().build();
    let after = position.derive(find_move(&position, "e1", "e2"));
    assert!(!after.castling_rights().has(Color::White, true));
    assert!(!after.castling_rights().has(Color::White, false));
}

#[test]
fn test_rook_move_revokes_one_right() {
    let position = castling_position().build();
    let after = position.derive(find_move(&position, "h1", "h5"));
    assert!(!after.castling_rights().has(Color::White, true));
    assert!(after.castling_rights().has(Color::White, false));
}

#[test]
fn test_rook_capture_on_home_square_revokes_right() {
    let position = castling_position()
        .piece(coord("h8"), Color::Black, Piece::Rook)
        .side_to_move(Color::Black)
        .build();
    let after = position.derive(find_move(&position, "h8", "h1"));
    assert!(!after.castling_rights().has(Color::White, true));
    assert!(after.castling_rights().has(Color::White, false));
}

#[test]
fn test_castling_moves_the_rook() {
    let position = castling_position().build();
    let after = position.derive(find_move(&position, "e1", "g1"));
    assert_eq!(after.piece_at(coord("g1")), Some((Color::White, Piece::King)));
    assert_eq!(after.piece_at(coord("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(after.piece_at(coord("h1")), None);

    let after = position.derive(find_move(&position, "e1", "c1"));
    assert_eq!(after.piece_at(coord("c1")), Some((Color::White, Piece::King)));
    assert_eq!(after.piece_at(coord("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(after.piece_at(coord("a1")), None);
}

#[test]
fn test_en_passant_window_opens_and_closes() {
    // After e5 d5 the capture is available for exactly one ply.
    let position = play(&["e4", "a6", "e5", "d5"]);
    assert_eq!(position.en_passant_target(), Some(coord("d6")));
    assert!(has_move(&position, "e5", "d6"));

    let later = play(&["e4", "a6", "e5", "d5", "a3", "h6"]);
    assert_eq!(later.en_passant_target(), None);
    assert!(!has_move(&later, "e5", "d6"));
}

#[test]
fn test_en_passant_capture_removes_the_pawn() {
    let position = play(&["e4", "a6", "e5", "d5"]);
    let after = position.derive(find_move(&position, "e5", "d6"));
    assert_eq!(after.piece_at(coord("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(after.piece_at(coord("d5")), None);
    assert_eq!(after.piece_at(coord("e5")), None);
    assert_eq!(after.material[Color::Black.index()][Piece::Pawn.index()], 7);
}

#[test]
fn test_double_push_requires_clear_path() {
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("e2"), Color::White, Piece::Pawn)
        .piece(coord("e3"), Color::Black, Piece::Knight)
        .piece(coord("h8"), Color::Black, Piece::King)
        .build();
    assert!(!has_move(&position, "e2", "e3"));
    assert!(!has_move(&position, "e2", "e4"));
}

#[test]
fn test_promotion_to_queen() {
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("a7"), Color::White, Piece::Pawn)
        .piece(coord("h8"), Color::Black, Piece::King)
        .build();
    let after = position.derive(find_move(&position, "a7", "a8"));
    assert_eq!(after.piece_at(coord("a8")), Some((Color::White, Piece::Queen)));
    assert_eq!(after.material[Color::White.index()][Piece::Pawn.index()], 0);
    assert_eq!(after.material[Color::White.index()][Piece::Queen.index()], 1);
}

#[test]
fn test_promotion_by_capture() {
    let position = PositionBuilder::new()
        .piece(coord("e1"), Color::White, Piece::King)
        .piece(coord("b7"), Color::White, Piece::Pawn)
        .piece(coord("a8"), Color::Black, Piece::Rook)
        .piece(coord("h8"), Color::Black, Piece::King)
        .build();
    let after = position.derive(find_move(&position, "b7", "a8"));
    assert_eq!(after.piece_at(coord("a8")), Some((Color::White, Piece::Queen)));
    assert_eq!(after.material[Color::Black.index()][Piece::Rook.index()], 0);
    assert_eq!(after.material[Color::White.index()][Piece::Queen.index()], 1);
}

#[test]
fn test_black_promotion_on_first_rank() {
    let position = PositionBuilder::new()
        .piece(coord("h1"), Color::White, Piece::King)
        .piece(coord("a2"), Color::Black, Piece::Pawn)
        .piece(coord("h8"), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build();
    let after = position.derive(find_move(&position, "a2", "a1"));
    assert_eq!(after.piece_at(coord("a1")), Some((Color::Black, Piece::Queen)));
    assert_eq!(after.material[Color::Black.index()][Piece::Pawn.index()], 0);
}

#[test]
fn test_knight_jumps_ignore_blockers() {
    let position = Position::new();
    assert!(has_move(&position, "g1", "f3"));
    assert!(has_move(&position, "g1", "h3"));
    assert!(!has_move(&position, "g1", "e2"));
}

#[test]
fn test_sliders_stop_at_blockers() {
    let position = play(&["e4", "e5"]);
    // The f1 bishop sees along the freed diagonal up to a6.
    assert!(has_move(&position, "f1", "b5"));
    assert!(has_move(&position, "f1", "a6"));
    // The rook is still boxed in.
    assert!(!has_move(&position, "h1", "h3"));
}
