mod common;

use checkersbot::board::{Board, Color, Move, Piece};
use checkersbot::EngineError;
use common::{double_jump_board, place, pos};
use pretty_assertions::assert_eq;

#[test]
fn apply_moves_piece_and_removes_exactly_the_captures() {
    let before = double_jump_board();
    let mv = before.compute_possible_moves(Color::White).remove(0);
    let mut after = before.clone();
    after.apply(&mv).unwrap();

    assert_eq!(after.get(pos(5, 5)), Some(Piece::new(0, Color::White)));
    assert_eq!(after.get(pos(1, 1)), None);
    for p in &mv.remove_pieces {
        assert_eq!(after.piece_position(p.index), Err(EngineError::PieceNotFound(p.index)));
    }
    assert_eq!(after.count(Color::Black), 0);
}

#[test]
fn apply_leaves_other_pieces_untouched() {
    let start = Board::create();
    for mv in start.compute_possible_moves(Color::Black) {
        let after = start.after(&mv).unwrap();
        assert_eq!(after.piece_position(mv.piece.index).unwrap(), *mv.steps.last().unwrap());
        for (p, piece) in start.pieces(Color::White).chain(start.pieces(Color::Black)) {
            if piece.index == mv.piece.index { continue; }
            assert_eq!(after.get(p), Some(piece));
        }
    }
}

#[test]
fn capture_leaves_bystanders_of_both_colors_untouched() {
    let mut before = double_jump_board();
    place(&mut before, 7, 1, 1, Color::White);
    place(&mut before, 0, 6, 2, Color::White);
    place(&mut before, 7, 7, 14, Color::Black);
    place(&mut before, 1, 5, 15, Color::Black);
    let mv = before.compute_possible_moves(Color::White).into_iter().find(|m| m.piece.index == 0).unwrap();
    assert_eq!(mv.remove_pieces.len(), 2);
    let after = before.after(&mv).unwrap();

    let taken: Vec<u8> = mv.remove_pieces.iter().map(|p| p.index).collect();
    for (p, piece) in before.pieces(Color::White).chain(before.pieces(Color::Black)) {
        if piece.index == mv.piece.index || taken.contains(&piece.index) { continue; }
        assert_eq!(after.get(p), Some(piece), "bystander on {p} moved");
    }
    assert_eq!(after.count(Color::White), 3);
    assert_eq!(after.count(Color::Black), 2);
}

#[test]
fn apply_returns_self_for_chaining() {
    let mut b = Board::create();
    let w = b.compute_possible_moves(Color::White).remove(0);
    let k = b.apply(&w).unwrap().compute_possible_moves(Color::Black).len();
    assert_eq!(k, 7);
}

#[test]
fn man_reaching_far_row_is_crowned_and_stays_king() {
    let mut b = Board::empty();
    place(&mut b, 2, 6, 0, Color::White);
    place(&mut b, 7, 1, 12, Color::Black);
    let mv = b.compute_possible_moves(Color::White).remove(0);
    assert_eq!(mv.steps, vec![pos(1, 7)]);
    b.apply(&mv).unwrap();
    assert!(b.piece_by_index(0).unwrap().king);

    // The new king steps back down; the crown is kept.
    let back = b.compute_possible_moves(Color::White).into_iter().find(|m| m.steps == vec![pos(0, 6)]).unwrap();
    b.apply(&back).unwrap();
    assert_eq!(b.get(pos(0, 6)), Some(Piece::new(0, Color::White).crowned()));
}

#[test]
fn black_is_crowned_on_row_zero_after_a_capture() {
    let mut b = Board::empty();
    place(&mut b, 4, 2, 12, Color::Black);
    place(&mut b, 3, 1, 0, Color::White);
    let mv = b.compute_possible_moves(Color::Black).remove(0);
    assert_eq!(mv.steps, vec![pos(2, 0)]);
    b.apply(&mv).unwrap();
    assert_eq!(b.get(pos(2, 0)), Some(Piece::new(12, Color::Black).crowned()));
    assert_eq!(b.count(Color::White), 0);
}

#[test]
fn stale_moves_are_rejected_without_touching_the_board() {
    let mut b = Board::create();
    let mv = b.compute_possible_moves(Color::White).remove(0);
    b.apply(&mv).unwrap();
    let snapshot = b.clone();

    // Same move again: destination now occupied by the piece itself.
    assert!(matches!(b.apply(&mv), Err(EngineError::IllegalMove(_))));
    assert_eq!(b, snapshot);

    let ghost = Move { piece: Piece::new(30, Color::White), steps: vec![pos(3, 3)], remove_pieces: Vec::new() };
    assert_eq!(b.apply(&ghost).unwrap_err(), EngineError::PieceNotFound(30));

    let no_steps = Move { piece: mv.piece, steps: Vec::new(), remove_pieces: Vec::new() };
    assert!(matches!(b.apply(&no_steps), Err(EngineError::IllegalMove(_))));

    let friendly_fire = Move { piece: Piece::new(9, Color::White), steps: vec![pos(3, 3)], remove_pieces: vec![Piece::new(10, Color::White)] };
    assert!(matches!(b.apply(&friendly_fire), Err(EngineError::IllegalMove(_))));
    assert_eq!(b, snapshot);
}

#[test]
fn board_json_is_sixty_four_optional_pieces() {
    let b = Board::create();
    let v: serde_json::Value = serde_json::to_value(&b).unwrap();
    let cells = v.as_array().unwrap();
    assert_eq!(cells.len(), 64);
    assert_eq!(cells[0], serde_json::json!({ "index": 0, "color": "White", "king": false }));
    assert!(cells[1].is_null());
    let back: Board = serde_json::from_value(v).unwrap();
    assert_eq!(back, b);
}
