#![allow(dead_code)]
use checkersbot::board::{Board, Color, Piece, Position};

pub fn place(board: &mut Board, x: i8, y: i8, index: u8, color: Color) {
    board.set(Position::new(x, y), Some(Piece::new(index, color)));
}

pub fn place_king(board: &mut Board, x: i8, y: i8, index: u8, color: Color) {
    board.set(Position::new(x, y), Some(Piece::new(index, color).crowned()));
}

pub fn pos(x: i8, y: i8) -> Position { Position::new(x, y) }

/// White b2, Black c3 and e5: White must jump twice, landing on f6.
pub fn double_jump_board() -> Board {
    let mut b = Board::empty();
    place(&mut b, 1, 1, 0, Color::White);
    place(&mut b, 2, 2, 12, Color::Black);
    place(&mut b, 4, 4, 13, Color::Black);
    b
}
