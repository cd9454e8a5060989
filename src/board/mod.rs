pub mod grid;
pub mod mv;
pub mod piece;

pub use grid::Board;
pub use mv::{find_move, Move, Notation};
pub use piece::{Color, Piece, Position};
