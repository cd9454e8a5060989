// Checkers rules engine + alpha-beta AI
pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod perft;
pub mod profile;
pub mod protocol;
pub mod search;
pub mod selection;
pub mod selfplay;
pub mod worker;

pub use board::{Board, Color, Move, Piece, Position};
pub use engine::Engine;
pub use error::EngineError;
