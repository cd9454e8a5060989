use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::piece::{Piece, Position};

/// A legal move as produced by the generator: the moving piece, the
/// landing squares in order and the pieces captured along the way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub steps: Vec<Position>,
    pub remove_pieces: Vec<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool { !self.remove_pieces.is_empty() }

    pub fn destination(&self) -> Option<Position> { self.steps.last().copied() }

    /// Same piece (by index) travelling the same path. Captured pieces and
    /// king flags are not compared.
    pub fn same_as(&self, other: &Move) -> bool {
        self.piece.index == other.piece.index && self.steps == other.steps
    }

    /// True when `path` is a prefix of this move's steps.
    pub fn contains_path(&self, path: &[Position]) -> bool {
        path.len() <= self.steps.len() && self.steps.iter().zip(path).all(|(a, b)| a == b)
    }
}

/// Finds the move in `moves` matching `piece_index` and `steps` exactly.
pub fn find_move<'a>(moves: &'a [Move], piece_index: u8, steps: &[Position]) -> Option<&'a Move> {
    moves.iter().find(|m| m.piece.index == piece_index && m.steps == steps)
}

/// Writes `c3-d4` for simple moves and `c3xe5xg7` for captures. The origin
/// is not part of a `Move`, so it is passed in by the caller.
pub struct Notation<'a> {
    pub from: Position,
    pub mv: &'a Move,
}

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.mv.is_capture() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for s in &self.mv.steps { write!(f, "{}{}", sep, s)?; }
        Ok(())
    }
}
