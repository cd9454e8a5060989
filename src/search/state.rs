use crate::board::{Board, Color, Move};
use crate::error::EngineResult;

/// One node of the game tree: a position, the side to move, the plies left
/// to search and the move that led here (`None` at the root).
#[derive(Clone, Debug)]
pub struct SearchState {
    pub board: Board,
    pub turn: Color,
    pub depth: u32,
    pub mv: Option<Move>,
}

impl SearchState {
    pub fn root(board: Board, turn: Color, depth: u32) -> Self {
        Self { board, turn, depth, mv: None }
    }

    /// Successor states in generator order, each with its own board copy.
    /// Empty at the frontier and when the side to move has no legal move.
    pub fn children(&self) -> EngineResult<Vec<SearchState>> {
        if self.depth == 0 { return Ok(Vec::new()); }
        let next = self.turn.opposite();
        self.board.compute_possible_moves(self.turn).into_iter().map(|m| {
            let board = self.board.after(&m)?;
            Ok(SearchState { board, turn: next, depth: self.depth - 1, mv: Some(m) })
        }).collect()
    }
}
