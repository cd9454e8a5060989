use crate::board::{Board, Color};
use crate::error::EngineResult;

// Leaf count of the move tree, cloning the board per branch
pub fn perft(board: &Board, side: Color, depth: u32) -> EngineResult<u64> {
    if depth == 0 { return Ok(1); }
    let moves = board.compute_possible_moves(side);
    if depth == 1 { return Ok(moves.len() as u64); }
    let mut nodes = 0u64;
    for m in &moves {
        let child = board.after(m)?;
        nodes += perft(&child, side.opposite(), depth - 1)?;
    }
    Ok(nodes)
}

/// Per-root-move breakdown, for diffing generators.
pub fn divide(board: &Board, side: Color, depth: u32) -> EngineResult<Vec<(String, u64)>> {
    let mut out = Vec::new();
    for m in board.compute_possible_moves(side) {
        let from = board.piece_position(m.piece.index)?;
        let label = crate::board::Notation { from, mv: &m }.to_string();
        let child = board.after(&m)?;
        out.push((label, perft(&child, side.opposite(), depth.saturating_sub(1))?));
    }
    Ok(out)
}
