use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

const MAN: i32 = 1;
const KING: i32 = 2;

// Side-agnostic material: positive means White has more material.
pub fn material_eval_side_agnostic(board: &Board) -> i32 {
    board.cells().iter().flatten().map(|p| {
        let v = if p.king { KING } else { MAN };
        if p.color == Color::White { v } else { -v }
    }).sum()
}

// Material from `color`'s perspective
pub fn material_eval(board: &Board, color: Color) -> i32 {
    let base = material_eval_side_agnostic(board);
    if color == Color::White { base } else { -base }
}

/// Scoring strategies a profile can select. Kept as a closed enum so a
/// profile can be re-derived by name on the far side of a worker boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    #[default]
    Material,
}

impl Heuristic {
    pub fn score(&self, board: &Board, color: Color) -> f64 {
        match self {
            Heuristic::Material => material_eval(board, color) as f64,
        }
    }
}
