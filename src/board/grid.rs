use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::mv::Move;
use crate::board::piece::{Color, Piece, Position};
use crate::error::{EngineError, EngineResult};

const CELLS: usize = 64;

/// 8x8 checkers board, one optional piece per cell, indexed `y * 8 + x`.
/// Search copies the board (`Clone`) before every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Piece>>", try_from = "Vec<Option<Piece>>")]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Default for Board {
    fn default() -> Self { Self::empty() }
}

impl Board {
    pub fn empty() -> Self { Self { cells: [None; CELLS] } }

    /// Standard starting position: White (indices 0..12) on rows 0-2,
    /// Black (indices 12..24) on rows 5-7, dark squares only.
    pub fn create() -> Self {
        let mut b = Self::empty();
        for i in 0..12usize {
            let shift = usize::from(i / 4 == 1);
            b.cells[i * 2 + shift] = Some(Piece::new(i as u8, Color::White));
            b.cells[63 - i * 2 - shift] = Some(Piece::new(i as u8 + 12, Color::Black));
        }
        b
    }

    pub fn cells(&self) -> &[Option<Piece>] { &self.cells }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() { self.cells[pos.to_index()] } else { None }
    }

    /// Writes a cell. Off-board positions are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() { self.cells[pos.to_index()] = piece; }
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, c)| match c {
            Some(p) if p.color == color => Some((Position::from_index(i), *p)),
            _ => None,
        })
    }

    pub fn count(&self, color: Color) -> usize { self.pieces(color).count() }

    pub fn piece_by_index(&self, index: u8) -> EngineResult<Piece> {
        self.cells.iter().flatten().find(|p| p.index == index).copied().ok_or(EngineError::PieceNotFound(index))
    }

    pub fn piece_position(&self, index: u8) -> EngineResult<Position> {
        self.cells.iter()
            .position(|c| matches!(c, Some(p) if p.index == index))
            .map(Position::from_index)
            .ok_or(EngineError::PieceNotFound(index))
    }

    /// All legal moves for `player` in generator order. Captures are
    /// mandatory: when any capture chain exists only maximal chains are
    /// returned, otherwise single diagonal steps.
    pub fn compute_possible_moves(&self, player: Color) -> Vec<Move> {
        let dir = player.forward();
        let mut moves = Vec::new();

        for (pos, piece) in self.pieces(player) {
            let directions: &[i8] = if piece.king { &[dir, -dir] } else { &[dir] };
            let mut steps = Vec::new();
            let mut captured = Vec::new();
            self.find_captures(pos, piece, directions, &mut steps, &mut captured, &mut moves);
        }
        if !moves.is_empty() { return moves; }

        for (pos, piece) in self.pieces(player) {
            let mut targets = vec![pos.offset(-1, dir), pos.offset(1, dir)];
            if piece.king { targets.extend([pos.offset(-1, -dir), pos.offset(1, -dir)]); }
            for t in targets {
                if t.is_valid() && self.get(t).is_none() {
                    moves.push(Move { piece, steps: vec![t], remove_pieces: Vec::new() });
                }
            }
        }
        moves
    }

    // Depth-first over jump landings. The origin cell stays occupied while
    // searching, and a cell already visited by this chain is never reused.
    // Those two rules already keep a captured piece from being jumped twice:
    // landings keep (x - y) mod 4, so the other diagonal through it is out
    // of reach.
    fn find_captures(
        &self,
        from: Position,
        piece: Piece,
        directions: &[i8],
        steps: &mut Vec<Position>,
        captured: &mut Vec<Piece>,
        out: &mut Vec<Move>,
    ) {
        let opponent = piece.color.opposite();
        let mut end_of_path = true;
        for &d in directions {
            for dx in [-2, 2] {
                let landing = from.offset(dx, 2 * d);
                if !landing.is_valid() || steps.contains(&landing) { continue; }
                let jumped = match self.get(Position::between(from, landing)) {
                    Some(p) if p.color == opponent => p,
                    _ => continue,
                };
                if self.get(landing).is_some() { continue; }
                steps.push(landing);
                captured.push(jumped);
                self.find_captures(landing, piece, directions, steps, captured, out);
                steps.pop();
                captured.pop();
                end_of_path = false;
            }
        }
        if end_of_path && !steps.is_empty() {
            out.push(Move { piece, steps: steps.clone(), remove_pieces: captured.clone() });
        }
    }

    /// Plays `mv` in place and returns the board for chaining. `mv` must come
    /// from `compute_possible_moves` on this exact position; a move that does
    /// not fit is rejected before anything is written.
    pub fn apply(&mut self, mv: &Move) -> EngineResult<&mut Self> {
        let dest = mv.destination().ok_or_else(|| EngineError::IllegalMove("move has no steps".into()))?;
        if !dest.is_valid() {
            return Err(EngineError::IllegalMove(format!("destination {:?} is off the board", dest)));
        }
        let from = self.piece_position(mv.piece.index)?;
        let piece = self.piece_by_index(mv.piece.index)?;
        if piece.color != mv.piece.color {
            return Err(EngineError::IllegalMove(format!("piece {} is not {}", piece.index, mv.piece.color)));
        }
        if self.get(dest).is_some() {
            return Err(EngineError::IllegalMove(format!("destination {} is occupied", dest)));
        }
        let mut removed = Vec::with_capacity(mv.remove_pieces.len());
        for r in &mv.remove_pieces {
            let at = self.piece_position(r.index)?;
            if self.get(at).map(|p| p.color) == Some(piece.color) {
                return Err(EngineError::IllegalMove(format!("cannot capture own piece {}", r.index)));
            }
            removed.push(at);
        }

        self.set(from, None);
        for at in removed { self.set(at, None); }
        let landed = if !piece.king && dest.y == piece.color.king_row() { piece.crowned() } else { piece };
        self.set(dest, Some(landed));
        Ok(self)
    }

    /// Copy-and-apply, the form search uses for every branch.
    pub fn after(&self, mv: &Move) -> EngineResult<Board> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(b: Board) -> Self { b.cells.to_vec() }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = String;

    fn try_from(v: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        let cells: [Option<Piece>; CELLS] = v.try_into()
            .map_err(|v: Vec<Option<Piece>>| format!("board must have {} cells, got {}", CELLS, v.len()))?;
        let mut seen = [false; 256];
        for p in cells.iter().flatten() {
            if seen[p.index as usize] { return Err(format!("duplicate piece index {}", p.index)); }
            seen[p.index as usize] = true;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8 {
                let c = match self.get(Position::new(x, y)) {
                    Some(p) => p.symbol(),
                    None if (x + y) % 2 == 0 => '.',
                    None => ' ',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
