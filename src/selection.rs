//! Rebuilds a human move from progressive square picks, validated against
//! the legal move list at every step.

use crate::board::{Board, Move, Piece, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStep {
    /// Accepted, more squares needed.
    Pending,
    /// The path now equals a legal move.
    Complete(Move),
    /// No legal move continues this way; the pick was ignored.
    Rejected,
}

pub struct PathSelection<'a> {
    legal: &'a [Move],
    piece: Option<Piece>,
    path: Vec<Position>,
}

impl<'a> PathSelection<'a> {
    pub fn new(legal: &'a [Move]) -> Self { Self { legal, piece: None, path: Vec::new() } }

    pub fn piece(&self) -> Option<Piece> { self.piece }

    pub fn path(&self) -> &[Position] { &self.path }

    /// Selects the piece with `index` if it has at least one legal move.
    pub fn select_piece(&mut self, index: u8) -> bool {
        match self.legal.iter().find(|m| m.piece.index == index) {
            Some(m) => { self.piece = Some(m.piece); self.path.clear(); true }
            None => false,
        }
    }

    /// Legal moves still compatible with the current selection.
    pub fn candidates(&self) -> impl Iterator<Item = &'a Move> + '_ {
        let legal = self.legal;
        legal.iter().filter(move |m| {
            self.piece.map_or(false, |p| p.index == m.piece.index) && m.contains_path(&self.path)
        })
    }

    pub fn push(&mut self, pos: Position) -> SelectionStep {
        let Some(piece) = self.piece else { return SelectionStep::Rejected };
        let mut next = self.path.clone();
        next.push(pos);
        let legal = self.legal;
        let mut fits = legal.iter().filter(|m| m.piece.index == piece.index && m.contains_path(&next));
        let Some(first) = fits.next() else { return SelectionStep::Rejected };
        let done = if first.steps == next { Some(first) } else { fits.find(|m| m.steps == next) };
        match done {
            Some(m) => {
                let m = m.clone();
                self.reset();
                SelectionStep::Complete(m)
            }
            None => { self.path = next; SelectionStep::Pending }
        }
    }

    pub fn reset(&mut self) {
        self.piece = None;
        self.path.clear();
    }
}

/// Splits `c3-d4`, `c3xe5xg7` or `c3 e5 g7` into squares.
pub fn parse_path(text: &str) -> Result<Vec<Position>, String> {
    let squares: Vec<Position> = text
        .split(|c: char| c.is_whitespace() || c == '-' || c == 'x' || c == 'X' || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse::<Position>)
        .collect::<Result<_, _>>()?;
    if squares.len() < 2 { return Err(format!("need an origin and at least one landing square: {text:?}")); }
    Ok(squares)
}

/// Resolves typed notation to one of `legal`. The first square names the
/// piece to move; the rest are fed through a `PathSelection`.
pub fn resolve_notation(board: &Board, legal: &[Move], text: &str) -> Result<Move, String> {
    let squares = parse_path(text)?;
    let piece = board.get(squares[0]).ok_or_else(|| format!("no piece on {}", squares[0]))?;
    let mut sel = PathSelection::new(legal);
    if !sel.select_piece(piece.index) { return Err(format!("piece on {} has no legal move", squares[0])); }
    let last = squares.len() - 1;
    for (i, &sq) in squares.iter().enumerate().skip(1) {
        match sel.push(sq) {
            SelectionStep::Pending => continue,
            SelectionStep::Complete(m) if i == last => return Ok(m),
            SelectionStep::Complete(_) => return Err(format!("move ends on {}, extra squares given", sq)),
            SelectionStep::Rejected => return Err(format!("{} is not a legal landing square here", sq)),
        }
    }
    Err(format!("incomplete move {text:?}; the capture must continue"))
}
