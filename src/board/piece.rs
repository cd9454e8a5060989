use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// Row delta a man of this color moves along.
    pub fn forward(self) -> i8 {
        if self == Color::White { 1 } else { -1 }
    }

    /// Row on which a man of this color is crowned.
    pub fn king_row(self) -> i8 {
        if self == Color::White { BOARD_SIZE - 1 } else { 0 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Color::White => "White", Color::Black => "Black" })
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(format!("invalid color: {s:?} (use 'w' or 'b')")),
        }
    }
}

/// A checkers piece. Identity is `index`, stable for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub index: u8,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(index: u8, color: Color) -> Self { Self { index, color, king: false } }

    pub fn crowned(self) -> Self { Self { king: true, ..self } }

    pub fn symbol(&self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}

/// Board coordinate; `x` is the file, `y` the row (White starts on row 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self { Self { x, y } }

    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    pub fn offset(&self, dx: i8, dy: i8) -> Position { Position::new(self.x + dx, self.y + dy) }

    /// Midpoint of a two-cell diagonal jump.
    pub fn between(a: Position, b: Position) -> Position {
        Position::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }

    pub fn to_index(&self) -> usize { (self.y * BOARD_SIZE + self.x) as usize }

    pub fn from_index(idx: usize) -> Position {
        Position::new((idx % 8) as i8, (idx / 8) as i8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 { return Err(format!("invalid square: {s:?}")); }
        let file = b[0].to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(format!("invalid square: {s:?}"));
        }
        Ok(Position::new((file - b'a') as i8, (b[1] - b'1') as i8))
    }
}
