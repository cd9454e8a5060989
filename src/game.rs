use log::info;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, Position};
use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::profile;
use crate::search::noise::{NoiseSource, RandomNoise};
use crate::worker::WorkerRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    /// Computer player using the named profile.
    Cpu(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Color),
    Draw,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Moved { color: Color, from: Position, mv: Move },
    Over(GameStatus),
}

/// Supplies human moves. Gets the exact legal list for the turn and must
/// answer with one of those moves, or `None` to resign.
pub trait MoveSelector {
    fn select(&mut self, board: &Board, color: Color, legal: &[Move]) -> Option<Move>;
}

pub struct Game<N: NoiseSource = RandomNoise> {
    board: Board,
    turn: Color,
    white: PlayerKind,
    black: PlayerKind,
    engine: Engine<N>,
    status: GameStatus,
    plies: usize,
    max_plies: Option<usize>,
}

impl Game<RandomNoise> {
    pub fn new(black: PlayerKind, white: PlayerKind) -> EngineResult<Self> {
        Self::with_engine(black, white, Engine::default())
    }
}

impl<N: NoiseSource> Game<N> {
    /// Black moves first.
    pub fn with_engine(black: PlayerKind, white: PlayerKind, engine: Engine<N>) -> EngineResult<Self> {
        for p in [&black, &white] {
            if let PlayerKind::Cpu(name) = p { profile::get_by_name(name)?; }
        }
        Ok(Self { board: Board::create(), turn: Color::Black, white, black, engine, status: GameStatus::Playing, plies: 0, max_plies: None })
    }

    /// Declares a draw once `n` plies have been played.
    pub fn with_ply_limit(mut self, n: usize) -> Self { self.max_plies = Some(n); self }

    /// Starts from an arbitrary position instead of the opening.
    pub fn with_position(mut self, board: Board, turn: Color) -> Self {
        self.board = board;
        self.turn = turn;
        self
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn turn(&self) -> Color { self.turn }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn plies(&self) -> usize { self.plies }

    pub fn player(&self, color: Color) -> &PlayerKind {
        match color { Color::White => &self.white, Color::Black => &self.black }
    }

    pub fn legal_moves(&self) -> Vec<Move> { self.board.compute_possible_moves(self.turn) }

    /// Request payload for the side to move, for offloading a CPU turn.
    pub fn cpu_request(&self, seed: Option<u64>) -> Option<WorkerRequest> {
        match self.player(self.turn) {
            PlayerKind::Cpu(name) => Some(WorkerRequest { board: self.board.clone(), player: self.turn, ai_name: name.clone(), seed }),
            PlayerKind::Human => None,
        }
    }

    pub fn surrender(&mut self) -> GameStatus {
        if self.status == GameStatus::Playing {
            info!("{} resigns", self.turn);
            self.status = GameStatus::Won(self.turn.opposite());
        }
        self.status
    }

    /// Ends the game if the side to move is stuck. Returns true when over.
    pub fn check_stalled(&mut self) -> bool {
        if self.status == GameStatus::Playing && self.legal_moves().is_empty() {
            self.status = GameStatus::Won(self.turn.opposite());
        }
        self.status != GameStatus::Playing
    }

    /// Plays `mv` for the side to move. The move must equal (same piece,
    /// same path) one of `legal_moves()`; the generated move is applied.
    pub fn play(&mut self, mv: &Move) -> EngineResult<TurnOutcome> {
        if self.status != GameStatus::Playing { return Ok(TurnOutcome::Over(self.status)); }
        let legal = self.legal_moves();
        let chosen = legal.into_iter().find(|m| m.same_as(mv))
            .ok_or_else(|| EngineError::IllegalMove(format!("{:?} is not legal for {}", mv.steps, self.turn)))?;
        let from = self.board.piece_position(chosen.piece.index)?;
        self.board.apply(&chosen)?;
        let color = self.turn;
        self.turn = color.opposite();
        self.plies += 1;
        if self.max_plies.map_or(false, |n| self.plies >= n) { self.status = GameStatus::Draw; }
        Ok(TurnOutcome::Moved { color, from, mv: chosen })
    }

    /// Runs one turn: asks the selector for a human, the engine for a CPU.
    pub fn next_turn(&mut self, selector: &mut dyn MoveSelector) -> EngineResult<TurnOutcome> {
        if self.check_stalled() { return Ok(TurnOutcome::Over(self.status)); }
        let choice = match self.player(self.turn).clone() {
            PlayerKind::Human => {
                let legal = self.legal_moves();
                selector.select(&self.board, self.turn, &legal)
            }
            PlayerKind::Cpu(name) => self.engine.evaluate_move(&self.board, self.turn, &name)?,
        };
        match choice {
            Some(mv) => self.play(&mv),
            None => Ok(TurnOutcome::Over(self.surrender())),
        }
    }
}

/// Selector for games without human players.
pub struct NoHumans;

impl MoveSelector for NoHumans {
    fn select(&mut self, _: &Board, _: Color, _: &[Move]) -> Option<Move> { None }
}
