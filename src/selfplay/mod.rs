use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::{Move, Notation};
use crate::engine::Engine;
use crate::error::EngineResult;
use crate::game::{Game, GameStatus, NoHumans, PlayerKind, TurnOutcome};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub white: String,          // profile name
    pub black: String,          // profile name
    pub seed: u64,
    pub random_opening_plies: usize, // uniformly random moves before the engines take over
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw, -1 black win
}

pub fn generate_games(params: &SelfPlayParams) -> EngineResult<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// Like `generate_games`, calling `on_game` after each finished game.
pub fn generate_games_with<F: FnMut(&GameRecord)>(params: &SelfPlayParams, mut on_game: F) -> EngineResult<Vec<GameRecord>> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for _ in 0..params.games {
        let g = play_game(params, rng.gen())?;
        on_game(&g);
        games.push(g);
    }
    Ok(games)
}

pub fn play_game(params: &SelfPlayParams, game_seed: u64) -> EngineResult<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(game_seed);
    let engine = Engine::seeded(rng.gen());
    let mut game = Game::with_engine(PlayerKind::Cpu(params.black.clone()), PlayerKind::Cpu(params.white.clone()), engine)?
        .with_ply_limit(params.max_plies);
    let mut record = GameRecord { white: params.white.clone(), black: params.black.clone(), moves: Vec::new(), result: 0 };

    loop {
        let outcome = if game.plies() < params.random_opening_plies && !game.check_stalled() {
            match select_random_move(&game.legal_moves(), &mut rng) {
                Some(m) => game.play(&m)?,
                None => TurnOutcome::Over(game.status()),
            }
        } else {
            game.next_turn(&mut NoHumans)?
        };
        match outcome {
            TurnOutcome::Moved { from, mv, .. } => record.moves.push(Notation { from, mv: &mv }.to_string()),
            TurnOutcome::Over(_) => break,
        }
        if game.status() != GameStatus::Playing { break; }
    }
    record.result = match game.status() {
        GameStatus::Won(crate::board::Color::White) => 1,
        GameStatus::Won(crate::board::Color::Black) => -1,
        _ => 0,
    };
    debug!("selfplay game over after {} plies, result {}", record.moves.len(), record.result);
    Ok(record)
}

fn select_random_move(moves: &[Move], rng: &mut SmallRng) -> Option<Move> {
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())].clone()) }
}

/// (white wins, black wins, draws)
pub fn summarize(games: &[GameRecord]) -> (usize, usize, usize) {
    games.iter().fold((0, 0, 0), |(w, b, d), g| match g.result {
        1 => (w + 1, b, d),
        -1 => (w, b + 1, d),
        _ => (w, b, d + 1),
    })
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() { if !dir.as_os_str().is_empty() { create_dir_all(dir)?; } }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        out.push(serde_json::from_str(l)?);
    }
    Ok(out)
}
