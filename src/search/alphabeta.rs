use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Color, Move};
use crate::error::EngineResult;
use crate::profile::AiProfile;
use crate::search::eval::Heuristic;
use crate::search::noise::{clear_thought_factor, NoiseSource, RandomNoise};
use crate::search::state::SearchState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    pub depth: u32,
    pub heuristic: Heuristic,
    /// In (0, 1]; 1 means the heuristic is used unperturbed.
    pub clear_thought: f64,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: 2, heuristic: Heuristic::Material, clear_thought: 1.0 } }
}

impl SearchParams {
    pub fn from_profile(p: &AiProfile) -> Self {
        Self { depth: p.max_search_depth, heuristic: p.heuristic, clear_thought: p.clear_thought }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: f64,
    pub nodes: u64,
}

pub struct Searcher<N: NoiseSource = RandomNoise> {
    noise: N,
    pub(crate) nodes: u64,
    abort: Option<Arc<AtomicBool>>,
    cut_short: bool,
}

impl Default for Searcher<RandomNoise> {
    fn default() -> Self { Self::with_noise(RandomNoise::from_entropy()) }
}

impl Searcher<RandomNoise> {
    pub fn seeded(seed: u64) -> Self { Self::with_noise(RandomNoise::seeded(seed)) }
}

impl<N: NoiseSource> Searcher<N> {
    pub fn with_noise(noise: N) -> Self { Self { noise, nodes: 0, abort: None, cut_short: false } }

    /// Once `flag` is set every node is treated as a leaf, so the search
    /// unwinds quickly with whatever it has.
    pub fn set_abort(&mut self, flag: Arc<AtomicBool>) { self.abort = Some(flag); }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// True when the last search stopped early because of the abort flag.
    pub fn was_cut_short(&self) -> bool { self.cut_short }

    // Children of `state`, or none when the abort flag stops expansion.
    fn expand(&mut self, state: &SearchState) -> EngineResult<Vec<SearchState>> {
        if state.depth > 0 && self.abort.as_ref().map_or(false, |f| f.load(Ordering::Relaxed)) {
            self.cut_short = true;
            return Ok(Vec::new());
        }
        state.children()
    }

    fn leaf_value(&mut self, state: &SearchState, mover: Color, params: &SearchParams) -> f64 {
        let factor = clear_thought_factor(&mut self.noise, params.clear_thought);
        params.heuristic.score(&state.board, mover) * factor
    }

    /// Alpha-beta from `mover`'s point of view. `best` is `None` when the
    /// mover has no legal move (a loss) or `params.depth` is 0.
    pub fn search(&mut self, board: &Board, mover: Color, params: SearchParams) -> EngineResult<SearchResult> {
        self.nodes = 0;
        self.cut_short = false;
        let root = SearchState::root(board.clone(), mover, params.depth);
        let (score, best) = self.alphabeta(&root, mover, &params, f64::NEG_INFINITY, f64::INFINITY)?;
        debug!("alphabeta depth={} nodes={} score={:.3} best={:?}", params.depth, self.nodes, score, best.as_ref().map(|m| &m.steps));
        Ok(SearchResult { best, score, nodes: self.nodes })
    }

    fn alphabeta(&mut self, state: &SearchState, mover: Color, params: &SearchParams, mut alpha: f64, mut beta: f64) -> EngineResult<(f64, Option<Move>)> {
        self.nodes += 1;
        let children = self.expand(state)?;
        if children.is_empty() { return Ok((self.leaf_value(state, mover, params), state.mv.clone())); }

        let mut best: Option<Move> = None;
        if state.turn == mover {
            let mut value = f64::NEG_INFINITY;
            for child in children {
                let (v, _) = self.alphabeta(&child, mover, params, alpha, beta)?;
                if v > value { value = v; best = child.mv; }
                alpha = alpha.max(value);
                if alpha >= beta { break; }
            }
            Ok((value, best))
        } else {
            let mut value = f64::INFINITY;
            for child in children {
                let (v, _) = self.alphabeta(&child, mover, params, alpha, beta)?;
                if v < value { value = v; best = child.mv; }
                beta = beta.min(value);
                if alpha >= beta { break; }
            }
            Ok((value, best))
        }
    }

    /// Exhaustive minimax without pruning. Same tie-breaking as `search`;
    /// useful as a reference when checking the pruned search.
    pub fn minimax(&mut self, board: &Board, mover: Color, params: SearchParams) -> EngineResult<SearchResult> {
        self.nodes = 0;
        self.cut_short = false;
        let root = SearchState::root(board.clone(), mover, params.depth);
        let (score, best) = self.minimax_node(&root, mover, &params)?;
        debug!("minimax depth={} nodes={} score={:.3}", params.depth, self.nodes, score);
        Ok(SearchResult { best, score, nodes: self.nodes })
    }

    fn minimax_node(&mut self, state: &SearchState, mover: Color, params: &SearchParams) -> EngineResult<(f64, Option<Move>)> {
        self.nodes += 1;
        let children = self.expand(state)?;
        if children.is_empty() { return Ok((self.leaf_value(state, mover, params), state.mv.clone())); }

        let maximizing = state.turn == mover;
        let mut value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best: Option<Move> = None;
        for child in children {
            let (v, _) = self.minimax_node(&child, mover, params)?;
            let better = if maximizing { v > value } else { v < value };
            if better { value = v; best = child.mv; }
        }
        Ok((value, best))
    }
}
