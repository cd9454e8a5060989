use log::{debug, info};

use crate::board::{Board, Color, Move};
use crate::error::EngineResult;
use crate::profile;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::noise::{NoiseSource, RandomNoise};

/// Legal moves for `color`, in generator order.
pub fn compute_moves(board: &Board, color: Color) -> Vec<Move> { board.compute_possible_moves(color) }

/// Plays `mv` on `board` in place. `mv` must come from `compute_moves` on
/// this exact position.
pub fn apply<'a>(board: &'a mut Board, mv: &Move) -> EngineResult<&'a mut Board> { board.apply(mv) }

/// Picks moves for computer players. Holds the noise source so repeated
/// calls keep drawing from one seeded stream.
pub struct Engine<N: NoiseSource = RandomNoise> {
    searcher: Searcher<N>,
}

impl Default for Engine<RandomNoise> {
    fn default() -> Self { Self { searcher: Searcher::default() } }
}

impl Engine<RandomNoise> {
    pub fn seeded(seed: u64) -> Self { Self { searcher: Searcher::seeded(seed) } }
}

impl<N: NoiseSource> Engine<N> {
    pub fn with_noise(noise: N) -> Self { Self { searcher: Searcher::with_noise(noise) } }

    pub fn searcher_mut(&mut self) -> &mut Searcher<N> { &mut self.searcher }

    /// Best move for `mover` under the named profile. `Ok(None)` means the
    /// mover has no legal move and has lost. An unknown profile is an error.
    pub fn evaluate_move(&mut self, board: &Board, mover: Color, profile_name: &str) -> EngineResult<Option<Move>> {
        let prof = profile::get_by_name(profile_name)?;
        let params = SearchParams::from_profile(prof);
        debug!("evaluate_move profile={:?} mover={} depth={}", prof.name, mover, params.depth);
        let res = self.searcher.search(board, mover, params)?;
        if res.best.is_none() { info!("{} has no legal moves", mover); }
        Ok(res.best)
    }
}
