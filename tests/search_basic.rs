mod common;

use checkersbot::board::{Board, Color};
use checkersbot::engine::Engine;
use checkersbot::search::alphabeta::{SearchParams, Searcher};
use checkersbot::search::eval::{material_eval, Heuristic};
use checkersbot::search::noise::{NoiseSource, PinnedNoise};
use checkersbot::EngineError;
use common::{place, place_king, pos};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[test]
fn eval_material_startpos_is_zero() {
    let b = Board::create();
    assert_eq!(material_eval(&b, Color::White), 0);
    assert_eq!(material_eval(&b, Color::Black), 0);
}

#[test]
fn eval_counts_kings_double() {
    let mut b = Board::empty();
    place_king(&mut b, 1, 1, 0, Color::White);
    place(&mut b, 3, 3, 1, Color::White);
    place(&mut b, 5, 5, 12, Color::Black);
    assert_eq!(material_eval(&b, Color::White), 2);
    assert_eq!(material_eval(&b, Color::Black), -2);
    assert_eq!(Heuristic::Material.score(&b, Color::White), 2.0);
}

#[test]
fn opening_search_returns_a_white_step() {
    let mut engine = Engine::with_noise(PinnedNoise(0.0));
    let mv = engine.evaluate_move(&Board::create(), Color::White, "Easy").unwrap().expect("a move");
    assert_eq!(mv.piece.color, Color::White);
    assert_eq!(mv.steps.len(), 1);
    assert!(mv.remove_pieces.is_empty());
}

#[test]
fn ties_keep_the_first_generated_move() {
    let mut s = Searcher::with_noise(PinnedNoise(0.0));
    let res = s.search(&Board::create(), Color::White, SearchParams { depth: 1, ..SearchParams::default() }).unwrap();
    let mv = res.best.unwrap();
    assert_eq!(mv.piece.index, 8);
    assert_eq!(mv.steps, vec![pos(1, 3)]);
    assert_eq!(res.score, 0.0);
}

#[test]
fn no_legal_moves_means_no_move() {
    let mut b = Board::empty();
    place(&mut b, 1, 1, 12, Color::Black);
    place(&mut b, 0, 0, 0, Color::White);
    place(&mut b, 2, 0, 1, Color::White);
    let mut engine = Engine::seeded(3);
    assert_eq!(engine.evaluate_move(&b, Color::Black, "Hard").unwrap(), None);

    let only_white = {
        let mut b = Board::empty();
        place(&mut b, 3, 3, 0, Color::White);
        b
    };
    assert_eq!(engine.evaluate_move(&only_white, Color::Black, "Very easy").unwrap(), None);
}

#[test]
fn unknown_profile_is_an_error() {
    let mut engine = Engine::seeded(1);
    let err = engine.evaluate_move(&Board::create(), Color::White, "Grandmaster").unwrap_err();
    assert_eq!(err, EngineError::UnknownProfile("Grandmaster".to_string()));
}

#[test]
fn prefers_the_bigger_capture() {
    // a1 can take one man, f2 can take two; the double jump is generated second.
    let mut b = Board::empty();
    place(&mut b, 0, 0, 0, Color::White);
    place(&mut b, 5, 1, 1, Color::White);
    place(&mut b, 1, 1, 12, Color::Black);
    place(&mut b, 6, 2, 13, Color::Black);
    place(&mut b, 6, 4, 14, Color::Black);
    let moves = b.compute_possible_moves(Color::White);
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].remove_pieces.len(), 1);

    let mut s = Searcher::with_noise(PinnedNoise(0.0));
    let res = s.search(&b, Color::White, SearchParams { depth: 1, ..SearchParams::default() }).unwrap();
    let best = res.best.unwrap();
    assert_eq!(best.steps, vec![pos(7, 3), pos(5, 5)]);
    assert_eq!(res.score, 1.0);
}

#[test]
fn pinned_noise_makes_search_repeatable() {
    let b = Board::create();
    for name in ["Very easy", "Easy", "Medium"] {
        let a = Engine::with_noise(PinnedNoise(0.37)).evaluate_move(&b, Color::Black, name).unwrap();
        let c = Engine::with_noise(PinnedNoise(0.37)).evaluate_move(&b, Color::Black, name).unwrap();
        assert_eq!(a, c, "profile {name} not repeatable");
    }
}

#[test]
fn seeded_noise_makes_search_repeatable() {
    let b = Board::create();
    let a = Engine::seeded(99).evaluate_move(&b, Color::White, "Very easy").unwrap();
    let c = Engine::seeded(99).evaluate_move(&b, Color::White, "Very easy").unwrap();
    assert_eq!(a, c);
}

#[test]
fn alphabeta_agrees_with_minimax_and_visits_fewer_nodes() {
    let mut mid = Board::create();
    // a few opening plies to get some contact between the armies
    for side in [Color::White, Color::Black, Color::White, Color::Black] {
        let m = mid.compute_possible_moves(side).remove(0);
        mid.apply(&m).unwrap();
    }
    for board in [Board::create(), mid] {
        for depth in 1..=4 {
            let params = SearchParams { depth, ..SearchParams::default() };
            let mut ab = Searcher::with_noise(PinnedNoise(0.0));
            let mut mm = Searcher::with_noise(PinnedNoise(0.0));
            let r1 = ab.search(&board, Color::White, params).unwrap();
            let r2 = mm.minimax(&board, Color::White, params).unwrap();
            assert_eq!(r1.best, r2.best, "depth {depth}");
            assert_eq!(r1.score, r2.score, "depth {depth}");
            assert!(r1.nodes <= r2.nodes);
        }
    }
}

#[test]
fn depth_zero_has_no_move() {
    let mut s = Searcher::with_noise(PinnedNoise(0.0));
    let res = s.search(&Board::create(), Color::White, SearchParams { depth: 0, ..SearchParams::default() }).unwrap();
    assert!(res.best.is_none());
    assert_eq!(res.nodes, 1);
}

/// Replays `draws` in a cycle and counts how often it is asked.
struct ScriptedNoise {
    draws: Vec<f64>,
    calls: Rc<Cell<usize>>,
}

impl NoiseSource for ScriptedNoise {
    fn sample(&mut self) -> f64 {
        let n = self.calls.get();
        self.calls.set(n + 1);
        self.draws[n % self.draws.len()]
    }
}

#[test]
fn every_leaf_gets_its_own_noise_draw() {
    let calls = Rc::new(Cell::new(0));
    let mut s = Searcher::with_noise(ScriptedNoise { draws: vec![0.0], calls: calls.clone() });
    let params = SearchParams { depth: 2, clear_thought: 0.5, ..SearchParams::default() };
    s.minimax(&Board::create(), Color::White, params).unwrap();
    assert_eq!(calls.get(), 49, "one draw per depth-2 leaf");

    calls.set(0);
    s.search(&Board::create(), Color::White, params).unwrap();
    assert!(calls.get() >= 7 && calls.get() <= 49);
}

#[test]
fn noise_can_change_the_chosen_move() {
    // Two single captures that leave the same material behind.
    let mut b = Board::empty();
    place(&mut b, 0, 0, 0, Color::White);
    place(&mut b, 5, 1, 1, Color::White);
    place(&mut b, 1, 1, 12, Color::Black);
    place(&mut b, 6, 2, 13, Color::Black);
    let params = SearchParams { depth: 1, clear_thought: 0.5, ..SearchParams::default() };

    let calm = Searcher::with_noise(PinnedNoise(0.0)).search(&b, Color::White, params).unwrap();
    assert_eq!(calm.best.unwrap().piece.index, 0);

    let calls = Rc::new(Cell::new(0));
    let mut s = Searcher::with_noise(ScriptedNoise { draws: vec![-1.0, 1.0], calls: calls.clone() });
    let noisy = s.search(&b, Color::White, params).unwrap();
    assert_eq!(calls.get(), 2);
    assert_eq!(noisy.best.unwrap().piece.index, 1);
    assert_eq!(noisy.score, 1.5);
}

#[test]
fn abort_is_reported_only_when_it_cut_the_search() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut s = Searcher::with_noise(PinnedNoise(0.0));
    s.set_abort(flag.clone());
    let params = SearchParams { depth: 3, ..SearchParams::default() };
    assert!(s.search(&Board::create(), Color::White, params).unwrap().best.is_some());
    flag.store(true, std::sync::atomic::Ordering::Relaxed);
    assert!(!s.was_cut_short(), "finished before the flag was raised");

    let res = s.search(&Board::create(), Color::White, params).unwrap();
    assert!(s.was_cut_short());
    assert!(res.best.is_none());
    assert_eq!(res.nodes, 1);
}
