//! Background search. One request is one whole `evaluate_move` call run on
//! the rayon pool; the caller gets a handle that resolves exactly once.
//! Only the board snapshot and the chosen move cross the boundary.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use thiserror::Error;

use crate::board::{Board, Color, Move};
use crate::engine::Engine;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRequest {
    pub board: Board,
    pub player: Color,
    pub ai_name: String,
    /// Seed for the clear-thought noise; fresh entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// `mv` is `null` when the player has no legal move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub mv: Option<Move>,
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("search cancelled")]
    Cancelled,
    #[error("worker exited without a reply")]
    Disconnected,
    #[error("bad payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Runs one request to completion on the current thread.
pub fn run_request(req: &WorkerRequest, abort: Option<Arc<AtomicBool>>) -> Result<WorkerResponse, WorkerError> {
    let mut engine = match req.seed { Some(s) => Engine::seeded(s), None => Engine::default() };
    if let Some(flag) = abort { engine.searcher_mut().set_abort(flag); }
    let mv = engine.evaluate_move(&req.board, req.player, &req.ai_name)?;
    if engine.searcher_mut().was_cut_short() { return Err(WorkerError::Cancelled); }
    Ok(WorkerResponse { mv })
}

/// JSON in, JSON out; the form used across a process boundary.
pub fn handle_json(payload: &str) -> Result<String, WorkerError> {
    let req: WorkerRequest = serde_json::from_str(payload)?;
    let resp = run_request(&req, None)?;
    Ok(serde_json::to_string(&resp)?)
}

pub struct SearchHandle {
    rx: Receiver<Result<WorkerResponse, WorkerError>>,
    cancel: Arc<AtomicBool>,
}

impl SearchHandle {
    /// Asks the search to stop. The handle then resolves to `Cancelled`
    /// unless the search had already finished.
    pub fn cancel(&self) { self.cancel.store(true, Ordering::Relaxed); }

    /// Blocks until the worker replies.
    pub fn wait(self) -> Result<WorkerResponse, WorkerError> {
        self.rx.recv().map_err(|_| WorkerError::Disconnected)?
    }

    /// Non-blocking poll, for callers driving a frame loop. Returns `None`
    /// while the search is still running.
    pub fn try_result(&self) -> Option<Result<WorkerResponse, WorkerError>> {
        match self.rx.try_recv() {
            Ok(r) => Some(r),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

/// Dispatches `req` to the rayon pool.
pub fn spawn_search(req: WorkerRequest) -> SearchHandle {
    let (tx, rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    debug!("dispatching search for {} ({})", req.player, req.ai_name);
    rayon::spawn(move || {
        let out = run_request(&req, Some(flag));
        if let Err(ref e) = out { debug!("search failed: {e}"); }
        if tx.send(out).is_err() { warn!("search finished after its handle was dropped"); }
    });
    SearchHandle { rx, cancel }
}
