use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No profile in the catalog carries this name.
    #[error("unknown AI profile: {0:?}")]
    UnknownProfile(String),
    /// A piece index was looked up on a board that does not hold it.
    #[error("piece not found on board (index {0})")]
    PieceNotFound(u8),
    /// The move does not fit the board it is applied to.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
