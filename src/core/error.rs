//! Engine error kinds.
//!
//! Only caller misuse is an error. Economic outcomes (a declined purchase,
//! a partial rent payment) are ordinary return values.

use thiserror::Error;

/// Result alias used by every fallible engine operation.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player '{0}' already exists")]
    PlayerAlreadyExists(String),

    #[error("player '{0}' does not exist")]
    PlayerNotFound(String),

    #[error("invalid number of steps {0}: must be between 1 and 6")]
    InvalidMoveSteps(i32),

    #[error("board has already been created")]
    BoardAlreadyCreated,

    #[error("board has not been created yet")]
    BoardNotCreated,

    #[error("{given} rent amounts given but the board only has {max} purchasable spaces")]
    TooManyRents { given: usize, max: usize },
}
