//! Core engine types: players, spaces, configuration, errors.
//!
//! These are the leaf records the board and the rules are built from.

pub mod config;
pub mod error;
pub mod player;
pub mod space;

pub use config::{
    BoardConfig, BOARD_SIZE, MAX_STEPS, MIN_STEPS, PURCHASE_MULTIPLIER, SPACE_NAMES, START_SPACE_NAME,
};
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use space::{Space, SpaceId};
