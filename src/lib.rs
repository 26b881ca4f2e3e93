//! # realty-engine
//!
//! A simplified real-estate board game engine.
//!
//! Players move around a fixed ring of 25 spaces, buy unowned spaces for
//! five times their rent, pay rent when landing on someone else's space,
//! and go bankrupt when their balance reaches zero. The last solvent player
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: The engine rolls no dice and picks no turn order.
//!    The driver supplies step counts and decides who moves next.
//!
//! 2. **Errors for Misuse Only**: Unknown players, duplicate names and
//!    out-of-range steps are `EngineError`s. Declined purchases and partial
//!    rent payments are ordinary outcomes.
//!
//! 3. **One Source of Truth**: Ownership lives on each `Space`. The
//!    ownership index is a projection computed on demand.
//!
//! ## Modules
//!
//! - `core`: Player and space records, board configuration, errors
//! - `board`: The ordered ring of spaces and ownership queries
//! - `rules`: `GameEngine`, turn resolution and turn records

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, EngineError, EngineResult,
    Player, PlayerId, PlayerRegistry,
    Space, SpaceId,
    BOARD_SIZE, MAX_STEPS, MIN_STEPS, PURCHASE_MULTIPLIER,
};

pub use crate::board::{Advance, Board};

pub use crate::rules::{Bankruptcy, GameEngine, RentPayment, TurnOutcome, TurnRecord};
