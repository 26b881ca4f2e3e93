//! Game rules: the engine that owns the board and the players.
//!
//! - `engine`: setup, registration, queries, purchases, win check
//! - `turn`: movement, rent settlement and the bankruptcy sweep
//! - `outcome`: what a resolved turn reports back to the caller
//!
//! Turns are strictly sequential. The caller decides whose turn it is,
//! supplies the dice result, and polls `check_game_over` after each move.

pub mod engine;
pub mod outcome;
mod turn;

pub use engine::GameEngine;
pub use outcome::{Bankruptcy, RentPayment, TurnOutcome, TurnRecord};
