//! Board layout and ownership.
//!
//! A fixed ring of spaces built once from a `BoardConfig`. Positions wrap
//! modulo the board length; index 0 is the starting space.

pub mod layout;

pub use layout::{Advance, Board};
