//! Board spaces.

use serde::{Deserialize, Serialize};

use super::config::PURCHASE_MULTIPLIER;
use super::player::PlayerId;

/// Space identifier: the space's index on the board.
///
/// `SpaceId(0)` is always the starting space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u16);

impl SpaceId {
    /// The starting space.
    pub const START: SpaceId = SpaceId(0);

    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// A single board cell.
///
/// Every space carries the board's start bonus as `go_money`, but only the
/// starting space's value is ever read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    name: String,
    go_money: u64,
    rent_amount: u64,
    owner: Option<PlayerId>,
}

impl Space {
    /// Create an unowned space.
    pub fn new(name: impl Into<String>, go_money: u64, rent_amount: u64) -> Self {
        Self {
            name: name.into(),
            go_money,
            rent_amount,
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn go_money(&self) -> u64 {
        self.go_money
    }

    #[must_use]
    pub fn rent_amount(&self) -> u64 {
        self.rent_amount
    }

    /// Cost to buy this space: a fixed multiple of its rent.
    #[must_use]
    pub fn purchase_price(&self) -> u64 {
        self.rent_amount.saturating_mul(PURCHASE_MULTIPLIER)
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}
