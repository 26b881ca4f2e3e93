//! Player identification and the player registry.
//!
//! ## PlayerId
//!
//! Type-safe handle into the registry, assigned in registration order.
//!
//! ## PlayerRegistry
//!
//! Owns every `Player` record. Records live in a persistent `im::Vector`
//! (cheap to clone) and are looked up by name through an `FxHashMap` index.
//! Players are never removed: a bankrupt player keeps their slot.

use std::ops::{Index, IndexMut};

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Player identifier.
///
/// Indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the game.
///
/// The balance is unsigned: payments saturate at zero, so a player can be
/// driven to exactly 0 but never below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: u64,
    position: usize,
    bankrupt: bool,
}

impl Player {
    /// Create a player on the starting space.
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        Self {
            name: name.into(),
            balance,
            position: 0,
            bankrupt: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Board index the player is standing on.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// A player with nothing left cannot move or transact.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }

    pub(crate) fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Take up to `amount` from the player. Returns what was actually taken.
    pub(crate) fn debit(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.balance);
        self.balance -= taken;
        taken
    }

    pub(crate) fn move_to(&mut self, position: usize) {
        self.position = position;
    }

    /// Mark bankrupt. Returns true only on the first transition.
    pub(crate) fn mark_bankrupt(&mut self) -> bool {
        let first = !self.bankrupt;
        self.bankrupt = true;
        first
    }
}

/// Registry of all players, in registration order.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vector<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player.
    ///
    /// Fails with `PlayerAlreadyExists` if the name is taken; the existing
    /// registration is left unchanged.
    pub fn register(&mut self, name: &str, balance: u64) -> EngineResult<PlayerId> {
        if self.by_name.contains_key(name) {
            return Err(EngineError::PlayerAlreadyExists(name.to_string()));
        }

        let id = PlayerId(self.players.len() as u32);
        self.players.push_back(Player::new(name, balance));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve a name to its ID.
    pub fn id_of(&self, name: &str) -> EngineResult<PlayerId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::PlayerNotFound(name.to_string()))
    }

    /// Look up a player by name.
    pub fn lookup(&self, name: &str) -> EngineResult<&Player> {
        let id = self.id_of(name)?;
        Ok(&self.players[id.index()])
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over (PlayerId, &Player) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u32), p))
    }

    /// Iterate over (PlayerId, &mut Player) pairs in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        self.players
            .iter_mut()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u32), p))
    }
}

impl Index<PlayerId> for PlayerRegistry {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.players[player.index()]
    }
}

impl IndexMut<PlayerId> for PlayerRegistry {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.players[player.index()]
    }
}
