//! The game engine: setup, registration, queries, purchases, win check.
//!
//! Turn resolution lives in `turn.rs`.
//!
//! ## Usage
//!
//! ```
//! use realty_engine::GameEngine;
//!
//! let mut game = GameEngine::new();
//! game.create_spaces(200, &[50, 100]).unwrap();
//! game.create_player("alice", 1500).unwrap();
//! game.create_player("bob", 1500).unwrap();
//!
//! game.move_player("alice", 1).unwrap();
//! assert!(game.buy_space("alice").unwrap());
//! assert_eq!(game.get_balance("alice").unwrap(), 1250);
//!
//! game.move_player("bob", 1).unwrap();
//! assert_eq!(game.get_balance("bob").unwrap(), 1450);
//! assert_eq!(game.get_balance("alice").unwrap(), 1300);
//! assert_eq!(game.check_game_over(), None);
//! ```

use std::collections::BTreeMap;

use im::Vector;
use log::{debug, info};

use crate::board::Board;
use crate::core::config::BoardConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::core::player::{Player, PlayerId, PlayerRegistry};
use crate::core::space::{Space, SpaceId};

use super::outcome::TurnRecord;

/// Why a purchase was declined.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Declined {
    StartingSpace,
    /// Holds the owner's name.
    AlreadyOwned(String),
    InsufficientFunds { balance: u64, price: u64 },
}

impl std::fmt::Display for Declined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Declined::StartingSpace => write!(f, "the starting space is not for sale"),
            Declined::AlreadyOwned(owner) => write!(f, "already owned by {}", owner),
            Declined::InsufficientFunds { balance, price } => {
                write!(f, "balance {} does not exceed price {}", balance, price)
            }
        }
    }
}

/// A single game: one board, its players, and the turn history.
///
/// Cloning is cheap; the board, the player records and the history are
/// persistent structures.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    pub(super) board: Option<Board>,
    pub(super) players: PlayerRegistry,
    pub(super) history: Vector<TurnRecord>,
}

impl GameEngine {
    /// Create an engine with no board and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and set up its board from `config`.
    pub fn with_board(config: &BoardConfig) -> EngineResult<Self> {
        let mut engine = Self::new();
        engine.board = Some(Board::from_config(config)?);
        Ok(engine)
    }

    // === Setup ===

    /// Build the board: the starting space, then one space per rent.
    ///
    /// May be called only once per game.
    pub fn create_spaces(&mut self, start_bonus: u64, rent_amounts: &[u64]) -> EngineResult<()> {
        if self.board.is_some() {
            return Err(EngineError::BoardAlreadyCreated);
        }
        self.board = Some(Board::from_config(&BoardConfig::with_rents(start_bonus, rent_amounts))?);
        Ok(())
    }

    /// Register a player on the starting space.
    pub fn create_player(&mut self, name: &str, balance: u64) -> EngineResult<PlayerId> {
        let id = self.players.register(name, balance)?;
        debug!("registered {} as {} with balance {}", name, id, balance);
        Ok(id)
    }

    // === Queries ===

    pub fn get_balance(&self, name: &str) -> EngineResult<u64> {
        Ok(self.players.lookup(name)?.balance())
    }

    pub fn get_position(&self, name: &str) -> EngineResult<usize> {
        Ok(self.players.lookup(name)?.position())
    }

    pub fn get_bankruptcy_status(&self, name: &str) -> EngineResult<bool> {
        Ok(self.players.lookup(name)?.is_bankrupt())
    }

    /// Full record for a player.
    pub fn player(&self, name: &str) -> EngineResult<&Player> {
        self.players.lookup(name)
    }

    /// Registered players, in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    /// The board, once created.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Spaces in board order. Empty before `create_spaces`.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.board.iter().flat_map(|b| b.iter().map(|(_, s)| s))
    }

    #[must_use]
    pub fn space(&self, index: usize) -> Option<&Space> {
        let id = SpaceId(u16::try_from(index).ok()?);
        self.board.as_ref()?.get(id)
    }

    /// Name of the owner of the space at `index`, if it is owned.
    #[must_use]
    pub fn owner_of(&self, index: usize) -> Option<&str> {
        let owner = self.space(index)?.owner()?;
        self.players.get(owner).map(Player::name)
    }

    /// Spaces currently owned by `name`, in board order.
    pub fn owned_spaces(&self, name: &str) -> EngineResult<Vec<SpaceId>> {
        let id = self.players.id_of(name)?;
        Ok(self
            .board
            .iter()
            .flat_map(|b| b.owned_by(id))
            .collect())
    }

    /// Ownership index: space -> (space name, owner name).
    ///
    /// Derived from the spaces' owner fields on each call.
    #[must_use]
    pub fn space_ownership(&self) -> BTreeMap<SpaceId, (String, String)> {
        let Some(board) = &self.board else {
            return BTreeMap::new();
        };

        board
            .ownership()
            .filter_map(|(id, space, owner)| {
                let owner = self.players.get(owner)?;
                Some((id, (space.name().to_string(), owner.name().to_string())))
            })
            .collect()
    }

    /// Every resolved move so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Purchase ===

    /// Buy the space the player is standing on.
    ///
    /// Succeeds only if the space is not the starting space, has no owner,
    /// and the player's balance strictly exceeds the purchase price.
    /// A declined purchase returns `Ok(false)` and changes nothing.
    pub fn buy_space(&mut self, name: &str) -> EngineResult<bool> {
        let id = self.players.id_of(name)?;
        let board = self.board.as_ref().ok_or(EngineError::BoardNotCreated)?;

        let (at, price) = match self.check_purchase(board, id) {
            Ok(offer) => offer,
            Err(reason) => {
                debug!("{} cannot buy here: {}", name, reason);
                return Ok(false);
            }
        };

        let Some(space) = self.board.as_mut().and_then(|b| b.get_mut(at)) else {
            return Ok(false);
        };
        self.players[id].debit(price);
        space.set_owner(Some(id));
        info!("{} bought {} for {}", name, space.name(), price);
        Ok(true)
    }

    /// Decide whether `buyer` may buy the space under them, and at what price.
    fn check_purchase(&self, board: &Board, buyer: PlayerId) -> Result<(SpaceId, u64), Declined> {
        let player = &self.players[buyer];
        let at = SpaceId(u16::try_from(player.position()).unwrap_or(0));
        let space = board.get(at).ok_or(Declined::StartingSpace)?;
        let price = space.purchase_price();

        if at.is_start() {
            return Err(Declined::StartingSpace);
        }
        if let Some(owner) = space.owner() {
            let owner = self
                .players
                .get(owner)
                .map_or_else(|| owner.to_string(), |p| p.name().to_string());
            return Err(Declined::AlreadyOwned(owner));
        }
        if player.balance() <= price {
            return Err(Declined::InsufficientFunds { balance: player.balance(), price });
        }
        Ok((at, price))
    }

    // === Win check ===

    /// The winner, if exactly one registered player is still solvent.
    ///
    /// Returns `None` while two or more are solvent, and also when nobody
    /// is (no players, or everyone bankrupt).
    #[must_use]
    pub fn check_game_over(&self) -> Option<String> {
        let mut bankrupt = 0;
        let mut last_solvent = None;

        for (_, player) in self.players.iter() {
            if player.is_bankrupt() {
                bankrupt += 1;
            } else {
                last_solvent = Some(player.name());
            }
        }

        if self.players.len() - bankrupt == 1 {
            last_solvent.map(str::to_string)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameEngine {
        let mut game = GameEngine::new();
        game.create_spaces(200, &[50, 100]).unwrap();
        game.create_player("alice", 1500).unwrap();
        game.create_player("bob", 1500).unwrap();
        game
    }

    #[test]
    fn test_create_spaces_twice_is_rejected() {
        let mut game = game();
        assert_eq!(game.create_spaces(100, &[1]), Err(EngineError::BoardAlreadyCreated));
        assert_eq!(game.space(1).unwrap().rent_amount(), 50);
        assert_eq!(game.spaces().count(), 25);
    }

    #[test]
    fn test_buy_requires_board() {
        let mut game = GameEngine::new();
        game.create_player("alice", 1500).unwrap();
        assert_eq!(game.buy_space("alice"), Err(EngineError::BoardNotCreated));
    }

    #[test]
    fn test_buy_on_start_is_declined() {
        let mut game = game();
        assert!(!game.buy_space("alice").unwrap());
        assert_eq!(game.get_balance("alice").unwrap(), 1500);
        assert!(game.space_ownership().is_empty());
    }

    #[test]
    fn test_ownership_projection() {
        let mut game = game();
        game.move_player("alice", 2).unwrap();
        assert!(game.buy_space("alice").unwrap());

        let ownership = game.space_ownership();
        assert_eq!(
            ownership.get(&SpaceId::new(2)),
            Some(&("Baltic Avenue".to_string(), "alice".to_string()))
        );
        assert_eq!(game.owner_of(2), Some("alice"));
        assert_eq!(game.owned_spaces("alice").unwrap(), vec![SpaceId::new(2)]);
        assert!(game.owned_spaces("bob").unwrap().is_empty());
    }

    #[test]
    fn test_declined_purchase_names_the_owner() {
        let mut game = game();
        game.move_player("alice", 1).unwrap();
        assert!(game.buy_space("alice").unwrap());
        game.move_player("bob", 1).unwrap();

        let board = game.board().unwrap();
        let bob = game.players.id_of("bob").unwrap();
        let reason = game.check_purchase(board, bob).unwrap_err();
        assert_eq!(reason, Declined::AlreadyOwned("alice".to_string()));
        assert_eq!(reason.to_string(), "already owned by alice");
    }

    #[test]
    fn test_check_purchase_reasons() {
        let mut game = game();
        let board = game.board().unwrap();
        let alice = game.players.id_of("alice").unwrap();
        assert_eq!(game.check_purchase(board, alice), Err(Declined::StartingSpace));

        game.create_player("poor", 500).unwrap();
        game.move_player("poor", 2).unwrap();
        let board = game.board().unwrap();
        let poor = game.players.id_of("poor").unwrap();
        assert_eq!(
            game.check_purchase(board, poor),
            Err(Declined::InsufficientFunds { balance: 500, price: 500 })
        );

        game.move_player("alice", 2).unwrap();
        let board = game.board().unwrap();
        assert_eq!(game.check_purchase(board, alice), Ok((SpaceId::new(2), 500)));
    }

    #[test]
    fn test_game_over_counts() {
        let mut game = GameEngine::new();
        assert_eq!(game.check_game_over(), None);

        game.create_player("solo", 100).unwrap();
        assert_eq!(game.check_game_over(), Some("solo".to_string()));

        game.create_player("other", 100).unwrap();
        assert_eq!(game.check_game_over(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = game();
        let snapshot = game.clone();

        game.move_player("alice", 1).unwrap();
        game.buy_space("alice").unwrap();

        assert_eq!(snapshot.get_position("alice").unwrap(), 0);
        assert_eq!(snapshot.owner_of(1), None);
        assert!(snapshot.history().is_empty());
        assert_eq!(game.history().len(), 1);
    }
}
