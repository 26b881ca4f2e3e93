//! Board configuration and rule constants.
//!
//! The board shape is fixed: a starting space followed by
//! `BOARD_SIZE - 1` purchasable spaces in a fixed order. Games configure
//! only the money side of the board via `BoardConfig`:
//! - `start_bonus`: credited when a move reaches or passes the starting space
//! - `rent_amounts`: one rent per purchasable space, in board order

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Total number of spaces, including the starting space.
pub const BOARD_SIZE: usize = 25;

/// Name of the starting space.
pub const START_SPACE_NAME: &str = "Go";

/// Names of the purchasable spaces, in board order.
///
/// The last two are placeholders; the reference layout gives them no rent.
pub const SPACE_NAMES: [&str; BOARD_SIZE - 1] = [
    "Mediterranean Avenue",
    "Baltic Avenue",
    "Oriental Avenue",
    "Vermont Avenue",
    "Connecticut Avenue",
    "St. Charles Place",
    "States Avenue",
    "Virginia Avenue",
    "St. James Place",
    "Tennessee Avenue",
    "New York Avenue",
    "Kentucky Avenue",
    "Indiana Avenue",
    "Illinois Avenue",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Marvin Gardens",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Pennsylvania Avenue",
    "Park Place",
    "Boardwalk",
    "space_23",
    "space_24",
];

/// Smallest legal move.
pub const MIN_STEPS: i32 = 1;

/// Largest legal move (one die).
pub const MAX_STEPS: i32 = 6;

/// Purchase price as a multiple of rent.
pub const PURCHASE_MULTIPLIER: u64 = 5;

/// Money configuration for a board.
///
/// `rent_amounts` may be shorter than the number of purchasable spaces;
/// trailing spaces then have no rent.
///
/// ## Example
///
/// ```
/// use realty_engine::core::BoardConfig;
///
/// let config = BoardConfig::new(200).with_rent(50).with_rent(100);
/// assert_eq!(config.rent_for(1), 50);
/// assert_eq!(config.rent_for(2), 100);
/// assert_eq!(config.rent_for(3), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Bonus for reaching or passing the starting space.
    pub start_bonus: u64,

    /// Rent per purchasable space, in board order.
    #[serde(default)]
    pub rent_amounts: Vec<u64>,
}

impl BoardConfig {
    /// Create a config with no rents.
    #[must_use]
    pub fn new(start_bonus: u64) -> Self {
        Self {
            start_bonus,
            rent_amounts: Vec::new(),
        }
    }

    /// Create a config from an ordered rent list.
    #[must_use]
    pub fn with_rents(start_bonus: u64, rent_amounts: &[u64]) -> Self {
        Self {
            start_bonus,
            rent_amounts: rent_amounts.to_vec(),
        }
    }

    /// Append the rent for the next space.
    #[must_use]
    pub fn with_rent(mut self, rent: u64) -> Self {
        self.rent_amounts.push(rent);
        self
    }

    /// Rent for the space at board `index`. The starting space has none.
    #[must_use]
    pub fn rent_for(&self, index: usize) -> u64 {
        if index == 0 {
            return 0;
        }
        self.rent_amounts.get(index - 1).copied().unwrap_or(0)
    }

    /// Check that the rents fit on the board.
    pub fn validate(&self) -> EngineResult<()> {
        let max = BOARD_SIZE - 1;
        if self.rent_amounts.len() > max {
            return Err(EngineError::TooManyRents {
                given: self.rent_amounts.len(),
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_for_pads_with_zero() {
        let config = BoardConfig::with_rents(200, &[50, 100]);
        assert_eq!(config.rent_for(0), 0);
        assert_eq!(config.rent_for(1), 50);
        assert_eq!(config.rent_for(2), 100);
        assert_eq!(config.rent_for(24), 0);
    }

    #[test]
    fn test_validate_rejects_too_many_rents() {
        let config = BoardConfig::with_rents(200, &[10; BOARD_SIZE]);
        assert_eq!(
            config.validate(),
            Err(EngineError::TooManyRents { given: 25, max: 24 })
        );

        let full = BoardConfig::with_rents(200, &[10; BOARD_SIZE - 1]);
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::new(200).with_rent(50).with_rent(100);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let bare: BoardConfig = serde_json::from_str(r#"{"start_bonus": 150}"#).unwrap();
        assert_eq!(bare, BoardConfig::new(150));
    }
}
