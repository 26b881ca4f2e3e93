//! Results of turn resolution.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::space::SpaceId;

/// What a `move_player` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The mover had no money left, so nothing happened.
    Skipped,
    /// The mover moved; details in the record.
    Moved(TurnRecord),
}

impl TurnOutcome {
    /// The turn record, if the player moved.
    #[must_use]
    pub fn record(&self) -> Option<&TurnRecord> {
        match self {
            TurnOutcome::Moved(record) => Some(record),
            TurnOutcome::Skipped => None,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, TurnOutcome::Skipped)
    }
}

/// Rent settled on landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentPayment {
    /// Who received the rent.
    pub owner: PlayerId,
    /// Rent printed on the space.
    pub due: u64,
    /// What was actually transferred. Less than `due` when the mover
    /// could not cover it.
    pub paid: u64,
}

impl RentPayment {
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.paid < self.due
    }
}

/// A player who went bankrupt during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankruptcy {
    pub player: PlayerId,
    /// Spaces returned to the bank.
    pub released: SmallVec<[SpaceId; 4]>,
}

/// A resolved move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who moved.
    pub player: PlayerId,

    pub from: SpaceId,
    pub to: SpaceId,
    pub steps: u8,

    /// Start bonus credited for reaching or passing the starting space (0 if none).
    pub lap_bonus: u64,

    /// Rent settled on the destination, if any was owed.
    pub rent: Option<RentPayment>,

    /// Players newly marked bankrupt by this turn.
    pub bankruptcies: SmallVec<[Bankruptcy; 1]>,
}

impl TurnRecord {
    /// Did this turn bankrupt `player`?
    #[must_use]
    pub fn bankrupted(&self, player: PlayerId) -> bool {
        self.bankruptcies.iter().any(|b| b.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_partial_rent() {
        let full = RentPayment { owner: PlayerId::new(0), due: 100, paid: 100 };
        let partial = RentPayment { owner: PlayerId::new(0), due: 100, paid: 40 };
        assert!(!full.is_partial());
        assert!(partial.is_partial());
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(TurnOutcome::Skipped.is_skipped());
        assert!(TurnOutcome::Skipped.record().is_none());

        let record = TurnRecord {
            player: PlayerId::new(1),
            from: SpaceId::new(0),
            to: SpaceId::new(2),
            steps: 2,
            lap_bonus: 0,
            rent: None,
            bankruptcies: smallvec![Bankruptcy {
                player: PlayerId::new(1),
                released: SmallVec::new(),
            }],
        };
        let outcome = TurnOutcome::Moved(record.clone());
        assert_eq!(outcome.record(), Some(&record));
        assert!(record.bankrupted(PlayerId::new(1)));
        assert!(!record.bankrupted(PlayerId::new(0)));
    }

    #[test]
    fn test_record_serialization() {
        let outcome = TurnOutcome::Moved(TurnRecord {
            player: PlayerId::new(0),
            from: SpaceId::new(24),
            to: SpaceId::new(1),
            steps: 2,
            lap_bonus: 200,
            rent: Some(RentPayment { owner: PlayerId::new(1), due: 50, paid: 50 }),
            bankruptcies: SmallVec::new(),
        });
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: TurnOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
