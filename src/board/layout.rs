//! The board: an ordered ring of spaces.
//!
//! The `Board` is the single source of truth for ownership. Each `Space`
//! carries its own owner; anything that looks like an ownership index is
//! derived from those fields on demand.

use im::Vector;
use smallvec::SmallVec;

use crate::core::config::{BoardConfig, SPACE_NAMES, START_SPACE_NAME};
use crate::core::error::EngineResult;
use crate::core::player::PlayerId;
use crate::core::space::{Space, SpaceId};

/// Result of advancing a position around the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Wrapped destination.
    pub to: SpaceId,
    /// The unwrapped destination reached or passed the end of the board.
    pub lapped: bool,
}

/// Ordered sequence of spaces; index 0 is the starting space.
///
/// Backed by `im::Vector` so cloning a board is O(1).
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vector<Space>,
}

impl Board {
    /// Build the starting space followed by one space per configured rent.
    ///
    /// Spaces without a configured rent get rent 0. Every space carries the
    /// start bonus as its `go_money`.
    pub fn from_config(config: &BoardConfig) -> EngineResult<Self> {
        config.validate()?;

        let mut spaces = Vector::new();
        spaces.push_back(Space::new(START_SPACE_NAME, config.start_bonus, 0));

        for (i, name) in SPACE_NAMES.iter().enumerate() {
            spaces.push_back(Space::new(*name, config.start_bonus, config.rent_for(i + 1)));
        }

        Ok(Self { spaces })
    }

    /// Number of spaces, including the starting space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    #[must_use]
    pub fn get(&self, space: SpaceId) -> Option<&Space> {
        self.spaces.get(space.index())
    }

    pub(crate) fn get_mut(&mut self, space: SpaceId) -> Option<&mut Space> {
        self.spaces.get_mut(space.index())
    }

    /// Bonus credited on a lap. Only the starting space's value counts.
    #[must_use]
    pub fn start_bonus(&self) -> u64 {
        self.spaces.front().map_or(0, Space::go_money)
    }

    /// Move `steps` forward from `from`, wrapping around the board.
    #[must_use]
    pub fn advance(&self, from: usize, steps: usize) -> Advance {
        let raw = from + steps;
        let len = self.spaces.len().max(1);
        Advance {
            to: SpaceId(u16::try_from(raw % len).unwrap_or(0)),
            lapped: raw >= len,
        }
    }

    /// Iterate over (SpaceId, &Space) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (SpaceId, &Space)> {
        self.spaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SpaceId(i as u16), s))
    }

    /// Owned spaces with their owners, in board order.
    pub fn ownership(&self) -> impl Iterator<Item = (SpaceId, &Space, PlayerId)> {
        self.iter()
            .filter_map(|(id, space)| space.owner().map(|owner| (id, space, owner)))
    }

    /// Spaces currently owned by `player`, in board order.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = SpaceId> + '_ {
        self.iter()
            .filter(move |(_, space)| space.is_owned_by(player))
            .map(|(id, _)| id)
    }

    /// Return every space owned by `player` to the bank.
    ///
    /// Returns the released spaces.
    pub(crate) fn release_all(&mut self, player: PlayerId) -> SmallVec<[SpaceId; 4]> {
        let released: SmallVec<[SpaceId; 4]> = self.owned_by(player).collect();
        for &id in &released {
            if let Some(space) = self.get_mut(id) {
                space.set_owner(None);
            }
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BOARD_SIZE;

    fn board() -> Board {
        Board::from_config(&BoardConfig::with_rents(200, &[50, 100])).unwrap()
    }

    #[test]
    fn test_layout() {
        let board = board();
        assert_eq!(board.len(), BOARD_SIZE);

        let go = board.get(SpaceId::START).unwrap();
        assert_eq!(go.name(), "Go");
        assert_eq!(go.rent_amount(), 0);
        assert_eq!(board.start_bonus(), 200);

        let first = board.get(SpaceId::new(1)).unwrap();
        assert_eq!(first.name(), "Mediterranean Avenue");
        assert_eq!(first.rent_amount(), 50);
        assert_eq!(first.go_money(), 200);

        let last = board.get(SpaceId::new(24)).unwrap();
        assert_eq!(last.name(), "space_24");
        assert_eq!(last.rent_amount(), 0);
    }

    #[test]
    fn test_advance_wraps_and_flags_lap() {
        let board = board();

        assert_eq!(board.advance(0, 3), Advance { to: SpaceId::new(3), lapped: false });
        assert_eq!(board.advance(22, 2), Advance { to: SpaceId::new(24), lapped: false });
        assert_eq!(board.advance(22, 3), Advance { to: SpaceId::START, lapped: true });
        assert_eq!(board.advance(23, 6), Advance { to: SpaceId::new(4), lapped: true });
    }

    #[test]
    fn test_release_all() {
        let mut board = board();
        let alice = PlayerId::new(0);
        let bob = PlayerId::new(1);

        board.get_mut(SpaceId::new(1)).unwrap().set_owner(Some(alice));
        board.get_mut(SpaceId::new(2)).unwrap().set_owner(Some(bob));
        board.get_mut(SpaceId::new(5)).unwrap().set_owner(Some(alice));

        let released = board.release_all(alice);
        assert_eq!(released.as_slice(), &[SpaceId::new(1), SpaceId::new(5)]);
        assert_eq!(board.owned_by(alice).count(), 0);

        let remaining: Vec<_> = board.ownership().map(|(id, _, owner)| (id, owner)).collect();
        assert_eq!(remaining, vec![(SpaceId::new(2), bob)]);
    }
}
