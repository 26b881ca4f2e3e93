//! Turn resolution: move, lap bonus, rent, bankruptcy.
//!
//! `move_player` validates everything before touching state, so a failed
//! call leaves the game exactly as it was.

use log::{info, trace};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::config::{MAX_STEPS, MIN_STEPS};
use crate::core::error::{EngineError, EngineResult};
use crate::core::player::{PlayerId, PlayerRegistry};
use crate::core::space::SpaceId;

use super::engine::GameEngine;
use super::outcome::{Bankruptcy, RentPayment, TurnOutcome, TurnRecord};

impl GameEngine {
    /// Move a player `steps` spaces forward and settle the landing.
    ///
    /// 1. A player with zero balance does not move: `Ok(TurnOutcome::Skipped)`.
    /// 2. `steps` must be within 1..=6.
    /// 3. Reaching or passing the starting space credits the start bonus.
    /// 4. Landing on a space owned by someone else pays its rent to the
    ///    owner. A mover who cannot cover it pays everything they have.
    ///    Unowned or own spaces end the turn here.
    /// 5. After a rent payment, every player left with zero balance is
    ///    marked bankrupt and their spaces are released.
    pub fn move_player(&mut self, name: &str, steps: i32) -> EngineResult<TurnOutcome> {
        let id = self.players.id_of(name)?;
        if self.players[id].is_broke() {
            trace!("{} has no money left, skipping move", name);
            return Ok(TurnOutcome::Skipped);
        }

        let board = self.board.as_mut().ok_or(EngineError::BoardNotCreated)?;
        if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
            return Err(EngineError::InvalidMoveSteps(steps));
        }
        let steps = steps as u8;

        let mover = &mut self.players[id];
        let from = mover.position();
        let advance = board.advance(from, usize::from(steps));
        mover.move_to(advance.to.index());

        let lap_bonus = if advance.lapped { board.start_bonus() } else { 0 };
        mover.credit(lap_bonus);

        trace!(
            "{} moved {} -> {} (lap bonus {})",
            name,
            from,
            advance.to.index(),
            lap_bonus
        );

        // Unowned or own space: the turn ends without a sweep
        let rent = settle_rent(board, &mut self.players, id, advance.to);
        let bankruptcies = match rent {
            Some(_) => sweep_bankruptcies(board, &mut self.players),
            None => SmallVec::new(),
        };

        let record = TurnRecord {
            player: id,
            from: SpaceId(u16::try_from(from).unwrap_or(0)),
            to: advance.to,
            steps,
            lap_bonus,
            rent,
            bankruptcies,
        };
        self.history.push_back(record.clone());

        Ok(TurnOutcome::Moved(record))
    }
}

/// Charge rent for landing on `at`, if someone else owns it.
fn settle_rent(
    board: &Board,
    players: &mut PlayerRegistry,
    mover: PlayerId,
    at: SpaceId,
) -> Option<RentPayment> {
    let space = board.get(at)?;
    let owner = space.owner().filter(|&owner| owner != mover)?;

    let due = space.rent_amount();
    let paid = players[mover].debit(due);
    players[owner].credit(paid);

    if paid < due {
        trace!("{} could only pay {} of {} rent", mover, paid, due);
    }

    Some(RentPayment { owner, due, paid })
}

/// Mark every zero-balance player bankrupt and release their spaces.
///
/// Runs over the whole registry after every rent payment, not just the mover.
/// Players already bankrupt are re-marked as a no-op; only first-time
/// bankruptcies are reported.
fn sweep_bankruptcies(board: &mut Board, players: &mut PlayerRegistry) -> SmallVec<[Bankruptcy; 1]> {
    let mut bankruptcies = SmallVec::new();

    for (id, player) in players.iter_mut() {
        if !player.is_broke() {
            continue;
        }

        let first = player.mark_bankrupt();
        let released = board.release_all(id);

        if first {
            info!(
                "{} is bankrupt, {} space(s) returned to the bank",
                player.name(),
                released.len()
            );
            bankruptcies.push(Bankruptcy { player: id, released });
        }
    }

    bankruptcies
}
