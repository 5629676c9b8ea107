//! Local move strategies.
//!
//! Strategies are trait-based so callers can swap them:
//! - `RandomPolicy`: uniform over legal holes
//! - `HeuristicPolicy`: single-ply score favouring big holes that can reach the bank

use smallvec::SmallVec;

use crate::core::{GameRng, GameState};
use crate::error::NoLegalMoveError;
use crate::rules::Tsoro;

/// Bonus added when a hole holds enough pebbles to reach its bank.
pub const BANK_REACH_BONUS: u32 = 10;

/// A way of picking a hole for the seat on move.
pub trait MovePolicy: Send + Sync {
    /// Choose a legal hole, or fail when the seat has none.
    fn choose_move(
        &self,
        engine: &Tsoro,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Result<usize, NoLegalMoveError>;
}

/// Uniformly random legal hole.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(
        &self,
        engine: &Tsoro,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Result<usize, NoLegalMoveError> {
        let moves = engine.legal_moves(state);
        rng.choose(&moves).copied().ok_or(NoLegalMoveError {
            seat: state.current_seat(),
        })
    }
}

/// Highest `pebbles + bonus` wins, where the bonus applies when
/// `pebbles >= distance to own bank` along the sowing direction.
///
/// Relays are not simulated; the score only guesses whether a sowing could
/// plausibly reach the bank. Ties go to the lowest hole.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// `(hole, score)` for every legal hole, ascending by hole.
    #[must_use]
    pub fn scores(engine: &Tsoro, state: &GameState) -> SmallVec<[(usize, u32); 8]> {
        let config = engine.config();
        let seat = state.current_seat();
        let territory = config.territory(seat);
        let bank = config.bank(seat);

        engine
            .legal_moves(state)
            .into_iter()
            .map(|hole| {
                let pebbles = state.board()[hole];
                let distance = territory.distance(hole, bank, config.direction) as u32;
                let bonus = if pebbles >= distance { BANK_REACH_BONUS } else { 0 };
                (hole, pebbles + bonus)
            })
            .collect()
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(
        &self,
        engine: &Tsoro,
        state: &GameState,
        _rng: &mut GameRng,
    ) -> Result<usize, NoLegalMoveError> {
        let mut best: Option<(usize, u32)> = None;
        for (hole, score) in Self::scores(engine, state) {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((hole, score));
            }
        }
        best.map(|(hole, _)| hole).ok_or(NoLegalMoveError {
            seat: state.current_seat(),
        })
    }
}
