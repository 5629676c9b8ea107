//! The Tsoro rules engine.
//!
//! `Tsoro` holds a validated configuration and answers every rules question:
//! - Which holes the seat on move may sow from
//! - What a move does to the board (sowing with relay)
//! - Whether a bank has reached the winning count
//!
//! All methods are pure. `apply_move` returns a new state and never touches
//! the one it was given, so a rejected move cannot leave a half-sown board.

use log::{debug, info};
use smallvec::SmallVec;

use crate::core::{Board, GameState, GameStatus, Seat, SowEvent, TsoroConfig, TurnEnd};
use crate::error::{ConfigError, IllegalMoveError, IllegalMoveReason, StateError};

/// Starting board for a configuration: sowing holes filled, banks empty.
#[must_use]
pub fn initialize_board(config: &TsoroConfig) -> Board {
    Board::initial(config)
}

/// Outcome of one complete turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Position after the turn.
    pub state: GameState,
    /// Every pick-up and drop, in order.
    pub events: Vec<SowEvent>,
    /// Seat that moved.
    pub seat: Seat,
    /// Hole the seat chose.
    pub hole: usize,
    /// Number of relays the turn went through.
    pub relays: u32,
    /// Set when this turn won the game.
    pub winner: Option<Seat>,
}

/// Rules for one game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tsoro {
    config: TsoroConfig,
}

impl Tsoro {
    /// Create an engine after validating the configuration.
    pub fn new(config: TsoroConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &TsoroConfig {
        &self.config
    }

    #[must_use]
    pub fn initialize_board(&self) -> Board {
        initialize_board(&self.config)
    }

    /// Starting position with `first_seat` on move.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(self.initialize_board(), self.config.first_seat)
    }

    /// Adopt an arbitrary position, e.g. to resume or to set up a scenario.
    ///
    /// The board must have the right length and every territory must hold
    /// exactly the pebbles its seat started with. A board where a bank
    /// already holds the winning count yields a finished game.
    pub fn state_from_board(&self, board: Board, seat: Seat) -> Result<GameState, StateError> {
        if board.len() != self.config.board_len() {
            return Err(StateError::BoardLength {
                expected: self.config.board_len(),
                actual: board.len(),
            });
        }
        let expected = self.config.win_threshold();
        for owner in Seat::ALL {
            let actual = board.territory_total(self.config.territory(owner));
            if actual != expected {
                return Err(StateError::PebbleCount {
                    seat: owner,
                    expected,
                    actual,
                });
            }
        }

        let mut state = GameState::new(board, seat);
        if let Some(winner) = self.winner_on(&state.board, seat) {
            state.status = GameStatus::Over(winner);
            state.current_seat = winner;
        }
        Ok(state)
    }

    /// Explain why `hole` cannot be played, or `Ok(())` if it can.
    pub fn check_legal_move(&self, state: &GameState, hole: usize) -> Result<(), IllegalMoveError> {
        let reject = |reason| Err(IllegalMoveError { hole, reason });

        if state.is_over() {
            return reject(IllegalMoveReason::GameOver);
        }
        if hole >= state.board.len() {
            return reject(IllegalMoveReason::OutOfRange);
        }
        if self.config.is_bank(hole) {
            return reject(IllegalMoveReason::Bank);
        }
        if !self.config.territory(state.current_seat).contains(hole) {
            return reject(IllegalMoveReason::NotYourHole);
        }
        if state.board[hole] == 0 {
            return reject(IllegalMoveReason::EmptyHole);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_legal_move(&self, state: &GameState, hole: usize) -> bool {
        self.check_legal_move(state, hole).is_ok()
    }

    /// Legal holes of the seat on move, ascending. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> SmallVec<[usize; 8]> {
        if state.is_over() {
            return SmallVec::new();
        }
        self.config
            .territory(state.current_seat)
            .range()
            .filter(|&hole| self.is_legal_move(state, hole))
            .collect()
    }

    /// Play one full turn from `hole`.
    ///
    /// Pebbles are sown one per hole around the mover's own territory, bank
    /// included. When the last pebble lands in a non-bank hole that already
    /// held pebbles, that hole is emptied and sowing continues from it
    /// (a relay). The turn ends when the last pebble lands in the mover's
    /// bank or in a hole that was empty.
    pub fn apply_move(
        &self,
        state: &GameState,
        hole: usize,
    ) -> Result<MoveResult, IllegalMoveError> {
        self.check_legal_move(state, hole)?;

        let seat = state.current_seat;
        let territory = self.config.territory(seat);
        let bank = self.config.bank(seat);
        let direction = self.config.direction;

        let mut board = state.board.clone();
        let mut events = Vec::new();
        let mut relays = 0;

        let mut current = hole;
        let mut pebbles = std::mem::take(&mut board[hole]);
        events.push(SowEvent::PickUp {
            hole,
            pebbles,
            relay: false,
        });

        // Terminates: every lap of the territory drops a pebble in the bank,
        // and the bank cannot exceed the seat's pebble total.
        let end = loop {
            current = territory.next(current, direction);
            board[current] += 1;
            pebbles -= 1;
            events.push(SowEvent::Drop {
                hole: current,
                count: board[current],
            });

            if pebbles > 0 {
                continue;
            }
            if current == bank {
                break TurnEnd::Bank;
            }
            if board[current] == 1 {
                break TurnEnd::EmptyHole;
            }

            pebbles = std::mem::take(&mut board[current]);
            relays += 1;
            debug!("{seat} relays {pebbles} pebbles from hole {current}");
            events.push(SowEvent::PickUp {
                hole: current,
                pebbles,
                relay: true,
            });
        };
        events.push(SowEvent::TurnEnded {
            hole: current,
            reason: end,
        });

        let mut next = GameState {
            board,
            current_seat: seat,
            status: GameStatus::InProgress,
            turn_number: state.turn_number + 1,
        };

        let winner = self.winner_on(&next.board, seat);
        match winner {
            Some(winner) => {
                info!(
                    "{winner} wins on turn {} with {} pebbles banked",
                    next.turn_number,
                    next.board[self.config.bank(winner)]
                );
                next.status = GameStatus::Over(winner);
                next.current_seat = winner;
            }
            None => next.current_seat = seat.other(),
        }
        debug!(
            "{seat} sowed hole {hole}: {relays} relays, {} drops, ended {end:?} at {current}",
            events.iter().filter(|e| matches!(e, SowEvent::Drop { .. })).count()
        );

        Ok(MoveResult {
            state: next,
            events,
            seat,
            hole,
            relays,
            winner,
        })
    }

    /// The winner of `state`, if any.
    #[must_use]
    pub fn check_win(&self, state: &GameState) -> Option<Seat> {
        state
            .winner()
            .or_else(|| self.winner_on(&state.board, state.current_seat))
    }

    /// A seat wins when its bank holds every pebble it started with. The
    /// mover's bank is checked first; only the mover's territory changes
    /// during a turn, so the other bank cannot newly reach the threshold.
    fn winner_on(&self, board: &Board, mover: Seat) -> Option<Seat> {
        let threshold = self.config.win_threshold();
        [mover, mover.other()]
            .into_iter()
            .find(|&seat| board[self.config.bank(seat)] == threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn engine(config: TsoroConfig) -> Tsoro {
        Tsoro::new(config).unwrap()
    }

    fn seat_a_first() -> Tsoro {
        engine(TsoroConfig::builder().first_seat(Seat::A).build().unwrap())
    }

    #[test]
    fn test_new_game() {
        let tsoro = engine(TsoroConfig::default());
        let state = tsoro.new_game();
        assert_eq!(state.current_seat(), Seat::B);
        assert_eq!(state.board().total(), 42);
        assert!(!state.is_over());
    }

    #[test]
    fn test_legality_reasons() {
        let tsoro = seat_a_first();
        let mut state = tsoro.new_game();

        let reason =
            |state: &GameState, hole| tsoro.check_legal_move(state, hole).unwrap_err().reason;

        assert_eq!(reason(&state, 7), IllegalMoveReason::Bank);
        assert_eq!(reason(&state, 15), IllegalMoveReason::Bank);
        assert_eq!(reason(&state, 8), IllegalMoveReason::NotYourHole);
        assert_eq!(reason(&state, 16), IllegalMoveReason::OutOfRange);
        assert!(tsoro.is_legal_move(&state, 0));

        state.board[0] = 0;
        assert_eq!(reason(&state, 0), IllegalMoveReason::EmptyHole);

        state.status = GameStatus::Over(Seat::B);
        assert_eq!(reason(&state, 1), IllegalMoveReason::GameOver);
    }

    #[test]
    fn test_legal_moves_skip_bank_and_empty() {
        let tsoro = seat_a_first();
        let mut state = tsoro.new_game();
        state.board[3] = 0;
        let moves = tsoro.legal_moves(&state);
        assert_eq!(moves.as_slice(), &[0, 1, 2, 4, 5, 6]);
    }

    fn one_pebble_engine() -> Tsoro {
        engine(
            TsoroConfig::builder()
                .starting_pebbles(1)
                .first_seat(Seat::A)
                .build()
                .unwrap(),
        )
    }

    fn seat_a_board(tsoro: &Tsoro, a: [u32; 8]) -> GameState {
        let mut counts = vec![1u32; 16];
        counts[..8].copy_from_slice(&a);
        counts[15] = 0;
        tsoro.state_from_board(Board::from_counts(&counts), Seat::A).unwrap()
    }

    #[test]
    fn test_single_pebble_into_empty_hole_ends_turn() {
        let tsoro = one_pebble_engine();
        let state = seat_a_board(&tsoro, [1, 1, 1, 1, 1, 1, 0, 1]);

        let result = tsoro.apply_move(&state, 5).unwrap();
        assert_eq!(result.relays, 0);
        assert_eq!(&result.state.board().as_slice()[..8], &[1, 1, 1, 1, 1, 0, 1, 1]);
        assert_eq!(
            result.events,
            vec![
                SowEvent::PickUp { hole: 5, pebbles: 1, relay: false },
                SowEvent::Drop { hole: 6, count: 1 },
                SowEvent::TurnEnded { hole: 6, reason: TurnEnd::EmptyHole },
            ]
        );
        assert_eq!(result.state.current_seat(), Seat::B);
    }

    #[test]
    fn test_last_pebble_in_bank_ends_turn() {
        let tsoro = one_pebble_engine();
        let state = seat_a_board(&tsoro, [1, 1, 1, 1, 1, 2, 0, 0]);

        let result = tsoro.apply_move(&state, 5).unwrap();
        assert_eq!(result.relays, 0);
        assert_eq!(result.state.board()[7], 1);
        assert_eq!(
            result.events.last(),
            Some(&SowEvent::TurnEnded { hole: 7, reason: TurnEnd::Bank })
        );
    }

    #[test]
    fn test_relay_chain_until_empty_hole() {
        let tsoro = one_pebble_engine();
        let state = seat_a_board(&tsoro, [1, 1, 1, 1, 1, 2, 0, 0]);

        // 4 -> 5 relays 3: 6, 7, 0 -> 0 relays 2: 1, 2 -> 2 relays 2: 3, 4 (emptied at start).
        let result = tsoro.apply_move(&state, 4).unwrap();
        assert_eq!(result.relays, 3);
        assert_eq!(&result.state.board().as_slice()[..8], &[0, 2, 0, 2, 1, 0, 1, 1]);
        let relay_holes: Vec<usize> = result
            .events
            .iter()
            .filter(|e| e.is_relay())
            .map(SowEvent::hole)
            .collect();
        assert_eq!(relay_holes, vec![5, 0, 2]);
        assert_eq!(
            result.events.last(),
            Some(&SowEvent::TurnEnded { hole: 4, reason: TurnEnd::EmptyHole })
        );
    }

    #[test]
    fn test_backward_sowing_wraps() {
        let tsoro = engine(
            TsoroConfig::builder()
                .direction(Direction::Backward)
                .bank(Seat::A, 0)
                .first_seat(Seat::A)
                .build()
                .unwrap(),
        );
        let state = tsoro.new_game();

        // Hole 1 backward: 0 (bank), 7, 6 -> 6 had 3, relay.
        let result = tsoro.apply_move(&state, 1).unwrap();
        let drops: Vec<usize> = result
            .events
            .iter()
            .filter(|e| matches!(e, SowEvent::Drop { .. }))
            .map(SowEvent::hole)
            .take(3)
            .collect();
        assert_eq!(drops, vec![0, 7, 6]);
        assert!(result.relays >= 1);
    }

    #[test]
    fn test_apply_move_rejects_without_mutation() {
        let tsoro = seat_a_first();
        let state = tsoro.new_game();
        let before = state.clone();

        let err = tsoro.apply_move(&state, 9).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::NotYourHole);
        assert_eq!(state, before);
    }

    #[test]
    fn test_state_from_board_rejects_wrong_length() {
        let tsoro = engine(TsoroConfig::default());
        let err = tsoro
            .state_from_board(Board::from_counts(&[3; 10]), Seat::A)
            .unwrap_err();
        assert_eq!(err, StateError::BoardLength { expected: 16, actual: 10 });
    }

    #[test]
    fn test_state_from_board_rejects_moved_pebbles() {
        let tsoro = engine(TsoroConfig::default());
        let mut counts = [3u32; 16];
        counts[7] = 0;
        counts[15] = 0;
        counts[0] = 4;
        counts[8] = 2;
        let err = tsoro
            .state_from_board(Board::from_counts(&counts), Seat::A)
            .unwrap_err();
        assert_eq!(
            err,
            StateError::PebbleCount {
                seat: Seat::A,
                expected: 21,
                actual: 22,
            }
        );
    }

    #[test]
    fn test_state_from_won_board_is_over() {
        let tsoro = engine(TsoroConfig::builder().starting_pebbles(1).build().unwrap());
        let mut counts = [0u32; 16];
        counts[7] = 7;
        counts[8..15].fill(1);
        let state = tsoro
            .state_from_board(Board::from_counts(&counts), Seat::B)
            .unwrap();
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Seat::A));
        assert_eq!(tsoro.check_win(&state), Some(Seat::A));
        assert!(tsoro.legal_moves(&state).is_empty());
    }
}
