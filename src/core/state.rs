//! Game state.
//!
//! `GameState` is the whole position: board, seat on move and outcome. It is
//! read-only outside the crate; the only way to change it is the engine's
//! move-application procedure, which produces a fresh state.
//!
//! Lifecycle:
//!
//! ```text
//! InProgress(A) <-> InProgress(B) -> Over(winner)
//! ```
//!
//! `Over` is absorbing.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::seat::Seat;

/// Whether the game continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "winner", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Over(Seat),
}

/// Only serialized, never deserialized: a state must come from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_seat: Seat,
    pub(crate) status: GameStatus,
    /// Completed turns since the start.
    pub(crate) turn_number: u32,
}

impl GameState {
    pub(crate) fn new(board: Board, current_seat: Seat) -> Self {
        Self {
            board,
            current_seat,
            status: GameStatus::InProgress,
            turn_number: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat on move. Once the game is over this is the seat that won.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::Over(seat) => Some(seat),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_progress() {
        let state = GameState::new(Board::from_counts(&[1, 0, 1, 0]), Seat::B);
        assert_eq!(state.current_seat(), Seat::B);
        assert!(!state.is_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.turn_number(), 0);
    }

    #[test]
    fn test_over_state_reports_winner() {
        let mut state = GameState::new(Board::from_counts(&[0, 1, 0, 1]), Seat::A);
        state.status = GameStatus::Over(Seat::A);
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Seat::A));
    }

    #[test]
    fn test_status_json() {
        let json = serde_json::to_string(&GameStatus::Over(Seat::B)).unwrap();
        assert_eq!(json, r#"{"status":"over","winner":"B"}"#);
        let json = serde_json::to_string(&GameStatus::InProgress).unwrap();
        assert_eq!(json, r#"{"status":"inProgress"}"#);
    }
}
