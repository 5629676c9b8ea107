//! Error types for the engine, the policy and the suggestion boundary.

use serde::Serialize;

use crate::core::Seat;

/// Why a hole cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IllegalMoveReason {
    /// The index is outside the board.
    OutOfRange,
    /// Banks are sinks and are never sown from.
    Bank,
    /// The hole belongs to the seat that is not on move.
    NotYourHole,
    /// There is nothing to pick up.
    EmptyHole,
    /// The game already has a winner.
    GameOver,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "No such hole!",
            IllegalMoveReason::Bank => "Cannot select a bank!",
            IllegalMoveReason::NotYourHole => "Not your hole!",
            IllegalMoveReason::EmptyHole => "Cannot select an empty hole!",
            IllegalMoveReason::GameOver => "The game is over.",
        };
        f.write_str(text)
    }
}

/// A move was rejected. The state it was checked against is untouched.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[error("Illegal move on hole {hole}: {reason}")]
pub struct IllegalMoveError {
    pub hole: usize,
    pub reason: IllegalMoveReason,
}

/// The seat on move has no legal hole. Win detection makes this unreachable
/// from any state produced by the engine.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("{seat} has no legal move")]
pub struct NoLegalMoveError {
    pub seat: Seat,
}

/// A computer turn could not be completed.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnError {
    #[error(transparent)]
    NoLegalMove(#[from] NoLegalMoveError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A seat needs at least 2 holes, got {0}.")]
    TooFewHoles(usize),
    #[error(
        "A seat can have at most {max} holes, got {0}.",
        max = crate::core::MAX_HOLES_PER_SEAT
    )]
    TooManyHoles(usize),
    #[error("The bank of {seat} must be in {min}..{max}, got {bank}.")]
    BankOutOfTerritory {
        seat: Seat,
        bank: usize,
        min: usize,
        max: usize,
    },
    #[error("Starting pebbles must be in 1..=10, got {0}.")]
    StartingPebbles(u32),
}

/// A board could not be adopted as a game state for a configuration.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("Expected a board of {expected} holes, got {actual}.")]
    BoardLength { expected: usize, actual: usize },
    #[error("{seat} must hold {expected} pebbles in its territory, found {actual}.")]
    PebbleCount {
        seat: Seat,
        expected: u32,
        actual: u32,
    },
}

/// Failures of the move-suggestion service. These never reach the caller of
/// `select_move`; they are recorded on the fallback `MoveSource` instead.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("No suggestion service is configured.")]
    Unavailable,
    #[error("No tokio timer is available to bound the suggestion.")]
    NoTimer,
    #[error("The suggestion service did not answer within {0} ms.")]
    Timeout(u128),
    #[error("Could not reach the suggestion service: {0}")]
    Transport(String),
    #[error("The suggestion service reported an error: {0}")]
    Service(String),
    #[error("The suggestion service response is malformed: {0}")]
    Malformed(String),
    #[error("The suggested move was rejected: {0}")]
    Illegal(IllegalMoveError),
}

impl From<serde_json::Error> for SuggestionError {
    fn from(error: serde_json::Error) -> Self {
        SuggestionError::Malformed(error.to_string())
    }
}
