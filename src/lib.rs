//! # tsoro
//!
//! Rules engine and computer players for Tsoro, the Zimbabwean Mancala
//! played on a 16-hole board.
//!
//! ## Rules in brief
//!
//! Each seat owns 8 contiguous holes, one of which it chose as its bank.
//! A turn picks up every pebble from one of the seat's holes and sows them
//! one by one around the seat's own territory. If the last pebble lands in
//! a hole that already held pebbles, those are picked up and sowing goes on
//! (a relay). The turn ends in the bank or in a hole that was empty. The
//! first bank to hold every pebble its seat started with wins.
//!
//! ## Design
//!
//! - **Pure transitions**: `Tsoro::apply_move` returns a fresh `GameState`
//!   plus an ordered `SowEvent` trace. Animation is the caller's business.
//!
//! - **Configuration as data**: territory size, bank positions, direction and
//!   pebble count all come from `TsoroConfig`.
//!
//! - **Untrusted oracle**: the delegated skill level asks an external
//!   `MoveSuggester`, bounded by a timeout; any answer is re-validated and
//!   every failure falls back to a local strategy.
//!
//! ## Modules
//!
//! - `core`: seats, configuration, board, state, events, RNG
//! - `rules`: the engine and the game session
//! - `policy`: computer players
//! - `suggest`: the suggestion-service boundary
//! - `error`: error types
//!
//! ```
//! use tsoro::{Game, TsoroConfig};
//!
//! let mut game = Game::new(TsoroConfig::default()).unwrap();
//! let result = game.play(8).unwrap();
//! assert_eq!(game.state().board().total(), 42);
//! assert!(!result.events.is_empty());
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod policy;
pub mod suggest;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap,
    Direction, TsoroConfig, TsoroConfigBuilder,
    Board, Territory,
    GameState, GameStatus,
    SowEvent, TurnEnd,
    GameRng,
};

pub use crate::error::{
    ConfigError, IllegalMoveError, IllegalMoveReason, NoLegalMoveError, StateError,
    SuggestionError, TurnError,
};

pub use crate::rules::{initialize_board, Game, MoveResult, Tsoro};

pub use crate::policy::{
    ComputerPlayer, DelegationConfig, Fallback, MoveChoice, MoveSource, ServiceLevel, SkillLevel,
    MovePolicy, RandomPolicy, HeuristicPolicy,
};

pub use crate::suggest::{MoveSuggester, SuggestionRequest, SuggestionResponse};
