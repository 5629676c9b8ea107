//! Core engine types: seats, configuration, board, state, events, RNG.
//!
//! These are plain data. The rules that move pebbles live in `rules`.

pub mod seat;
pub mod config;
pub mod board;
pub mod state;
pub mod event;
pub mod rng;

pub use seat::{Seat, SeatMap};
pub use config::{
    Direction, TsoroConfig, TsoroConfigBuilder, MAX_HOLES_PER_SEAT, MAX_STARTING_PEBBLES,
    STANDARD_HOLES_PER_SEAT,
};
pub use board::{Board, Territory};
pub use state::{GameState, GameStatus};
pub use event::{SowEvent, TurnEnd};
pub use rng::GameRng;
