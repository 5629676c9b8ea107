//! Tsoro rules.
//!
//! - `engine`: legality, sowing with relay, win detection (`Tsoro`)
//! - `game`: a session that owns one state and mutates it only through the engine

pub mod engine;
pub mod game;

pub use engine::{initialize_board, MoveResult, Tsoro};
pub use game::Game;
