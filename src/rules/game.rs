//! A running game session.
//!
//! `Game` is the single owner of one `GameState`. A presentation layer holds
//! a `Game`, reads `state()` to render, and calls `play` (human seat) or
//! `play_computer` (computer seat). Both go through `Tsoro::apply_move`, so
//! a rejected move leaves the session untouched and a finished game accepts
//! nothing further.

use log::debug;

use super::engine::{MoveResult, Tsoro};
use crate::core::{GameState, GameStatus, TsoroConfig};
use crate::error::{ConfigError, IllegalMoveError, TurnError};
use crate::policy::{ComputerPlayer, MoveChoice};

#[derive(Clone, Debug)]
pub struct Game {
    engine: Tsoro,
    state: GameState,
}

impl Game {
    /// Validate `config` and set up the starting position.
    pub fn new(config: TsoroConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Tsoro::new(config)?))
    }

    #[must_use]
    pub fn with_engine(engine: Tsoro) -> Self {
        let state = engine.new_game();
        Self { engine, state }
    }

    /// Continue from an existing state, e.g. one built with `Tsoro::state_from_board`.
    #[must_use]
    pub fn resume(engine: Tsoro, state: GameState) -> Self {
        Self { engine, state }
    }

    #[must_use]
    pub fn engine(&self) -> &Tsoro {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &TsoroConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn is_legal_move(&self, hole: usize) -> bool {
        self.engine.is_legal_move(&self.state, hole)
    }

    /// Play `hole` for the seat on move.
    pub fn play(&mut self, hole: usize) -> Result<MoveResult, IllegalMoveError> {
        let result = self.engine.apply_move(&self.state, hole)?;
        self.state = result.state.clone();
        Ok(result)
    }

    /// Let `player` choose for the seat on move, then play its choice.
    ///
    /// A delegated player only consults its service when awaited on a tokio
    /// runtime with time enabled.
    pub async fn play_computer(
        &mut self,
        player: &mut ComputerPlayer,
    ) -> Result<(MoveChoice, MoveResult), TurnError> {
        let choice = player.select_move(&self.engine, &self.state).await?;
        debug!(
            "{} ({:?}) picks hole {} via {:?}",
            self.state.current_seat(),
            player.skill(),
            choice.hole,
            choice.source
        );
        let result = self.play(choice.hole)?;
        Ok((choice, result))
    }

    /// Back to the starting position under the same configuration.
    pub fn reset(&mut self) {
        self.state = self.engine.new_game();
    }
}
