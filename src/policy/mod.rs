//! Move selection for computer-controlled seats.
//!
//! A `ComputerPlayer` picks a hole at one of three skill levels:
//! - `Random`: uniform over legal holes
//! - `Heuristic`: best single-ply score (see `HeuristicPolicy`)
//! - `Delegated`: ask the suggestion service, fall back locally on any failure
//!
//! Every choice reports which tier produced it through `MoveSource`. The
//! delegated tier never fails the turn: timeouts, transport errors and
//! illegal suggestions all resolve to the configured fallback.

pub mod delegated;
pub mod strategy;

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState};
use crate::error::{NoLegalMoveError, SuggestionError};
use crate::rules::Tsoro;
use crate::suggest::{MoveSuggester, SuggestionRequest};

pub use strategy::{HeuristicPolicy, MovePolicy, RandomPolicy, BANK_REACH_BONUS};

/// How strong a computer seat plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[serde(alias = "easy")]
    Random,
    #[default]
    #[serde(alias = "medium")]
    Heuristic,
    #[serde(alias = "hard")]
    Delegated,
}

/// Strength asked of the suggestion service. Sent as `skillLevel`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Medium,
    #[default]
    Hard,
}

/// Local strategy used when the suggestion service cannot be used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    #[default]
    Heuristic,
    Random,
}

/// Settings for the delegated skill level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegationConfig {
    /// Longest wait for the service.
    pub timeout: Duration,
    /// What to play when the service fails.
    pub fallback: Fallback,
    /// Strength forwarded to the service.
    pub level: ServiceLevel,
}

impl Default for DelegationConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            fallback: Fallback::Heuristic,
            level: ServiceLevel::Hard,
        }
    }
}

impl DelegationConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: ServiceLevel) -> Self {
        self.level = level;
        self
    }
}

/// Which tier produced a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Random,
    Heuristic,
    Suggested,
    HeuristicFallback(SuggestionError),
    RandomFallback(SuggestionError),
}

impl MoveSource {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            MoveSource::HeuristicFallback(_) | MoveSource::RandomFallback(_)
        )
    }
}

/// A selected hole and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveChoice {
    pub hole: usize,
    pub source: MoveSource,
}

/// A computer-controlled seat.
pub struct ComputerPlayer {
    skill: SkillLevel,
    rng: GameRng,
    suggester: Option<Arc<dyn MoveSuggester>>,
    delegation: DelegationConfig,
}

impl std::fmt::Debug for ComputerPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerPlayer")
            .field("skill", &self.skill)
            .field("rng", &self.rng)
            .field("suggester", &self.suggester.is_some())
            .field("delegation", &self.delegation)
            .finish()
    }
}

impl ComputerPlayer {
    /// A player whose random choices are reproducible from `seed`.
    #[must_use]
    pub fn new(skill: SkillLevel, seed: u64) -> Self {
        Self {
            skill,
            rng: GameRng::new(seed),
            suggester: None,
            delegation: DelegationConfig::default(),
        }
    }

    /// A player seeded from the operating system. `seed()` recovers the
    /// seed for replaying its game.
    #[must_use]
    pub fn from_entropy(skill: SkillLevel) -> Self {
        Self::new(skill, GameRng::from_entropy().seed())
    }

    #[must_use]
    pub fn with_suggester(mut self, suggester: Arc<dyn MoveSuggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    #[must_use]
    pub fn with_delegation(mut self, delegation: DelegationConfig) -> Self {
        self.delegation = delegation;
        self
    }

    #[must_use]
    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Pick a hole for the seat on move.
    ///
    /// Fails only when that seat has no legal hole at all. The delegated
    /// skill bounds the service call with a tokio timer; outside a tokio
    /// runtime with time enabled it falls back with `SuggestionError::NoTimer`.
    pub async fn select_move(
        &mut self,
        engine: &Tsoro,
        state: &GameState,
    ) -> Result<MoveChoice, NoLegalMoveError> {
        match self.skill {
            SkillLevel::Delegated => self.delegate(engine, state).await,
            _ => self.select_local(engine, state),
        }
    }

    /// Pick a hole without awaiting anything. The delegated skill goes
    /// straight to its fallback.
    pub fn select_local(
        &mut self,
        engine: &Tsoro,
        state: &GameState,
    ) -> Result<MoveChoice, NoLegalMoveError> {
        match self.skill {
            SkillLevel::Random => Ok(MoveChoice {
                hole: RandomPolicy.choose_move(engine, state, &mut self.rng)?,
                source: MoveSource::Random,
            }),
            SkillLevel::Heuristic => Ok(MoveChoice {
                hole: HeuristicPolicy.choose_move(engine, state, &mut self.rng)?,
                source: MoveSource::Heuristic,
            }),
            SkillLevel::Delegated => self.fall_back(engine, state, SuggestionError::Unavailable),
        }
    }

    async fn delegate(
        &mut self,
        engine: &Tsoro,
        state: &GameState,
    ) -> Result<MoveChoice, NoLegalMoveError> {
        if engine.legal_moves(state).is_empty() {
            return Err(NoLegalMoveError {
                seat: state.current_seat(),
            });
        }

        let outcome = match &self.suggester {
            Some(suggester) => {
                let request = SuggestionRequest::new(engine.config(), state, self.delegation.level);
                delegated::validated_suggestion(
                    suggester.as_ref(),
                    engine,
                    state,
                    &request,
                    self.delegation.timeout,
                )
                .await
            }
            None => Err(SuggestionError::Unavailable),
        };

        match outcome {
            Ok(hole) => Ok(MoveChoice {
                hole,
                source: MoveSource::Suggested,
            }),
            Err(error) => {
                warn!(
                    "Suggestion for {} unusable ({error}), falling back to {:?}",
                    state.current_seat(),
                    self.delegation.fallback
                );
                self.fall_back(engine, state, error)
            }
        }
    }

    fn fall_back(
        &mut self,
        engine: &Tsoro,
        state: &GameState,
        error: SuggestionError,
    ) -> Result<MoveChoice, NoLegalMoveError> {
        match self.delegation.fallback {
            Fallback::Heuristic => Ok(MoveChoice {
                hole: HeuristicPolicy.choose_move(engine, state, &mut self.rng)?,
                source: MoveSource::HeuristicFallback(error),
            }),
            Fallback::Random => Ok(MoveChoice {
                hole: RandomPolicy.choose_move(engine, state, &mut self.rng)?,
                source: MoveSource::RandomFallback(error),
            }),
        }
    }
}
