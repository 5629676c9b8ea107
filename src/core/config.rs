//! Game configuration.
//!
//! Everything that is fixed before the first move lives here:
//! - `holes_per_seat`: size of each territory (8 on the standard board)
//! - `banks`: which hole of each territory is the non-sowable bank
//! - `direction`: which way pebbles travel
//! - `starting_pebbles`: pebbles placed in every sowing hole
//! - `first_seat`: who opens the game
//!
//! Territory boundaries are data. The engine never hardcodes `0..8`/`8..16`.

use serde::{Deserialize, Serialize};

use super::board::Territory;
use super::seat::{Seat, SeatMap};
use crate::error::ConfigError;

/// Holes per seat on the standard board.
pub const STANDARD_HOLES_PER_SEAT: usize = 8;

/// Largest allowed `holes_per_seat`.
pub const MAX_HOLES_PER_SEAT: usize = 32;

/// Largest allowed `starting_pebbles`.
pub const MAX_STARTING_PEBBLES: u32 = 10;

/// Sowing direction, shared by both seats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Increasing hole index, wrapping from the territory's last hole to its first.
    #[default]
    #[serde(alias = "clockwise")]
    Forward,
    /// Decreasing hole index, wrapping from the territory's first hole to its last.
    #[serde(alias = "counterclockwise")]
    Backward,
}

/// Complete game configuration.
///
/// Build one with [`TsoroConfig::builder`], or deserialize it and call
/// [`TsoroConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsoroConfig {
    /// Holes in each seat's territory, bank included.
    pub holes_per_seat: usize,

    /// Absolute bank index per seat.
    pub banks: SeatMap<usize>,

    /// Sowing direction.
    pub direction: Direction,

    /// Pebbles in every non-bank hole at the start.
    pub starting_pebbles: u32,

    /// The seat that makes the first move.
    pub first_seat: Seat,
}

impl Default for TsoroConfig {
    fn default() -> Self {
        Self {
            holes_per_seat: STANDARD_HOLES_PER_SEAT,
            banks: SeatMap::new(7, 15),
            direction: Direction::Forward,
            starting_pebbles: 3,
            first_seat: Seat::B,
        }
    }
}

impl TsoroConfig {
    /// Start building a configuration from the standard defaults.
    pub fn builder() -> TsoroConfigBuilder {
        TsoroConfigBuilder::default()
    }

    /// Check every constraint on the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.holes_per_seat < 2 {
            return Err(ConfigError::TooFewHoles(self.holes_per_seat));
        }
        if self.holes_per_seat > MAX_HOLES_PER_SEAT {
            return Err(ConfigError::TooManyHoles(self.holes_per_seat));
        }
        for seat in Seat::ALL {
            let territory = self.territory(seat);
            let bank = self.banks[seat];
            if !territory.contains(bank) {
                return Err(ConfigError::BankOutOfTerritory {
                    seat,
                    bank,
                    min: territory.first(),
                    max: territory.first() + territory.len(),
                });
            }
        }
        if !(1..=MAX_STARTING_PEBBLES).contains(&self.starting_pebbles) {
            return Err(ConfigError::StartingPebbles(self.starting_pebbles));
        }
        Ok(())
    }

    /// Number of holes on the whole board.
    #[must_use]
    pub const fn board_len(&self) -> usize {
        2 * self.holes_per_seat
    }

    /// The holes owned by a seat, bank included.
    #[must_use]
    pub fn territory(&self, seat: Seat) -> Territory {
        Territory::new(seat.index() * self.holes_per_seat, self.holes_per_seat)
    }

    /// The bank hole of a seat.
    #[must_use]
    pub fn bank(&self, seat: Seat) -> usize {
        self.banks[seat]
    }

    /// Whether `hole` is either seat's bank.
    #[must_use]
    pub fn is_bank(&self, hole: usize) -> bool {
        self.banks.iter().any(|(_, &bank)| bank == hole)
    }

    /// The seat owning `hole`, or `None` when it is off the board.
    #[must_use]
    pub fn owner_of(&self, hole: usize) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.territory(seat).contains(hole))
    }

    /// Bank count that wins the game: every pebble a seat started with.
    #[must_use]
    pub fn win_threshold(&self) -> u32 {
        u32::try_from(self.holes_per_seat.saturating_sub(1))
            .unwrap_or(u32::MAX)
            .saturating_mul(self.starting_pebbles)
    }

    /// Pebbles on the whole board, constant for the entire game.
    #[must_use]
    pub fn total_pebbles(&self) -> u32 {
        self.win_threshold().saturating_mul(2)
    }
}

/// Builder for [`TsoroConfig`].
///
/// Banks left unset default to the last hole of each territory, so changing
/// `holes_per_seat` alone still yields a valid board.
#[derive(Clone, Debug)]
pub struct TsoroConfigBuilder {
    holes_per_seat: usize,
    banks: SeatMap<Option<usize>>,
    direction: Direction,
    starting_pebbles: u32,
    first_seat: Seat,
}

impl Default for TsoroConfigBuilder {
    fn default() -> Self {
        let defaults = TsoroConfig::default();
        Self {
            holes_per_seat: defaults.holes_per_seat,
            banks: SeatMap::new(None, None),
            direction: defaults.direction,
            starting_pebbles: defaults.starting_pebbles,
            first_seat: defaults.first_seat,
        }
    }
}

impl TsoroConfigBuilder {
    #[must_use]
    pub fn holes_per_seat(mut self, holes: usize) -> Self {
        self.holes_per_seat = holes;
        self
    }

    /// Set the absolute bank index for a seat.
    #[must_use]
    pub fn bank(mut self, seat: Seat, hole: usize) -> Self {
        self.banks[seat] = Some(hole);
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn starting_pebbles(mut self, pebbles: u32) -> Self {
        self.starting_pebbles = pebbles;
        self
    }

    #[must_use]
    pub fn first_seat(mut self, seat: Seat) -> Self {
        self.first_seat = seat;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<TsoroConfig, ConfigError> {
        let n = self.holes_per_seat;
        let config = TsoroConfig {
            holes_per_seat: n,
            banks: SeatMap::from_fn(|seat| {
                self.banks[seat]
                    .unwrap_or((seat.index() + 1).saturating_mul(n.max(1)) - 1)
            }),
            direction: self.direction,
            starting_pebbles: self.starting_pebbles,
            first_seat: self.first_seat,
        };
        config.validate()?;
        Ok(config)
    }
}
