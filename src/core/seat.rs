//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Tsoro is always played by exactly two seats. Seat A owns the lower half
//! of the board, Seat B the upper half.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Owns holes `0..n` (the "Dark Wood" side).
    A,
    /// Owns holes `n..2n` (the "Light Wood" side).
    B,
}

impl Seat {
    /// Both seats, in index order.
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// The 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }

    /// The seat that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "Seat A"),
            Seat::B => write!(f, "Seat B"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use tsoro::core::{Seat, SeatMap};
///
/// let mut banks = SeatMap::new(7, 15);
/// assert_eq!(banks[Seat::B], 15);
///
/// banks[Seat::A] = 3;
/// assert_eq!(banks[Seat::A], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map from the values for seat A and seat B.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self::new(factory(Seat::A), factory(Seat::B))
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
