//! Board storage and territory geometry.
//!
//! The board is a flat row of hole counts. Each seat owns a contiguous
//! `Territory` of `holes_per_seat` holes, one of which is its bank. Sowing
//! walks around a territory as if it were a ring, so all stepping and
//! distance arithmetic lives on `Territory`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut, Range};

use super::config::{Direction, TsoroConfig};

/// Hole counts, indexed by absolute hole number.
///
/// Stored inline for the standard 16-hole board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    holes: SmallVec<[u32; 16]>,
}

impl Board {
    /// Starting position: every sowing hole holds `starting_pebbles`, banks are empty.
    #[must_use]
    pub fn initial(config: &TsoroConfig) -> Self {
        let holes = (0..config.board_len())
            .map(|hole| {
                if config.is_bank(hole) {
                    0
                } else {
                    config.starting_pebbles
                }
            })
            .collect();
        Self { holes }
    }

    /// Wrap raw counts. No configuration checks happen here; see
    /// `Tsoro::state_from_board` for a validated entry point.
    #[must_use]
    pub fn from_counts(counts: &[u32]) -> Self {
        Self {
            holes: SmallVec::from_slice(counts),
        }
    }

    /// Number of holes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Count in `hole`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, hole: usize) -> Option<u32> {
        self.holes.get(hole).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.holes
    }

    /// Pebbles on the whole board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.holes.iter().sum()
    }

    /// Pebbles inside one territory, bank included.
    #[must_use]
    pub fn territory_total(&self, territory: Territory) -> u32 {
        self.holes[territory.range()].iter().sum()
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, hole: usize) -> &Self::Output {
        &self.holes[hole]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, hole: usize) -> &mut Self::Output {
        &mut self.holes[hole]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let half = self.holes.len() / 2;
        for (i, row) in [&self.holes[..half], &self.holes[half..]].iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|c| format!("{c:>2}")).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// A contiguous block of holes owned by one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Territory {
    first: usize,
    len: usize,
}

impl Territory {
    #[must_use]
    pub const fn new(first: usize, len: usize) -> Self {
        Self { first, len }
    }

    #[must_use]
    pub const fn first(&self) -> usize {
        self.first
    }

    #[must_use]
    pub const fn last(&self) -> usize {
        self.first + self.len - 1
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.first..self.first + self.len
    }

    #[must_use]
    pub const fn contains(&self, hole: usize) -> bool {
        hole >= self.first && hole < self.first + self.len
    }

    /// The hole after `hole` in `direction`, wrapping within the territory.
    ///
    /// ```
    /// use tsoro::core::{Direction, Territory};
    ///
    /// let b = Territory::new(8, 8);
    /// assert_eq!(b.next(15, Direction::Forward), 8);
    /// assert_eq!(b.next(8, Direction::Backward), 15);
    /// ```
    #[must_use]
    pub fn next(&self, hole: usize, direction: Direction) -> usize {
        debug_assert!(self.contains(hole), "hole {hole} outside {self:?}");
        let offset = hole - self.first;
        let step = match direction {
            Direction::Forward => 1,
            Direction::Backward => self.len - 1,
        };
        self.first + (offset + step) % self.len
    }

    /// Steps needed to travel from `from` to `to` in `direction`, in `0..len`.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize, direction: Direction) -> usize {
        debug_assert!(self.contains(from) && self.contains(to));
        let (from, to) = (from - self.first, to - self.first);
        match direction {
            Direction::Forward => (to + self.len - from) % self.len,
            Direction::Backward => (from + self.len - to) % self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;

    #[test]
    fn test_initial_board() {
        let config = TsoroConfig::default();
        let board = Board::initial(&config);

        assert_eq!(board.len(), 16);
        assert_eq!(board[7], 0);
        assert_eq!(board[15], 0);
        assert!((0..7).all(|h| board[h] == 3));
        assert!((8..15).all(|h| board[h] == 3));
        assert_eq!(board.total(), config.total_pebbles());
    }

    #[test]
    fn test_initial_board_custom_banks() {
        let config = TsoroConfig::builder()
            .bank(Seat::A, 2)
            .bank(Seat::B, 9)
            .starting_pebbles(1)
            .build()
            .unwrap();
        let board = Board::initial(&config);

        assert_eq!(board[2], 0);
        assert_eq!(board[9], 0);
        assert_eq!(board[7], 1);
        assert_eq!(board[15], 1);
        assert_eq!(board.territory_total(config.territory(Seat::A)), 7);
    }

    #[test]
    fn test_next_forward_wraps() {
        let a = Territory::new(0, 8);
        assert_eq!(a.next(0, Direction::Forward), 1);
        assert_eq!(a.next(6, Direction::Forward), 7);
        assert_eq!(a.next(7, Direction::Forward), 0);
    }

    #[test]
    fn test_next_backward_wraps() {
        let b = Territory::new(8, 8);
        assert_eq!(b.next(9, Direction::Backward), 8);
        assert_eq!(b.next(8, Direction::Backward), 15);
        assert_eq!(b.next(15, Direction::Backward), 14);
    }

    #[test]
    fn test_distance() {
        let a = Territory::new(0, 8);
        assert_eq!(a.distance(6, 7, Direction::Forward), 1);
        assert_eq!(a.distance(0, 7, Direction::Forward), 7);
        assert_eq!(a.distance(3, 1, Direction::Forward), 6);
        assert_eq!(a.distance(3, 1, Direction::Backward), 2);
        assert_eq!(a.distance(0, 7, Direction::Backward), 1);
        assert_eq!(a.distance(4, 4, Direction::Forward), 0);
    }

    #[test]
    fn test_territory_bounds() {
        let b = Territory::new(8, 8);
        assert_eq!(b.first(), 8);
        assert_eq!(b.last(), 15);
        assert!(b.contains(8) && b.contains(15));
        assert!(!b.contains(7) && !b.contains(16));
        assert_eq!(b.range(), 8..16);
    }

    #[test]
    fn test_board_display() {
        let board = Board::from_counts(&[1, 2, 3, 4]);
        assert_eq!(board.to_string(), " 1  2\n 3  4");
    }

    #[test]
    fn test_board_serde_is_flat() {
        let board = Board::from_counts(&[3, 0, 3]);
        assert_eq!(serde_json::to_string(&board).unwrap(), "[3,0,3]");
    }
}
