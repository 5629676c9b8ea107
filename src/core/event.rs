//! Sowing trace.
//!
//! `apply_move` records every pick-up and drop in order. The trace is
//! informational only: replaying it is how a presentation layer animates a
//! turn, but the resulting state is already complete without it.

use serde::{Deserialize, Serialize};

/// Why sowing stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnEnd {
    /// The last pebble fell into the mover's bank.
    Bank,
    /// The last pebble fell into a hole that was empty.
    EmptyHole,
}

/// One step of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SowEvent {
    /// All pebbles were lifted from `hole`. `relay` is false only for the
    /// hole the seat chose.
    PickUp {
        hole: usize,
        pebbles: u32,
        relay: bool,
    },
    /// One pebble was dropped into `hole`, which now holds `count`.
    Drop { hole: usize, count: u32 },
    /// The turn is over; `hole` received the last pebble.
    TurnEnded { hole: usize, reason: TurnEnd },
}

impl SowEvent {
    /// The hole this event touched.
    #[must_use]
    pub fn hole(&self) -> usize {
        match *self {
            SowEvent::PickUp { hole, .. }
            | SowEvent::Drop { hole, .. }
            | SowEvent::TurnEnded { hole, .. } => hole,
        }
    }

    #[must_use]
    pub fn is_relay(&self) -> bool {
        matches!(self, SowEvent::PickUp { relay: true, .. })
    }
}
