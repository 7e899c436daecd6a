//! Notifications for the presentation layer.
//!
//! The ledger queues one or more events per accepted command. The renderer
//! drains them after each command to decide what to redraw or announce.
//! Rejected commands queue nothing.

use serde::{Deserialize, Serialize};

use crate::core::{ActionEntry, PlayerId, Seating};

/// Something that changed in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A spend was appended.
    Spent { player: PlayerId, amount: i64, balance: i64 },

    /// An income entry was appended (manual or stipend).
    IncomeAdded { player: PlayerId, amount: i64, balance: i64 },

    /// A player's per-round stipend changed.
    IncomeConfigChanged { player: PlayerId, amount: i64 },

    /// The turn moved to another player within the same round.
    TurnPassed { from: PlayerId, to: PlayerId },

    /// A round closed: stipends were paid and a new order installed.
    RoundClosed {
        closed_round: u32,
        turn_order: Seating,
    },

    /// The most recent entry was removed.
    Undone(ActionEntry),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = LedgerEvent::RoundClosed {
            closed_round: 3,
            turn_order: Seating::from_slice(&[PlayerId::new(1), PlayerId::new(0)]),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
