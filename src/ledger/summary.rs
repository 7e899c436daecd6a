//! Per-player table rows for display.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One row of the player stats table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    /// Entered name or "Player N".
    pub name: String,
    /// Current money.
    pub balance: i64,
    /// Spent since the last income entry.
    pub spent_this_turn_cycle: i64,
    /// Spent over the whole session.
    pub spent_total: i64,
    /// Per-round stipend currently configured.
    pub income: i64,
    /// Whether it is this player's turn.
    pub is_current_turn: bool,
}
