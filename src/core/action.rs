//! Ledger entries: the immutable records the economy is derived from.
//!
//! An entry is a player, a kind (spend or income), an amount and the round
//! it belongs to. Entries are only ever appended or removed from the tail;
//! balances and spend totals are folds over them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Kind of economic action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Money leaves the player's purse.
    Spend,
    /// Money enters the player's purse (per-round stipend or manual top-up).
    Income,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Spend => write!(f, "spend"),
            ActionKind::Income => write!(f, "income"),
        }
    }
}

/// One recorded spend or income.
///
/// ```
/// use brass_ledger::core::{ActionEntry, PlayerId};
///
/// let entry = ActionEntry::spend(PlayerId::new(0), 10, 1);
/// assert_eq!(entry.signed_amount(), -10);
/// assert_eq!(entry.to_string(), "Player 1 - spend: 10 coins (round 1)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionEntry {
    /// The player the money belongs to.
    pub player: PlayerId,

    /// Spend or income.
    pub kind: ActionKind,

    /// Unsigned for spends; income may be negative down to the configured floor.
    pub amount: i64,

    /// Round the entry is attributed to (starts at 1).
    pub round: u32,
}

impl ActionEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(player: PlayerId, kind: ActionKind, amount: i64, round: u32) -> Self {
        Self {
            player,
            kind,
            amount,
            round,
        }
    }

    /// Create a spend entry.
    #[must_use]
    pub fn spend(player: PlayerId, amount: i64, round: u32) -> Self {
        Self::new(player, ActionKind::Spend, amount, round)
    }

    /// Create an income entry.
    #[must_use]
    pub fn income(player: PlayerId, amount: i64, round: u32) -> Self {
        Self::new(player, ActionKind::Income, amount, round)
    }

    /// Check if this is an income.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == ActionKind::Income
    }

    /// Effect on the owner's balance: negative for spends.
    #[must_use]
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            ActionKind::Spend => -self.amount,
            ActionKind::Income => self.amount,
        }
    }
}

impl std::fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {} coins (round {})",
            self.player, self.kind, self.amount, self.round
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        let spend = ActionEntry::spend(PlayerId::new(1), 7, 2);
        assert_eq!(spend.kind, ActionKind::Spend);
        assert!(!spend.is_income());
        assert_eq!(spend.round, 2);

        let income = ActionEntry::income(PlayerId::new(1), -3, 2);
        assert!(income.is_income());
        assert_eq!(income.kind, ActionKind::Income);
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(ActionEntry::spend(PlayerId::new(0), 5, 1).signed_amount(), -5);
        assert_eq!(ActionEntry::income(PlayerId::new(0), 5, 1).signed_amount(), 5);
        assert_eq!(ActionEntry::income(PlayerId::new(0), -4, 1).signed_amount(), -4);
    }

    #[test]
    fn test_entry_display() {
        let entry = ActionEntry::income(PlayerId::new(3), 10, 4);
        assert_eq!(entry.to_string(), "Player 4 - income: 10 coins (round 4)");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = ActionEntry::spend(PlayerId::new(2), 12, 3);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ActionEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }
}
