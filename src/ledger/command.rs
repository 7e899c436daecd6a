//! Serializable command input.
//!
//! Commands mirror the ledger's mutating API one-to-one. A caller can record
//! the commands it issued and feed them back through `EconomyLedger::execute`
//! to rebuild a session.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A mutating ledger operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerCommand {
    /// `EconomyLedger::spend`
    Spend { player: PlayerId, amount: i64 },
    /// `EconomyLedger::add_income`
    AddIncome { player: PlayerId, amount: i64 },
    /// `EconomyLedger::set_income_config`
    SetIncome { player: PlayerId, amount: i64 },
    /// `EconomyLedger::end_turn`
    EndTurn,
    /// `EconomyLedger::undo`
    Undo,
}

impl std::fmt::Display for LedgerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerCommand::Spend { player, amount } => write!(f, "{player} spends {amount}"),
            LedgerCommand::AddIncome { player, amount } => write!(f, "{player} takes {amount} income"),
            LedgerCommand::SetIncome { player, amount } => {
                write!(f, "{player} income set to {amount}")
            }
            LedgerCommand::EndTurn => write!(f, "end turn"),
            LedgerCommand::Undo => write!(f, "undo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let cmd = LedgerCommand::Spend { player: PlayerId::new(0), amount: 8 };
        assert_eq!(cmd.to_string(), "Player 1 spends 8");
        assert_eq!(LedgerCommand::EndTurn.to_string(), "end turn");
    }

    #[test]
    fn test_command_serialization() {
        let cmds = vec![
            LedgerCommand::SetIncome { player: PlayerId::new(2), amount: -3 },
            LedgerCommand::EndTurn,
            LedgerCommand::Undo,
        ];
        let json = serde_json::to_string(&cmds).unwrap();
        let deserialized: Vec<LedgerCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(cmds, deserialized);
    }
}
