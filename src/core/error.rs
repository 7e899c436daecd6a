//! Ledger error type.
//!
//! Every rejection is recoverable: the command is dropped, nothing is
//! appended, and the caller re-prompts for input.

use thiserror::Error;

use super::player::{PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reasons a ledger command can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Amount is below the minimum the command accepts.
    #[error("amount {amount} is below the minimum of {minimum}")]
    InvalidAmount { amount: i64, minimum: i64 },

    /// Amount is above the largest value a single entry may carry, or would
    /// push the player's balance out of range.
    #[error("amount {amount} is above the maximum of {maximum}")]
    AmountTooLarge { amount: i64, maximum: i64 },

    /// Spend exceeds what the player currently holds.
    #[error("{player} cannot spend {requested}: at most {available} available")]
    InsufficientFunds {
        player: PlayerId,
        requested: i64,
        available: i64,
    },

    /// Player id is outside the session roster.
    #[error("{0} is not part of this session")]
    UnknownPlayer(PlayerId),

    /// Roster seating is not a permutation of its players.
    #[error("roster seating {0:?} does not seat every player exactly once")]
    InvalidSeating(Vec<PlayerId>),

    /// Roster size outside the supported range.
    #[error(
        "roster of {size} players is not supported (expected {} to {})",
        MIN_PLAYERS,
        MAX_PLAYERS
    )]
    InvalidRoster { size: usize },

    /// Inconsistent ledger configuration.
    #[error("invalid ledger configuration: {0}")]
    InvalidConfig(String),
}
