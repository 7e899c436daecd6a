//! # brass-ledger
//!
//! Money tracking for turn-based board games, derived from an append-only
//! log of spend and income actions.
//!
//! ## Design Principles
//!
//! 1. **The log is the truth**: balances and spend totals are folds over
//!    the recorded entries. Undo drops the last entry and nothing else.
//!
//! 2. **One owner**: `EconomyLedger` holds the log, the round counter, the
//!    turn order and the stipend table, and only its commands mutate them.
//!
//! 3. **Configuration over convention**: stake, income floor and turn-order
//!    rule come from `LedgerConfig`. Defaults follow Brass: Lancashire.
//!
//! ## Architecture
//!
//! - **Persistent log**: `im::Vector` keeps ledger clones O(1), so a caller
//!   can snapshot before a risky command or keep a history for display.
//!
//! - **Pull-based observers**: commands queue `LedgerEvent`s; the renderer
//!   drains them with `EconomyLedger::drain_events`.
//!
//! ## Modules
//!
//! - `core`: players, roster, entries, configuration, round state, errors
//! - `ledger`: the state machine, log folds, turn order, commands, events

pub mod core;
pub mod ledger;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Roster, Seating,
    ActionKind, ActionEntry,
    LedgerConfig, IncomeConfig, TurnOrderPolicy, SpendWindow,
    RoundState, SeatRng,
    LedgerError, Result,
};

pub use crate::ledger::{
    EconomyLedger, TurnOutcome,
    LedgerCommand, LedgerEvent, PlayerSummary,
};
