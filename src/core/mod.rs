//! Core ledger types: players, roster, entries, configuration, round state.
//!
//! These are plain values. The state machine that ties them together lives
//! in `ledger`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionEntry, ActionKind};
pub use config::{
    IncomeConfig, LedgerConfig, SpendWindow, TurnOrderPolicy, DEFAULT_INCOME_FLOOR,
    DEFAULT_MAX_AMOUNT, DEFAULT_STARTING_STAKE,
};
pub use error::{LedgerError, Result};
pub use player::{PlayerId, PlayerMap, Roster, Seating, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::SeatRng;
pub use state::RoundState;
