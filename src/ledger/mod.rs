//! The economy state machine and its supporting pieces.
//!
//! - `command` / `event`: serializable input and observer output
//! - `economy`: `EconomyLedger`, the single owner of log and round state
//! - `fold`: pure balance and spend folds over the log
//! - `summary`: per-player rows for display
//! - `turn_order`: next-round order from closed-round spend

pub mod command;
pub mod economy;
pub mod event;
pub mod fold;
pub mod summary;
pub mod turn_order;

pub use command::LedgerCommand;
pub use economy::{EconomyLedger, TurnOutcome};
pub use event::LedgerEvent;
pub use summary::PlayerSummary;
pub use turn_order::next_turn_order;
