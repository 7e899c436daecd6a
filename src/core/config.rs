//! Ledger configuration types.
//!
//! Sessions configure the ledger at startup by providing:
//! - `LedgerConfig`: stake, income limits and turn-order rules
//! - `IncomeConfig`: per-player stipend paid at every round rollover
//!
//! The defaults follow Brass: Lancashire: 30 starting money, income track
//! bottoming out at -10, and the player who spent least goes first.

use serde::{Deserialize, Serialize};

use super::error::{LedgerError, Result};
use super::player::{PlayerId, PlayerMap};

/// Starting money for every player.
pub const DEFAULT_STARTING_STAKE: i64 = 30;

/// Lowest per-round income a player can be configured with.
pub const DEFAULT_INCOME_FLOOR: i64 = -10;

/// Largest amount a single spend or income entry may carry.
///
/// Keeps every fold over the log far from `i64` overflow.
pub const DEFAULT_MAX_AMOUNT: i64 = 1_000_000;

/// How the next round's turn order is derived from the closed round's spend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOrderPolicy {
    /// Ascending spend: whoever spent least acts first.
    #[default]
    FrugalFirst,
    /// Descending spend: whoever spent most acts first.
    BigSpenderFirst,
}

/// Which slice of the log counts as "the closed round's spend".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpendWindow {
    /// Spends tagged with the closed round number.
    #[default]
    ClosedRound,
    /// Spends after the most recent income entry of any player.
    SinceLastIncome,
}

/// Complete ledger configuration.
///
/// ```
/// use brass_ledger::core::{LedgerConfig, TurnOrderPolicy};
///
/// let config = LedgerConfig::new()
///     .with_starting_stake(40)
///     .with_turn_order(TurnOrderPolicy::BigSpenderFirst);
/// assert_eq!(config.starting_stake, 40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Balance every player starts with.
    pub starting_stake: i64,

    /// Minimum configured per-round stipend (may be negative).
    pub income_floor: i64,

    /// Minimum amount for an ad-hoc manual income action.
    pub manual_income_minimum: i64,

    /// Stipend every player starts with in `IncomeConfig`.
    pub default_income: i64,

    /// Upper bound for any single amount (stake, spend, income, stipend).
    pub max_amount: i64,

    /// Sort direction for round rollover.
    pub turn_order: TurnOrderPolicy,

    /// Spend window used by round rollover.
    pub spend_window: SpendWindow,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_stake: DEFAULT_STARTING_STAKE,
            income_floor: DEFAULT_INCOME_FLOOR,
            manual_income_minimum: 0,
            default_income: 0,
            max_amount: DEFAULT_MAX_AMOUNT,
            turn_order: TurnOrderPolicy::default(),
            spend_window: SpendWindow::default(),
        }
    }
}

impl LedgerConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting stake.
    #[must_use]
    pub fn with_starting_stake(mut self, stake: i64) -> Self {
        self.starting_stake = stake;
        self
    }

    /// Set the stipend floor.
    #[must_use]
    pub fn with_income_floor(mut self, floor: i64) -> Self {
        self.income_floor = floor;
        self
    }

    /// Set the minimum for manual income actions.
    #[must_use]
    pub fn with_manual_income_minimum(mut self, minimum: i64) -> Self {
        self.manual_income_minimum = minimum;
        self
    }

    /// Set the stipend every player starts with.
    #[must_use]
    pub fn with_default_income(mut self, income: i64) -> Self {
        self.default_income = income;
        self
    }

    /// Set the largest amount a single entry may carry.
    #[must_use]
    pub fn with_max_amount(mut self, maximum: i64) -> Self {
        self.max_amount = maximum;
        self
    }

    /// Set the turn-order policy.
    #[must_use]
    pub fn with_turn_order(mut self, policy: TurnOrderPolicy) -> Self {
        self.turn_order = policy;
        self
    }

    /// Set the spend window.
    #[must_use]
    pub fn with_spend_window(mut self, window: SpendWindow) -> Self {
        self.spend_window = window;
        self
    }

    /// Check that the limits are consistent with each other.
    pub fn validate(&self) -> Result<()> {
        if self.max_amount < 1 {
            return Err(LedgerError::InvalidConfig(format!(
                "maximum amount {} must be positive",
                self.max_amount
            )));
        }
        if !(0..=self.max_amount).contains(&self.starting_stake) {
            return Err(LedgerError::InvalidConfig(format!(
                "starting stake {} is outside 0..={}",
                self.starting_stake, self.max_amount
            )));
        }
        if self.income_floor < -self.max_amount {
            return Err(LedgerError::InvalidConfig(format!(
                "income floor {} is below -{}",
                self.income_floor, self.max_amount
            )));
        }
        if self.default_income > self.max_amount {
            return Err(LedgerError::InvalidConfig(format!(
                "default income {} is above the maximum amount {}",
                self.default_income, self.max_amount
            )));
        }
        if self.default_income < self.income_floor {
            return Err(LedgerError::InvalidConfig(format!(
                "default income {} is below the income floor {}",
                self.default_income, self.income_floor
            )));
        }
        if self.manual_income_minimum < self.income_floor {
            return Err(LedgerError::InvalidConfig(format!(
                "manual income minimum {} is below the income floor {}",
                self.manual_income_minimum, self.income_floor
            )));
        }
        Ok(())
    }
}

/// Per-player stipend paid at each round rollover.
///
/// Every stored value lies between the floor and ceiling the config was
/// created with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeConfig {
    incomes: PlayerMap<i64>,
    floor: i64,
    ceiling: i64,
}

impl IncomeConfig {
    /// Create a config paying `income` to each of `player_count` players.
    ///
    /// The caller guarantees `floor <= income <= ceiling` (see
    /// `LedgerConfig::validate`).
    #[must_use]
    pub fn new(player_count: usize, income: i64, floor: i64, ceiling: i64) -> Self {
        debug_assert!((floor..=ceiling).contains(&income));
        Self {
            incomes: PlayerMap::with_value(player_count, income),
            floor,
            ceiling,
        }
    }

    /// Lowest accepted stipend.
    #[must_use]
    pub fn floor(&self) -> i64 {
        self.floor
    }

    /// Highest accepted stipend.
    #[must_use]
    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }

    /// A player's stipend, or `None` for players outside the roster.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<i64> {
        self.incomes.get(player).copied()
    }

    /// Set a player's stipend. Rejected values leave the config unchanged.
    pub fn set(&mut self, player: PlayerId, amount: i64) -> Result<()> {
        if amount < self.floor {
            return Err(LedgerError::InvalidAmount {
                amount,
                minimum: self.floor,
            });
        }
        if amount > self.ceiling {
            return Err(LedgerError::AmountTooLarge {
                amount,
                maximum: self.ceiling,
            });
        }
        let slot = self
            .incomes
            .get_mut(player)
            .ok_or(LedgerError::UnknownPlayer(player))?;
        *slot = amount;
        Ok(())
    }

    /// Iterate over (PlayerId, stipend) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.incomes.iter().map(|(p, &v)| (p, v))
    }
}
