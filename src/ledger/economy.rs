//! The economy state machine.
//!
//! `EconomyLedger` owns the action log, the round cursor and the stipend
//! table. Commands validate against the log as it stands, then append;
//! queries fold the log. A rejected command changes nothing.

use im::Vector;
use log::{debug, info};

use super::command::LedgerCommand;
use super::event::LedgerEvent;
use super::fold;
use super::summary::PlayerSummary;
use super::turn_order::next_turn_order;
use crate::core::{
    ActionEntry, IncomeConfig, LedgerConfig, LedgerError, PlayerId, PlayerMap, Result,
    RoundState, Roster, SpendWindow,
};

/// What `end_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The next player in the current round is up.
    NextPlayer(PlayerId),
    /// The round closed; `next_player` opens the new one.
    RoundClosed {
        closed_round: u32,
        next_player: PlayerId,
    },
}

/// Log-driven economy for one game session.
///
/// ```
/// use brass_ledger::{EconomyLedger, LedgerConfig, PlayerId, Roster};
///
/// let mut ledger = EconomyLedger::new(Roster::new(3).unwrap(), LedgerConfig::default()).unwrap();
/// let p1 = PlayerId::new(0);
///
/// ledger.spend(p1, 10).unwrap();
/// assert_eq!(ledger.balance_of(p1), 20);
///
/// ledger.undo();
/// assert_eq!(ledger.balance_of(p1), 30);
/// ```
#[derive(Clone, Debug)]
pub struct EconomyLedger {
    roster: Roster,
    config: LedgerConfig,
    incomes: IncomeConfig,
    round: RoundState,
    log: Vector<ActionEntry>,
    events: Vec<LedgerEvent>,
}

impl EconomyLedger {
    /// Start a session. Everyone holds the starting stake; round 1 follows
    /// the roster's seating.
    pub fn new(roster: Roster, config: LedgerConfig) -> Result<Self> {
        config.validate()?;

        let incomes = IncomeConfig::new(
            roster.len(),
            config.default_income,
            config.income_floor,
            config.max_amount,
        );
        let round = RoundState::new(roster.seating());
        debug!(
            "Ledger opened for {} players, stake {}, order {:?}",
            roster.len(),
            config.starting_stake,
            round.turn_order()
        );

        Ok(Self {
            roster,
            config,
            incomes,
            round,
            log: Vector::new(),
            events: Vec::new(),
        })
    }

    // === Commands ===

    /// Record a spend by `player`.
    ///
    /// The amount must be positive, at most `max_amount`, and covered by the
    /// player's current balance. Several spends per turn are allowed; turn
    /// state is not touched.
    pub fn spend(&mut self, player: PlayerId, amount: i64) -> Result<()> {
        self.check_player(player)?;
        if amount < 1 {
            return rejected(LedgerError::InvalidAmount { amount, minimum: 1 });
        }
        self.check_max(amount)?;

        let balance = self.balance_of(player);
        if amount > balance {
            return rejected(LedgerError::InsufficientFunds {
                player,
                requested: amount,
                available: balance.max(0),
            });
        }

        let round = self.round.current_round();
        self.append(ActionEntry::spend(player, amount, round));
        debug!("{} spent {} in round {}", player, amount, round);
        self.events.push(LedgerEvent::Spent {
            player,
            amount,
            balance: balance - amount,
        });
        Ok(())
    }

    /// Record an ad-hoc income action taken mid-round.
    ///
    /// Rejected when the resulting balance would not fit in an `i64`.
    pub fn add_income(&mut self, player: PlayerId, amount: i64) -> Result<()> {
        self.check_player(player)?;
        let minimum = self.config.manual_income_minimum;
        if amount < minimum {
            return rejected(LedgerError::InvalidAmount { amount, minimum });
        }
        self.check_max(amount)?;

        let current = self.balance_of(player);
        let Some(balance) = current.checked_add(amount) else {
            return rejected(LedgerError::AmountTooLarge {
                amount,
                maximum: i64::MAX - current,
            });
        };

        let round = self.round.current_round();
        self.credit(player, amount, balance, round);
        debug!("{} took {} income in round {}", player, amount, round);
        Ok(())
    }

    /// Change the stipend `player` receives at each round rollover.
    pub fn set_income_config(&mut self, player: PlayerId, amount: i64) -> Result<()> {
        self.check_player(player)?;
        if let Err(err) = self.incomes.set(player, amount) {
            return rejected(err);
        }

        debug!("{} income set to {}", player, amount);
        self.events.push(LedgerEvent::IncomeConfigChanged { player, amount });
        Ok(())
    }

    /// Pass the turn. When the last player in the order finishes, the round
    /// closes: stipends are paid, the order is recomputed from the closed
    /// round's spend, and the round counter advances.
    pub fn end_turn(&mut self) -> TurnOutcome {
        let from = self.round.current_turn();
        if !self.round.advance() {
            let to = self.round.current_turn();
            debug!("Turn passed from {} to {}", from, to);
            self.events.push(LedgerEvent::TurnPassed { from, to });
            return TurnOutcome::NextPlayer(to);
        }

        self.close_round()
    }

    /// Remove the most recent entry and return it.
    ///
    /// This only touches the log: a round rollover that already happened is
    /// not reverted. Undo on an empty log does nothing.
    pub fn undo(&mut self) -> Option<ActionEntry> {
        let Some(entry) = self.log.pop_back() else {
            debug!("Nothing to undo");
            return None;
        };

        debug!("Undid {}", entry);
        self.events.push(LedgerEvent::Undone(entry.clone()));
        Some(entry)
    }

    /// Apply a recorded command.
    pub fn execute(&mut self, command: &LedgerCommand) -> Result<()> {
        match *command {
            LedgerCommand::Spend { player, amount } => self.spend(player, amount),
            LedgerCommand::AddIncome { player, amount } => self.add_income(player, amount),
            LedgerCommand::SetIncome { player, amount } => self.set_income_config(player, amount),
            LedgerCommand::EndTurn => {
                self.end_turn();
                Ok(())
            }
            LedgerCommand::Undo => {
                self.undo();
                Ok(())
            }
        }
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    /// Current balance of `player`.
    #[must_use]
    pub fn balance_of(&self, player: PlayerId) -> i64 {
        fold::balance(&self.log, player, self.config.starting_stake)
    }

    /// Balance of `player` after the first `up_to` entries.
    ///
    /// `up_to` past the end of the log is the same as the current balance.
    #[must_use]
    pub fn balance_at(&self, player: PlayerId, up_to: usize) -> i64 {
        fold::balance(self.log.iter().take(up_to), player, self.config.starting_stake)
    }

    /// Spends by `player` since the most recent income entry of anyone.
    #[must_use]
    pub fn spent_this_turn_cycle(&self, player: PlayerId) -> i64 {
        fold::spent_this_turn_cycle(&self.log, player)
    }

    /// Spends by `player` attributed to `round`.
    #[must_use]
    pub fn spent_in_round(&self, player: PlayerId, round: u32) -> i64 {
        fold::spent_in_round(&self.log, player, round)
    }

    /// Everything `player` has spent this session.
    #[must_use]
    pub fn spent_total(&self, player: PlayerId) -> i64 {
        fold::spent_total(&self.log, player)
    }

    /// Everything `player` has received as income this session.
    #[must_use]
    pub fn income_total(&self, player: PlayerId) -> i64 {
        fold::income_total(&self.log, player)
    }

    /// The active player.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.round.current_turn()
    }

    /// Check whether it is `player`'s turn.
    #[must_use]
    pub fn is_current_turn(&self, player: PlayerId) -> bool {
        self.current_turn() == player
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.round.current_round()
    }

    /// Turn order for the current round.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        self.round.turn_order()
    }

    /// Round counter, order and active seat together.
    #[must_use]
    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    /// All entries in the order they were recorded.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionEntry> {
        &self.log
    }

    /// Per-round stipends.
    #[must_use]
    pub fn income_config(&self) -> &IncomeConfig {
        &self.incomes
    }

    /// The session roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The configuration the ledger was opened with.
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// One stats row per player, in id order.
    #[must_use]
    pub fn player_summaries(&self) -> Vec<PlayerSummary> {
        self.roster
            .players()
            .map(|player| PlayerSummary {
                player,
                name: self.roster.display_name(player),
                balance: self.balance_of(player),
                spent_this_turn_cycle: self.spent_this_turn_cycle(player),
                spent_total: self.spent_total(player),
                income: self.incomes.get(player).unwrap_or_default(),
                is_current_turn: self.is_current_turn(player),
            })
            .collect()
    }

    // === Internals ===

    fn check_player(&self, player: PlayerId) -> Result<()> {
        if self.roster.contains(player) {
            Ok(())
        } else {
            rejected(LedgerError::UnknownPlayer(player))
        }
    }

    fn check_max(&self, amount: i64) -> Result<()> {
        let maximum = self.config.max_amount;
        if amount > maximum {
            return rejected(LedgerError::AmountTooLarge { amount, maximum });
        }
        Ok(())
    }

    fn append(&mut self, entry: ActionEntry) {
        self.log.push_back(entry);
    }

    /// `balance` is the player's balance once the entry is recorded.
    fn credit(&mut self, player: PlayerId, amount: i64, balance: i64, round: u32) {
        self.append(ActionEntry::income(player, amount, round));
        self.events.push(LedgerEvent::IncomeAdded {
            player,
            amount,
            balance,
        });
    }

    fn close_round(&mut self) -> TurnOutcome {
        let closed_round = self.round.current_round();

        // Measured before stipends land so both windows see the same spends.
        let spend = PlayerMap::new(self.roster.len(), |p| match self.config.spend_window {
            SpendWindow::ClosedRound => self.spent_in_round(p, closed_round),
            SpendWindow::SinceLastIncome => self.spent_this_turn_cycle(p),
        });

        let stipends: Vec<(PlayerId, i64)> = self.incomes.iter().collect();
        for (player, amount) in stipends {
            let balance = self.balance_of(player).saturating_add(amount);
            self.credit(player, amount, balance, closed_round);
        }

        let order = next_turn_order(self.round.turn_order(), self.config.turn_order, |p| spend[p]);
        self.round.begin_round(order.clone());

        let next_player = self.round.current_turn();
        info!(
            "Round {} closed, round {} order {:?}",
            closed_round,
            self.round.current_round(),
            order
        );
        self.events.push(LedgerEvent::RoundClosed {
            closed_round,
            turn_order: order,
        });

        TurnOutcome::RoundClosed {
            closed_round,
            next_player,
        }
    }
}

fn rejected<T>(err: LedgerError) -> Result<T> {
    debug!("Command rejected: {}", err);
    Err(err)
}
