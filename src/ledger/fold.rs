//! Pure folds over the action log.
//!
//! Every derived quantity is recomputed from the entries on demand. There
//! are no running totals to keep in sync, so dropping the tail entry (undo)
//! needs no inverse bookkeeping. Each fold is O(log length).
//!
//! The functions take any iterator of entry references, so they work on the
//! ledger's `im::Vector`, on plain slices, and on prefixes via `take(n)`.

use crate::core::{ActionEntry, ActionKind, PlayerId};

/// Balance of `player`: `stake` plus their income minus their spends.
///
/// Saturates at the `i64` bounds instead of wrapping.
pub fn balance<'a>(
    entries: impl IntoIterator<Item = &'a ActionEntry>,
    player: PlayerId,
    stake: i64,
) -> i64 {
    entries
        .into_iter()
        .filter(|e| e.player == player)
        .fold(stake, |total, e| total.saturating_add(e.signed_amount()))
}

/// Spends by `player` after the most recent income entry of any player.
///
/// With no income in the log yet, sums from the start.
pub fn spent_this_turn_cycle<'a, I>(entries: I, player: PlayerId) -> i64
where
    I: IntoIterator<Item = &'a ActionEntry>,
    I::IntoIter: DoubleEndedIterator,
{
    entries
        .into_iter()
        .rev()
        .take_while(|e| !e.is_income())
        .filter(|e| e.player == player)
        .map(|e| e.amount)
        .fold(0, i64::saturating_add)
}

/// Spends by `player` tagged with `round`.
pub fn spent_in_round<'a>(
    entries: impl IntoIterator<Item = &'a ActionEntry>,
    player: PlayerId,
    round: u32,
) -> i64 {
    sum_kind(entries, player, ActionKind::Spend, |e| e.round == round)
}

/// All spends by `player`.
pub fn spent_total<'a>(entries: impl IntoIterator<Item = &'a ActionEntry>, player: PlayerId) -> i64 {
    sum_kind(entries, player, ActionKind::Spend, |_| true)
}

/// All income (stipends and manual) received by `player`.
pub fn income_total<'a>(entries: impl IntoIterator<Item = &'a ActionEntry>, player: PlayerId) -> i64 {
    sum_kind(entries, player, ActionKind::Income, |_| true)
}

fn sum_kind<'a>(
    entries: impl IntoIterator<Item = &'a ActionEntry>,
    player: PlayerId,
    kind: ActionKind,
    keep: impl Fn(&ActionEntry) -> bool,
) -> i64 {
    entries
        .into_iter()
        .filter(|e| e.player == player && e.kind == kind && keep(*e))
        .map(|e| e.amount)
        .fold(0, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn sample_log() -> Vec<ActionEntry> {
        vec![
            ActionEntry::spend(P0, 10, 1),
            ActionEntry::spend(P1, 4, 1),
            ActionEntry::income(P0, 5, 1),
            ActionEntry::income(P1, -2, 1),
            ActionEntry::spend(P0, 3, 2),
            ActionEntry::spend(P0, 2, 2),
            ActionEntry::spend(P1, 6, 2),
        ]
    }

    #[test]
    fn test_balance() {
        let log = sample_log();

        assert_eq!(balance(&log, P0, 30), 30 - 10 + 5 - 3 - 2);
        assert_eq!(balance(&log, P1, 30), 30 - 4 - 2 - 6);
        assert_eq!(balance(&Vec::<ActionEntry>::new(), P0, 30), 30);
    }

    #[test]
    fn test_balance_saturates() {
        let log = vec![ActionEntry::income(P0, i64::MAX, 1), ActionEntry::income(P0, 5, 2)];

        assert_eq!(balance(&log, P0, 30), i64::MAX);
    }

    #[test]
    fn test_balance_prefix() {
        let log = sample_log();

        assert_eq!(balance(log.iter().take(0), P0, 30), 30);
        assert_eq!(balance(log.iter().take(1), P0, 30), 20);
        assert_eq!(balance(log.iter().take(3), P0, 30), 25);
    }

    #[test]
    fn test_spent_this_turn_cycle() {
        let log = sample_log();

        assert_eq!(spent_this_turn_cycle(&log, P0), 5);
        assert_eq!(spent_this_turn_cycle(&log, P1), 6);
    }

    #[test]
    fn test_spent_this_turn_cycle_without_income() {
        let log = sample_log();

        assert_eq!(spent_this_turn_cycle(&log[..2], P0), 10);
        assert_eq!(spent_this_turn_cycle(&log[..2], P1), 4);
    }

    #[test]
    fn test_spent_this_turn_cycle_right_after_income() {
        let log = sample_log();

        assert_eq!(spent_this_turn_cycle(&log[..4], P0), 0);
    }

    #[test]
    fn test_spent_in_round() {
        let log = sample_log();

        assert_eq!(spent_in_round(&log, P0, 1), 10);
        assert_eq!(spent_in_round(&log, P0, 2), 5);
        assert_eq!(spent_in_round(&log, P1, 2), 6);
        assert_eq!(spent_in_round(&log, P1, 3), 0);
    }

    #[test]
    fn test_totals() {
        let log = sample_log();

        assert_eq!(spent_total(&log, P0), 15);
        assert_eq!(spent_total(&log, P1), 10);
        assert_eq!(income_total(&log, P0), 5);
        assert_eq!(income_total(&log, P1), -2);
    }

    #[test]
    fn test_works_on_im_vector() {
        let log: im::Vector<ActionEntry> = sample_log().into_iter().collect();

        assert_eq!(balance(&log, P0, 30), 20);
        assert_eq!(spent_this_turn_cycle(&log, P0), 5);
    }
}
