//! Next-round turn order.
//!
//! The order is a stable sort of the previous round's order keyed by each
//! player's spend, so ties always keep their previous relative position.

use std::cmp::Reverse;

use crate::core::{PlayerId, Seating, TurnOrderPolicy};

/// Compute the next round's turn order.
///
/// `spend_of` reports each player's spend for the round being closed.
pub fn next_turn_order(
    previous: &[PlayerId],
    policy: TurnOrderPolicy,
    spend_of: impl Fn(PlayerId) -> i64,
) -> Seating {
    let mut order = Seating::from_slice(previous);
    match policy {
        TurnOrderPolicy::FrugalFirst => order.sort_by_key(|&p| spend_of(p)),
        TurnOrderPolicy::BigSpenderFirst => order.sort_by_key(|&p| Reverse(spend_of(p))),
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(ids: &[u8]) -> Vec<PlayerId> {
        ids.iter().map(|&i| PlayerId::new(i)).collect()
    }

    #[test]
    fn test_frugal_first() {
        let spend = [10, 0, 5];
        let order = next_turn_order(&seats(&[0, 1, 2]), TurnOrderPolicy::FrugalFirst, |p| {
            spend[p.index()]
        });

        assert_eq!(order.as_slice(), seats(&[1, 2, 0]).as_slice());
    }

    #[test]
    fn test_big_spender_first() {
        let spend = [10, 0, 5];
        let order = next_turn_order(&seats(&[0, 1, 2]), TurnOrderPolicy::BigSpenderFirst, |p| {
            spend[p.index()]
        });

        assert_eq!(order.as_slice(), seats(&[0, 2, 1]).as_slice());
    }

    #[test]
    fn test_ties_keep_previous_order() {
        let spend = [3, 3, 3, 1];
        let previous = seats(&[2, 0, 3, 1]);

        let frugal = next_turn_order(&previous, TurnOrderPolicy::FrugalFirst, |p| spend[p.index()]);
        assert_eq!(frugal.as_slice(), seats(&[3, 2, 0, 1]).as_slice());

        let spender = next_turn_order(&previous, TurnOrderPolicy::BigSpenderFirst, |p| {
            spend[p.index()]
        });
        assert_eq!(spender.as_slice(), seats(&[2, 0, 1, 3]).as_slice());
    }

    #[test]
    fn test_no_spend_keeps_order() {
        let previous = seats(&[1, 2, 0]);
        let order = next_turn_order(&previous, TurnOrderPolicy::FrugalFirst, |_| 0);

        assert_eq!(order.as_slice(), previous.as_slice());
    }
}
