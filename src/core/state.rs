//! Round state: whose turn it is, in which order, in which round.
//!
//! `RoundState` is the only mutable cursor the ledger keeps outside its
//! log. It is advanced by `advance` and reordered only at round rollover,
//! so the turn index and the round counter cannot drift apart.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Seating};

/// Round counter, turn order and active seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    current_round: u32,
    turn_order: Seating,
    current_turn_index: usize,
}

impl RoundState {
    /// Start round 1 with the given seating.
    #[must_use]
    pub fn new(seating: &[PlayerId]) -> Self {
        assert!(!seating.is_empty(), "Must have at least 1 player");

        Self {
            current_round: 1,
            turn_order: Seating::from_slice(seating),
            current_turn_index: 0,
        }
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Turn order for the current round.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Index of the active player in `turn_order`.
    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// The active player.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.turn_order[self.current_turn_index]
    }

    /// Move to the next seat. Returns true when the index wrapped to 0.
    ///
    /// Wrapping does not start the next round on its own; the caller closes
    /// the round with `begin_round` once stipends and order are settled.
    pub fn advance(&mut self) -> bool {
        self.current_turn_index = (self.current_turn_index + 1) % self.turn_order.len();
        self.current_turn_index == 0
    }

    /// Install the next round's order and bump the round counter.
    ///
    /// `order` must be a permutation of the current order.
    pub fn begin_round(&mut self, order: Seating) {
        debug_assert!(is_permutation(&self.turn_order, &order));

        self.turn_order = order;
        self.current_turn_index = 0;
        self.current_round += 1;
    }
}

fn is_permutation(a: &[PlayerId], b: &[PlayerId]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(ids: &[u8]) -> Vec<PlayerId> {
        ids.iter().map(|&i| PlayerId::new(i)).collect()
    }

    #[test]
    fn test_new_round_state() {
        let state = RoundState::new(&seats(&[2, 0, 1]));

        assert_eq!(state.current_round(), 1);
        assert_eq!(state.current_turn_index(), 0);
        assert_eq!(state.current_turn(), PlayerId::new(2));
        assert_eq!(state.turn_order(), seats(&[2, 0, 1]).as_slice());
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = RoundState::new(&seats(&[0, 1, 2]));

        assert!(!state.advance());
        assert_eq!(state.current_turn(), PlayerId::new(1));
        assert!(!state.advance());
        assert!(state.advance());
        assert_eq!(state.current_turn_index(), 0);
        // Wrapping alone does not change the round.
        assert_eq!(state.current_round(), 1);
    }

    #[test]
    fn test_begin_round() {
        let mut state = RoundState::new(&seats(&[0, 1, 2]));
        state.advance();

        state.begin_round(Seating::from_slice(&seats(&[2, 1, 0])));

        assert_eq!(state.current_round(), 2);
        assert_eq!(state.current_turn_index(), 0);
        assert_eq!(state.current_turn(), PlayerId::new(2));
    }

    #[test]
    fn test_permutation_check() {
        assert!(is_permutation(&seats(&[0, 1, 2]), &seats(&[2, 0, 1])));
        assert!(!is_permutation(&seats(&[0, 1, 2]), &seats(&[0, 0, 1])));
    }

    #[test]
    fn test_round_state_serialization() {
        let state = RoundState::new(&seats(&[1, 0]));
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
