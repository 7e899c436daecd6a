//! Player identification, per-player storage and the session roster.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Indices are 0-based, display is 1-based
//! ("Player 1") to match what players see at the table.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Roster
//!
//! The fixed set of players for a session, with optional display names and
//! the seating that becomes the first round's turn order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::error::{LedgerError, Result};
use super::rng::SeatRng;

/// Smallest roster a session accepts.
pub const MIN_PLAYERS: usize = 2;

/// Largest roster a session accepts.
pub const MAX_PLAYERS: usize = 4;

/// Turn order storage. Rosters never exceed `MAX_PLAYERS`, so this stays inline.
pub type Seating = SmallVec<[PlayerId; MAX_PLAYERS]>;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use brass_ledger::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use brass_ledger::core::{PlayerId, PlayerMap};
///
/// let mut income: PlayerMap<i64> = PlayerMap::with_value(3, 0);
/// income[PlayerId::new(1)] = 5;
/// assert_eq!(income[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` if the player is out of range.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// The fixed roster of a session.
///
/// Built once by the presentation layer (after name entry) and handed to the
/// ledger. Player identities, names and seating never change afterwards.
///
/// ```
/// use brass_ledger::core::{PlayerId, Roster};
///
/// let roster = Roster::named(["Ada", "Brunel", ""]).unwrap();
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.display_name(PlayerId::new(0)), "Ada");
/// assert_eq!(roster.display_name(PlayerId::new(2)), "Player 3");
/// ```
///
/// Deserialization applies the same checks as the constructors: 2 to 4
/// players, and a seating that places every player exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterData")]
pub struct Roster {
    names: PlayerMap<Option<String>>,
    seating: Seating,
}

/// Unchecked wire form of a `Roster`.
#[derive(Deserialize)]
struct RosterData {
    names: PlayerMap<Option<String>>,
    seating: Seating,
}

impl TryFrom<RosterData> for Roster {
    type Error = LedgerError;

    fn try_from(data: RosterData) -> Result<Self> {
        let count = data.names.player_count();
        check_size(count)?;
        check_seating(&data.seating, count)?;
        Ok(Self {
            names: data.names,
            seating: data.seating,
        })
    }
}

impl Roster {
    /// Create an unnamed roster seated in id order.
    pub fn new(player_count: usize) -> Result<Self> {
        check_size(player_count)?;
        Ok(Self {
            names: PlayerMap::with_value(player_count, None),
            seating: PlayerId::all(player_count).collect(),
        })
    }

    /// Create a roster from display names, seated in the given order.
    ///
    /// Blank names fall back to the default "Player N" label.
    pub fn named<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<Option<String>> = names
            .into_iter()
            .map(|n| {
                let trimmed = n.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        check_size(names.len())?;

        let count = names.len();
        Ok(Self {
            names: PlayerMap::new(count, |p| names[p.index()].clone()),
            seating: PlayerId::all(count).collect(),
        })
    }

    /// Shuffle the seating with a deterministic seed.
    ///
    /// Only the first round's turn order is affected; identities and names stay put.
    #[must_use]
    pub fn seated_randomly(mut self, seed: u64) -> Self {
        SeatRng::new(seed).shuffle(&mut self.seating);
        self
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seating.len()
    }

    /// Always false: a roster has at least `MIN_PLAYERS` players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seating.is_empty()
    }

    /// Check whether `player` belongs to this roster.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.len()
    }

    /// All players in id order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.len())
    }

    /// Initial seating (the first round's turn order).
    #[must_use]
    pub fn seating(&self) -> &[PlayerId] {
        &self.seating
    }

    /// Explicit display name, if one was entered.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player).and_then(|n| n.as_deref())
    }

    /// Display label: the entered name or "Player N".
    #[must_use]
    pub fn display_name(&self, player: PlayerId) -> String {
        self.name(player)
            .map(str::to_string)
            .unwrap_or_else(|| player.to_string())
    }
}

fn check_size(size: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&size) {
        Ok(())
    } else {
        Err(LedgerError::InvalidRoster { size })
    }
}

/// Seating must hold each of the `count` players exactly once.
fn check_seating(seating: &[PlayerId], count: usize) -> Result<()> {
    let mut seen = FxHashSet::default();
    let valid = seating.len() == count
        && seating
            .iter()
            .all(|&p| p.index() < count && seen.insert(p));
    if valid {
        Ok(())
    } else {
        Err(LedgerError::InvalidSeating(seating.to_vec()))
    }
}
