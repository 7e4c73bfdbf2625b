//! Player identification, per-seat storage, and the player record.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based, in registration order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `im::Vector`, so cloning a whole table for a
//! new state snapshot is O(1) and untouched seats stay shared.
//!
//! ## Player
//!
//! Balance, debt, and the per-round fields (bet, dice, hand, roll count,
//! turn flag, net result) for one seat.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::dice::Dice;
use crate::hands::Hand;

/// Seat identifier. The first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats at a table of `player_count` players.
    ///
    /// ```
    /// use chinchiro::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The following seat, wrapping to seat 0 after the last.
    #[must_use]
    pub fn next_seat(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data with O(1) access and O(1) clone.
///
/// ## Example
///
/// ```
/// use chinchiro::core::{PlayerId, PlayerMap};
///
/// let mut balances: PlayerMap<i64> = PlayerMap::new(4, |_| 20_000);
/// balances[PlayerId::new(1)] -= 500;
///
/// let snapshot = balances.clone();
/// balances[PlayerId::new(1)] += 500;
///
/// assert_eq!(snapshot[PlayerId::new(1)], 19_500);
/// assert_eq!(balances[PlayerId::new(1)], 20_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T: Clone> {
    data: Vector<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` is seated at this table.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a player's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T: Clone> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T: Clone> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat's money and round progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Can dip below zero only through settlement losses.
    pub balance: i64,
    /// Borrowed and not yet repaid. Never negative.
    pub debt: i64,
    /// Committed stake, within `0..=balance`.
    pub bet: i64,
    pub is_banker: bool,
    /// Last thrown dice, kept for display even when the hand is overridden.
    pub dice: Option<Dice>,
    pub hand: Option<Hand>,
    /// Throws taken this turn, `0..=3`.
    pub roll_count: u8,
    pub turn_finished: bool,
    /// Signed result of the last settled round.
    pub net: i64,
}

impl Player {
    /// A fresh seat with no debt and nothing committed.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            debt: 0,
            bet: 0,
            is_banker: false,
            dice: None,
            hand: None,
            roll_count: 0,
            turn_finished: false,
            net: 0,
        }
    }

    /// Clear the throw fields ahead of a turn.
    pub fn clear_turn(&mut self) {
        self.dice = None;
        self.hand = None;
        self.roll_count = 0;
        self.turn_finished = false;
    }

    /// Reset every per-round field. Balance and debt carry over.
    pub fn reset_for_round(&mut self) {
        self.clear_turn();
        self.bet = 0;
        self.net = 0;
    }
}
