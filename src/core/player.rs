//! Seats, per-seat storage, and the players at the table.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A straight-pool match always has exactly two
//! seats: seat A (index 0) and seat B (index 1).
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`. There is no way to build
//! a map with any other number of entries.
//!
//! ## Player
//!
//! Identity supplied by the roster plus the live score and foul streak.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier: `PlayerId::A` (index 0) or `PlayerId::B` (index 1).
///
/// Serialized as the bare index; deserializing anything but 0 or 1 fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// First seat (index 0).
    pub const A: PlayerId = PlayerId(0);

    /// Second seat (index 1). Innings are counted when this seat's turn ends.
    pub const B: PlayerId = PlayerId(1);

    /// Create a seat from a raw index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        match index {
            0 | 1 => Some(Self(index)),
            _ => None,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, A first.
    ///
    /// ```
    /// use rust_straight_pool::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::A, Self::B].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| format!("no seat with index {index}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "Player A"),
            _ => write!(f, "Player B"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_straight_pool::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::with_value(0);
/// scores[PlayerId::B] = 12;
///
/// assert_eq!(scores[PlayerId::A], 0);
/// assert_eq!(scores[PlayerId::B], 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a map from the seat A and seat B values.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Split into the seat A and seat B values.
    pub fn into_pair(self) -> (T, T) {
        let [a, b] = self.data;
        (a, b)
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Transform every entry, keeping the seat layout.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Who is sitting in a seat, as supplied by the roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Roster id. Required to hand a finished match to the store.
    pub id: Option<u32>,

    /// Display name.
    pub name: String,
}

impl PlayerIdentity {
    /// Identity backed by a roster entry.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Walk-in player with no roster entry.
    #[must_use]
    pub fn guest(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub identity: PlayerIdentity,

    /// Live score. Fouls can push it below zero; it is never clamped.
    pub score: i32,

    /// Consecutive fouls, always 0..=2. A third foul resolves as the
    /// three-foul penalty and resets this to 0.
    pub fouls_in_a_row: u8,
}

impl Player {
    #[must_use]
    pub fn new(identity: PlayerIdentity) -> Self {
        Self {
            identity,
            score: 0,
            fouls_in_a_row: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub(crate) fn clear_fouls(&mut self) {
        self.fouls_in_a_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::A.index(), 0);
        assert_eq!(PlayerId::B.index(), 1);
        assert_eq!(format!("{}", PlayerId::A), "Player A");
        assert_eq!(format!("{}", PlayerId::B), "Player B");
    }

    #[test]
    fn test_player_id_new_rejects_third_seat() {
        assert_eq!(PlayerId::new(0), Some(PlayerId::A));
        assert_eq!(PlayerId::new(1), Some(PlayerId::B));
        assert_eq!(PlayerId::new(2), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::A.opponent(), PlayerId::B);
        assert_eq!(PlayerId::B.opponent(), PlayerId::A);
        assert_eq!(PlayerId::A.opponent().opponent(), PlayerId::A);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::A], 0);
        assert_eq!(map[PlayerId::B], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::A] = -3;
        map[PlayerId::B] = 20;

        assert_eq!(map[PlayerId::A], -3);
        assert_eq!(map[PlayerId::B], 20);
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map = PlayerMap::from_pair("a", "bb");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::A, &"a"), (PlayerId::B, &"bb")]);

        let lens = map.map(|s| s.len());
        assert_eq!(lens, PlayerMap::from_pair(1, 2));
    }

    #[test]
    fn test_player_id_serialization_checks_range() {
        assert_eq!(serde_json::to_string(&PlayerId::B).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::A);

        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerMap<PlayerId>>(r#"{"data":[0,7]}"#).is_err());
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::from_pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_new_player_starts_clean() {
        let player = Player::new(PlayerIdentity::new(7, "Mosconi"));

        assert_eq!(player.score, 0);
        assert_eq!(player.fouls_in_a_row, 0);
        assert_eq!(player.name(), "Mosconi");
        assert_eq!(player.identity.id, Some(7));
        assert_eq!(PlayerIdentity::guest("Walk-in").id, None);
    }
}
