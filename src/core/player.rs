//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Seat index at the table (0-based). Seat 0 is always the Sheriff.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier for a 4-7 player table.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use bang_rules::core::{PlayerId, PlayerMap};
///
/// let mut health = PlayerMap::from_vec(vec![5u8, 4, 4, 3]);
/// health[PlayerId::new(1)] -= 1;
/// assert_eq!(health[PlayerId::new(1)], 3);
/// assert_eq!(health.get(PlayerId::new(4)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from already-constructed per-seat values (seat order).
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Look up a seat, returning `None` when it does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Check whether the seat exists.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
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

    /// Iterate over all seat IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "1");
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::from_vec(vec![1, 2]);

        assert_eq!(map.get(PlayerId::new(1)), Some(&2));
        assert_eq!(map.get(PlayerId::new(2)), None);
        assert!(!map.contains(PlayerId::new(5)));
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec![0, 1, 2]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_vec(vec![4u8, 3]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u8> = PlayerMap::from_vec(Vec::new());
    }
}
