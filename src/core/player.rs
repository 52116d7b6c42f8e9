//! Player identification, per-player storage, and per-player game state.
//!
//! ## PlayerId
//!
//! A player's turn number, 1-based and fixed for the whole session once
//! seating has been shuffled.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.
//!
//! ## PlayerState
//!
//! Everything the engine tracks about one agent: hand, life status,
//! targetability, draw allowance and private knowledge.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::knowledge::Knowledge;
use crate::cards::{Card, Rank};

/// A player's turn number (1-based).
///
/// Turn numbers are assigned once, after the initial seating shuffle,
/// and never change during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID from a turn number.
    #[must_use]
    pub const fn new(turn_number: u8) -> Self {
        Self(turn_number)
    }

    /// The 1-based turn number.
    #[must_use]
    pub const fn turn_number(self) -> u8 {
        self.0
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Build from a 0-based storage index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Iterate over all player IDs of a game in turn order.
    ///
    /// ```
    /// use xeno_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use xeno_engine::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// wins[PlayerId::new(2)] += 1;
/// assert_eq!(wins[PlayerId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count < 255, "At most 254 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Take ownership of values already in turn order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow two different players mutably at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut needs two distinct players");
        let (ia, ib) = (a.index(), b.index());
        if ia < ib {
            let (left, right) = self.data.split_at_mut(ib);
            (&mut left[ia], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(ia);
            (&mut right[0], &mut left[ib])
        }
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
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

/// Cards in a hand. Two is the steady-state maximum.
pub type Hand = SmallVec<[Card; 2]>;

/// Mutable state of one agent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    /// Turn number.
    pub id: PlayerId,

    /// Index of the seat the caller registered this agent in.
    pub seat: usize,

    /// Display name from the naming provider.
    pub name: String,

    alive: bool,

    /// Cards currently held, oldest first.
    pub hand: Hand,

    /// How many top-of-deck cards the next draw offers.
    pub draw_allowance: usize,

    /// Whether opponent-targeting effects may choose this player.
    pub targetable: bool,

    /// Private knowledge and predictions.
    pub knowledge: Knowledge,
}

impl PlayerState {
    /// Create a fresh, alive player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, seat: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            seat,
            name: name.into(),
            alive: true,
            hand: Hand::new(),
            draw_allowance: 1,
            targetable: true,
            knowledge: Knowledge::default(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Eliminate this player. There is no way back.
    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    /// Ranks in hand, oldest first.
    #[must_use]
    pub fn hand_ranks(&self) -> SmallVec<[Rank; 2]> {
        self.hand.iter().map(|c| c.rank()).collect()
    }

    /// Does the hand contain a card of this rank?
    #[must_use]
    pub fn holds(&self, rank: Rank) -> bool {
        self.hand.iter().any(|c| c.rank() == rank)
    }

    /// Remove the first held card of this rank.
    pub fn take_rank(&mut self, rank: Rank) -> Option<Card> {
        let idx = self.hand.iter().position(|c| c.rank() == rank)?;
        Some(self.hand.remove(idx))
    }

    /// Add a card to the end of the hand, claiming it.
    pub fn receive(&mut self, mut card: Card) {
        card.holder = Some(self.id);
        self.hand.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 0);
        assert_eq!(p1.turn_number(), 1);
        assert_eq!(PlayerId::from_index(2), PlayerId::new(3));
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(3, |p| p.turn_number() * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_pair_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(4, 0);

        let (a, b) = map.pair_mut(PlayerId::new(4), PlayerId::new(2));
        *a = 4;
        *b = 2;

        assert_eq!(map[PlayerId::new(4)], 4);
        assert_eq!(map[PlayerId::new(2)], 2);
    }

    #[test]
    #[should_panic(expected = "two distinct players")]
    fn test_player_map_pair_mut_same_player() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(2, 0);
        let _ = map.pair_mut(PlayerId::new(1), PlayerId::new(1));
    }

    #[test]
    fn test_player_map_iter_order() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index());
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p.turn_number(), *v)).collect();
        assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_take_rank_removes_first_match() {
        let mut player = PlayerState::new(PlayerId::new(1), 0, "a");
        player.receive(Card::new(CardKind::Seer));
        player.receive(Card::new(CardKind::Noble));

        assert!(player.holds(Rank::new(6).unwrap()));
        let card = player.take_rank(Rank::new(3).unwrap()).unwrap();
        assert_eq!(card.kind, CardKind::Seer);
        assert_eq!(player.hand_ranks().as_slice(), &[Rank::new(6).unwrap()]);
        assert!(player.take_rank(Rank::new(3).unwrap()).is_none());
    }

    #[test]
    fn test_receive_sets_holder() {
        let mut player = PlayerState::new(PlayerId::new(2), 1, "b");
        player.receive(Card::new(CardKind::Hero));
        assert_eq!(player.hand[0].holder, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_elimination_is_sticky() {
        let mut player = PlayerState::new(PlayerId::new(1), 0, "a");
        assert!(player.is_alive());
        player.eliminate();
        player.eliminate();
        assert!(!player.is_alive());
    }
}
