//! The shared table: draw pile, played piles, and the reincarnation card.
//!
//! The `Field` owns every card that is not in a hand:
//! - `deck`: ordered, index 0 is the next card drawn
//! - one played pile per player, oldest first
//! - the reincarnation card, set aside before dealing and granted at most once

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, Composition, Rank};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Field {
    deck: Vec<Card>,
    played: PlayerMap<Vector<Card>>,
    reincarnation: Option<Card>,
}

impl Field {
    /// Shuffle a fresh composition and set the reincarnation card aside.
    ///
    /// The reincarnation card is the last card of the shuffled deck.
    pub fn shuffled(composition: &Composition, player_count: usize, rng: &mut GameRng) -> Self {
        let mut deck = composition.cards();
        rng.shuffle(&mut deck);
        let reincarnation = deck.pop();

        Self {
            deck,
            played: PlayerMap::with_default(player_count),
            reincarnation,
        }
    }

    /// A field with a known deck order, top card first.
    ///
    /// Used to set up exact scenarios.
    pub fn stacked(deck: Vec<Rank>, reincarnation: Option<Rank>, player_count: usize) -> Self {
        Self {
            deck: deck.into_iter().map(Card::from_rank).collect(),
            played: PlayerMap::with_default(player_count),
            reincarnation: reincarnation.map(Card::from_rank),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The top `n` cards (fewer if the deck is short).
    #[must_use]
    pub fn window(&self, n: usize) -> &[Card] {
        &self.deck[..n.min(self.deck.len())]
    }

    /// Remove the first card of `rank` among the top `n`.
    pub fn take_from_window(&mut self, n: usize, rank: Rank) -> Option<Card> {
        let idx = self.window(n).iter().position(|c| c.rank() == rank)?;
        Some(self.deck.remove(idx))
    }

    /// Reshuffle the remaining deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    /// A player's played pile, oldest first.
    #[must_use]
    pub fn played(&self, player: PlayerId) -> &Vector<Card> {
        &self.played[player]
    }

    /// Append a card to a player's played pile.
    pub fn push_played(&mut self, player: PlayerId, mut card: Card) {
        card.holder = Some(player);
        self.played[player].push_back(card);
    }

    /// Does any played pile contain a card of this kind?
    #[must_use]
    pub fn any_played(&self, kind: CardKind) -> bool {
        self.played.values().any(|pile| pile.iter().any(|c| c.kind == kind))
    }

    #[must_use]
    pub fn reincarnation(&self) -> Option<&Card> {
        self.reincarnation.as_ref()
    }

    #[must_use]
    pub fn reincarnation_available(&self) -> bool {
        self.reincarnation.is_some()
    }

    /// Hand out the reincarnation card. `None` once it has been consumed.
    pub fn take_reincarnation(&mut self) -> Option<Card> {
        self.reincarnation.take()
    }

    /// Every card the field holds: deck, piles and the reserved card.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.played.values().flat_map(|pile| pile.iter()))
            .chain(self.reincarnation.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    #[test]
    fn test_shuffled_sets_one_card_aside() {
        let mut rng = GameRng::new(42);
        let field = Field::shuffled(&Composition::reference(), 2, &mut rng);

        assert_eq!(field.deck_len(), 17);
        assert!(field.reincarnation_available());
        assert_eq!(field.cards().count(), 18);
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let a = Field::shuffled(&Composition::reference(), 2, &mut GameRng::new(9));
        let b = Field::shuffled(&Composition::reference(), 2, &mut GameRng::new(9));
        assert_eq!(a.deck(), b.deck());
        assert_eq!(a.reincarnation(), b.reincarnation());
    }

    #[test]
    fn test_take_from_window_takes_first_match_in_deck_order() {
        let mut field = Field::stacked(vec![rank(3), rank(5), rank(3), rank(8)], None, 2);

        assert!(field.take_from_window(3, rank(8)).is_none());
        let card = field.take_from_window(3, rank(3)).unwrap();
        assert_eq!(card.rank(), rank(3));

        let left: Vec<_> = field.deck().iter().map(|c| c.rank().value()).collect();
        assert_eq!(left, vec![5, 3, 8]);
    }

    #[test]
    fn test_window_clamps_to_deck() {
        let field = Field::stacked(vec![rank(1)], None, 2);
        assert_eq!(field.window(3).len(), 1);
    }

    #[test]
    fn test_reincarnation_is_consumed_once() {
        let mut field = Field::stacked(vec![], Some(rank(4)), 2);
        assert_eq!(field.take_reincarnation().map(|c| c.rank()), Some(rank(4)));
        assert!(field.take_reincarnation().is_none());
        assert!(!field.reincarnation_available());
    }

    #[test]
    fn test_played_piles() {
        let mut field = Field::stacked(vec![], None, 3);
        field.push_played(PlayerId::new(2), Card::new(CardKind::Boy));

        assert!(field.any_played(CardKind::Boy));
        assert!(!field.any_played(CardKind::Soldier));
        assert_eq!(field.played(PlayerId::new(2)).len(), 1);
        assert_eq!(field.played(PlayerId::new(2))[0].holder, Some(PlayerId::new(2)));
        assert!(field.played(PlayerId::new(1)).is_empty());
    }
}
