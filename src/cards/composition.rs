//! Deck composition: how many copies of each rank a game uses.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::instance::Card;
use super::rank::Rank;

/// Copies per rank, indexed by `rank - 1`.
///
/// ```
/// use xeno_engine::cards::Composition;
///
/// let reference = Composition::reference();
/// assert_eq!(reference.total(), 18);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    copies: [u8; Rank::MAX as usize],
}

impl Composition {
    /// Two copies of ranks 1-8, one each of 9 and 10.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            copies: [2, 2, 2, 2, 2, 2, 2, 2, 1, 1],
        }
    }

    /// A composition with no cards, to be filled with `with_copies`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            copies: [0; Rank::MAX as usize],
        }
    }

    /// Set the number of copies of a rank (builder pattern).
    #[must_use]
    pub fn with_copies(mut self, rank: Rank, copies: u8) -> Self {
        self.copies[rank.value() as usize - 1] = copies;
        self
    }

    #[must_use]
    pub fn copies(&self, rank: Rank) -> u8 {
        self.copies[rank.value() as usize - 1]
    }

    /// Total number of physical cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.copies.iter().map(|&c| c as usize).sum()
    }

    /// Copies per rank as a map, omitting absent ranks.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Rank, usize> {
        Rank::all()
            .filter(|&r| self.copies(r) > 0)
            .map(|r| (r, self.copies(r) as usize))
            .collect()
    }

    /// Allocate every physical card, in ascending rank order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        Rank::all()
            .flat_map(|r| std::iter::repeat(Card::from_rank(r)).take(self.copies(r) as usize))
            .collect()
    }

    /// Count the ranks of an arbitrary card list the same way `counts` does.
    #[must_use]
    pub fn census<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Rank, usize> {
        let mut counts = FxHashMap::default();
        for card in cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_composition() {
        let c = Composition::reference();
        assert_eq!(c.total(), 18);
        assert_eq!(c.copies(Rank::new(1).unwrap()), 2);
        assert_eq!(c.copies(Rank::HERO), 1);
    }

    #[test]
    fn test_cards_match_counts() {
        let c = Composition::reference();
        let cards = c.cards();
        assert_eq!(cards.len(), 18);
        assert_eq!(Composition::census(&cards), c.counts());
    }

    #[test]
    fn test_custom_composition() {
        let c = Composition::empty()
            .with_copies(Rank::new(3).unwrap(), 4)
            .with_copies(Rank::HERO, 1);
        assert_eq!(c.total(), 5);
        assert_eq!(c.counts().len(), 2);
    }
}
