//! Private knowledge one player holds about the others.
//!
//! Two directed relations plus the prediction record:
//! - `look`: "I observed that player Q holds rank R"
//! - `looked`: "player S observed my card of rank R"
//! - `predictions`: Soldier guesses this player made
//!
//! Facts are kept in observation order and never removed; seeing the
//! same card twice records two facts. Backed by `im::Vector` so views
//! can snapshot them cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Rank;

/// One observation fact about a card of another player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sighting {
    /// The other party: the observed player for `look`, the observer for `looked`.
    pub player: PlayerId,
    pub rank: Rank,
}

/// A Soldier prediction: `subject` guessed that `object` holds `rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prediction {
    pub subject: PlayerId,
    pub object: PlayerId,
    pub rank: Rank,
}

impl Prediction {
    /// Is `player` a party to this prediction?
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        self.subject == player || self.object == player
    }
}

/// Knowledge sets of a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knowledge {
    look: Vector<Sighting>,
    looked: Vector<Sighting>,
    predictions: Vector<Prediction>,
}

impl Knowledge {
    /// Record that this player saw `rank` in `opponent`'s hand.
    pub fn saw(&mut self, opponent: PlayerId, rank: Rank) {
        self.look.push_back(Sighting { player: opponent, rank });
    }

    /// Record that `observer` saw this player's card of `rank`.
    pub fn seen_by(&mut self, observer: PlayerId, rank: Rank) {
        self.looked.push_back(Sighting { player: observer, rank });
    }

    /// Record a Soldier prediction made by this player.
    pub fn predicted(&mut self, prediction: Prediction) {
        self.predictions.push_back(prediction);
    }

    #[must_use]
    pub fn look(&self) -> &Vector<Sighting> {
        &self.look
    }

    #[must_use]
    pub fn looked(&self) -> &Vector<Sighting> {
        &self.looked
    }

    #[must_use]
    pub fn predictions(&self) -> &Vector<Prediction> {
        &self.predictions
    }

    /// Ranks this player has seen in `opponent`'s hand, oldest first.
    pub fn seen_in(&self, opponent: PlayerId) -> impl Iterator<Item = Rank> + '_ {
        self.look
            .iter()
            .filter(move |s| s.player == opponent)
            .map(|s| s.rank)
    }

    /// Ranks of this player's cards that `observer` has seen, oldest first.
    pub fn shown_to(&self, observer: PlayerId) -> impl Iterator<Item = Rank> + '_ {
        self.looked
            .iter()
            .filter(move |s| s.player == observer)
            .map(|s| s.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    #[test]
    fn test_look_and_looked_are_directed() {
        let mut k = Knowledge::default();
        k.saw(PlayerId::new(2), rank(5));
        k.seen_by(PlayerId::new(3), rank(7));

        assert_eq!(k.seen_in(PlayerId::new(2)).collect::<Vec<_>>(), vec![rank(5)]);
        assert_eq!(k.seen_in(PlayerId::new(3)).count(), 0);
        assert_eq!(k.shown_to(PlayerId::new(3)).collect::<Vec<_>>(), vec![rank(7)]);
    }

    #[test]
    fn test_repeated_sightings_are_kept() {
        let mut k = Knowledge::default();
        k.saw(PlayerId::new(2), rank(5));
        k.saw(PlayerId::new(2), rank(5));
        assert_eq!(k.look().len(), 2);
    }

    #[test]
    fn test_prediction_involves() {
        let p = Prediction {
            subject: PlayerId::new(1),
            object: PlayerId::new(2),
            rank: rank(4),
        };
        assert!(p.involves(PlayerId::new(1)));
        assert!(p.involves(PlayerId::new(2)));
        assert!(!p.involves(PlayerId::new(3)));
    }
}
