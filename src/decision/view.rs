//! The filtered game snapshot handed to a decision provider.
//!
//! A `GameView` is built for exactly one player. It carries that
//! player's own hand, everything public (played piles, who is alive,
//! deck size, whether the reincarnation card is still reserved) and the
//! player's private knowledge. Another player's hand appears only
//! through the viewer's own `look` facts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Rank;
use crate::core::knowledge::Prediction;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Bumped whenever a field is added, removed or changes meaning.
pub const VIEW_VERSION: u16 = 1;

/// What the viewer knows about one opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub player: PlayerId,
    pub alive: bool,
    /// The opponent's played pile, oldest first.
    pub played: Vec<Rank>,
    /// Ranks the viewer has seen in this opponent's hand.
    pub look: Vec<Rank>,
    /// Ranks of the viewer's cards this opponent has seen.
    pub looked: Vec<Rank>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub version: u16,
    pub player_count: usize,
    pub me: PlayerId,
    pub hand: SmallVec<[Rank; 2]>,
    pub played: Vec<Rank>,
    /// Every other player, in turn order.
    pub opponents: Vec<OpponentView>,
    /// Predictions the viewer made or was the object of, in turn order of
    /// the predicting player.
    pub predictions: Vec<Prediction>,
    pub deck_size: usize,
    pub reincarnation_available: bool,
}

impl GameView {
    /// Build the view of `me`.
    #[must_use]
    pub fn observe(state: &GameState, me: PlayerId) -> Self {
        let viewer = state.player(me);
        let ranks = |p: PlayerId| state.field.played(p).iter().map(|c| c.rank()).collect::<Vec<_>>();

        let opponents = state
            .players
            .iter()
            .filter(|(id, _)| *id != me)
            .map(|(id, p)| OpponentView {
                player: id,
                alive: p.is_alive(),
                played: ranks(id),
                look: viewer.knowledge.seen_in(id).collect(),
                looked: viewer.knowledge.shown_to(id).collect(),
            })
            .collect();

        let predictions = state
            .players
            .values()
            .flat_map(|p| p.knowledge.predictions().iter().copied())
            .filter(|pred| pred.involves(me))
            .collect();

        Self {
            version: VIEW_VERSION,
            player_count: state.player_count(),
            me,
            hand: viewer.hand_ranks(),
            played: ranks(me),
            opponents,
            predictions,
            deck_size: state.field.deck_len(),
            reincarnation_available: state.field.reincarnation_available(),
        }
    }

    /// The viewer's record of one opponent.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> Option<&OpponentView> {
        self.opponents.iter().find(|o| o.player == player)
    }

    /// Opponents still in the game.
    pub fn alive_opponents(&self) -> impl Iterator<Item = &OpponentView> {
        self.opponents.iter().filter(|o| o.alive)
    }
}
