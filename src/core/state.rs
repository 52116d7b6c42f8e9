//! Complete game state.
//!
//! `GameState` owns the players (in turn order), the field, the rule set
//! and the game's RNG. It exposes the small state transitions that card
//! effects are built from, and the conservation census.
//!
//! Card conservation: the number of cards across the deck, every hand,
//! every played pile and the reincarnation slot never changes.

use rustc_hash::FxHashMap;

use super::config::RuleSet;
use super::error::GameError;
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::GameRng;
use crate::cards::{Card, Composition, Rank};
use crate::decision::GameView;
use crate::zones::Field;

#[derive(Clone, Debug)]
pub struct GameState {
    /// Players in turn order.
    pub players: PlayerMap<PlayerState>,

    pub field: Field,

    pub rules: RuleSet,

    pub rng: GameRng,

    /// Card count fixed when the state was assembled.
    card_total: usize,
}

impl GameState {
    /// Assemble a state. The current card count becomes the conserved total.
    pub fn new(players: PlayerMap<PlayerState>, field: Field, rules: RuleSet, rng: GameRng) -> Self {
        let mut state = Self {
            players,
            field,
            rules,
            rng,
            card_total: 0,
        };
        state.card_total = state.card_count();
        state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// Turn order. Fixed for the whole game.
    pub fn turn_order(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.values().filter(|p| p.is_alive()).count()
    }

    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// The filtered view handed to `player`'s provider.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> GameView {
        GameView::observe(self, player)
    }

    /// Move the first held card of `rank` from `player`'s hand to their
    /// own played pile.
    pub fn play_from_hand(&mut self, player: PlayerId, rank: Rank) -> Result<Card, GameError> {
        self.discard_from(player, rank)
    }

    /// Move the first held card of `rank` from `target`'s hand to the
    /// target's played pile.
    pub fn discard_from(&mut self, target: PlayerId, rank: Rank) -> Result<Card, GameError> {
        let card = self.players[target]
            .take_rank(rank)
            .ok_or(GameError::CardNotInHand { player: target, rank })?;
        self.field.push_played(target, card);
        Ok(card)
    }

    /// Move a player's whole hand to their played pile.
    pub fn discard_hand(&mut self, target: PlayerId) {
        let hand = std::mem::take(&mut self.players[target].hand);
        for card in hand {
            self.field.push_played(target, card);
        }
    }

    /// Number of cards the game started with.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.card_total
    }

    /// Number of cards currently anywhere in the game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.field.cards().count() + self.players.values().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Copies of each rank currently anywhere in the game.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Rank, usize> {
        Composition::census(
            self.field
                .cards()
                .chain(self.players.values().flat_map(|p| p.hand.iter())),
        )
    }

    /// Fail if any card has appeared or vanished.
    pub fn check_conservation(&self) -> Result<(), GameError> {
        let found = self.card_count();
        if found == self.card_total {
            Ok(())
        } else {
            Err(GameError::Conservation {
                expected: self.card_total,
                found,
            })
        }
    }
}
