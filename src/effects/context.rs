//! The resolver context: state, providers and log, borrowed together.
//!
//! Every primitive a card effect is built from lives here: asking a
//! provider (validated and logged), drawing, choosing an opponent,
//! revealing cards, eliminating, and the reincarnation replacement.

use log::{debug, warn};

use crate::cards::Rank;
use crate::core::error::GameError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::GameState;
use crate::decision::{Choices, DecisionKind, DecisionProvider, Selection};
use crate::training::record::GameLog;

use super::targeting::eligible_opponents;

/// One provider per player, keyed by turn number.
pub type Providers = PlayerMap<Box<dyn DecisionProvider>>;

/// Mutable access to everything an effect touches.
pub struct ResolverContext<'a> {
    pub state: &'a mut GameState,
    providers: &'a mut Providers,
    log: &'a mut GameLog,
}

impl<'a> ResolverContext<'a> {
    pub fn new(state: &'a mut GameState, providers: &'a mut Providers, log: &'a mut GameLog) -> Self {
        Self {
            state,
            providers,
            log,
        }
    }

    /// Ask `player` for a decision.
    ///
    /// The provider sees a fresh view. An answer outside `choices` is an
    /// error; an accepted answer is appended to the player's log.
    pub fn decide(
        &mut self,
        player: PlayerId,
        choices: Choices,
        kind: DecisionKind,
    ) -> Result<Selection, GameError> {
        let view = self.state.view(player);
        let selection = self.providers[player].decide(&view, &choices, kind);

        if !choices.accepts(selection) {
            warn!("{player} answered {selection} to {kind}, offered {choices}");
            return Err(GameError::InvalidSelection {
                player,
                kind,
                choices,
                selection,
            });
        }

        debug!("{player} {kind}: {selection} from {choices}");
        self.log.push(player, view, kind, choices, selection);
        Ok(selection)
    }

    /// Ask for one of `ranks`.
    pub fn decide_rank(
        &mut self,
        player: PlayerId,
        ranks: Vec<Rank>,
        kind: DecisionKind,
    ) -> Result<Rank, GameError> {
        let choices = Choices::Ranks(ranks);
        match self.decide(player, choices.clone(), kind)? {
            Selection::Rank(rank) => Ok(rank),
            selection => Err(GameError::InvalidSelection {
                player,
                kind,
                choices,
                selection,
            }),
        }
    }

    /// A normal draw.
    ///
    /// Makes the player targetable again, offers the top `draw_allowance`
    /// cards and moves the first card of the chosen rank into the hand.
    /// Returns `false` (and asks nothing) when the deck is empty.
    pub fn draw(&mut self, player: PlayerId) -> Result<bool, GameError> {
        let allowance = {
            let p = self.state.player_mut(player);
            p.targetable = true;
            p.draw_allowance
        };

        let offered: Vec<Rank> = self.state.field.window(allowance).iter().map(|c| c.rank()).collect();
        if offered.is_empty() {
            debug!("{player} draws from an empty deck");
            return Ok(false);
        }

        let rank = self.decide_rank(player, offered.clone(), DecisionKind::Draw)?;
        let card = self
            .state
            .field
            .take_from_window(allowance, rank)
            .ok_or_else(|| GameError::InvalidSelection {
                player,
                kind: DecisionKind::Draw,
                choices: Choices::Ranks(offered),
                selection: Selection::Rank(rank),
            })?;

        let p = self.state.player_mut(player);
        p.receive(card);
        p.draw_allowance = 1;
        Ok(true)
    }

    /// A draw imposed by another player's effect: one card offered, and the
    /// target's own pending allowance survives it.
    pub fn forced_draw(&mut self, target: PlayerId) -> Result<bool, GameError> {
        let saved = self.state.player(target).draw_allowance;
        self.state.player_mut(target).draw_allowance = 1;
        let drew = self.draw(target);
        self.state.player_mut(target).draw_allowance = saved;
        drew
    }

    /// Let `actor` pick among the targetable opponents.
    ///
    /// `None` when nobody can be targeted; no decision is asked then.
    pub fn choose_opponent(&mut self, actor: PlayerId) -> Result<Option<PlayerId>, GameError> {
        let candidates = eligible_opponents(&*self.state, actor);
        if candidates.is_empty() {
            debug!("{actor} has no one to target");
            return Ok(None);
        }

        let choices = Choices::opponents(candidates.iter().copied());
        let selection = self.decide(actor, choices.clone(), DecisionKind::OpponentChoice)?;
        let target = match selection {
            Selection::Opponent(index) => candidates.get(index).copied(),
            Selection::Rank(_) => None,
        };
        target.map(Some).ok_or_else(|| GameError::InvalidSelection {
            player: actor,
            kind: DecisionKind::OpponentChoice,
            choices,
            selection,
        })
    }

    /// `observer` sees `subject`'s card of `rank`, and `subject` knows it.
    pub fn reveal(&mut self, observer: PlayerId, subject: PlayerId, rank: Rank) {
        let (obs, sub) = self.state.players.pair_mut(observer, subject);
        obs.knowledge.saw(subject, rank);
        sub.knowledge.seen_by(observer, rank);
    }

    /// Reveal `subject`'s whole hand to `observer`.
    pub fn reveal_hand(&mut self, observer: PlayerId, subject: PlayerId) {
        for rank in self.state.player(subject).hand_ranks() {
            self.reveal(observer, subject, rank);
        }
    }

    pub fn kill(&mut self, player: PlayerId) {
        debug!("{player} is eliminated");
        self.state.player_mut(player).eliminate();
    }

    /// Reincarnation: the target's hand goes to its played pile and the
    /// reserved card takes its place. Does nothing once the reserved card
    /// has been handed out.
    pub fn replace(&mut self, target: PlayerId) {
        let Some(card) = self.state.field.take_reincarnation() else {
            warn!("reincarnation for {target} skipped: card already consumed");
            return;
        };

        self.state.discard_hand(target);
        debug!("{target} reincarnates with a {}", card.name());
        self.state.player_mut(target).receive(card);
    }
}
