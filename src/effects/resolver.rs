//! Card effect resolution.
//!
//! `EffectResolver::play` moves the chosen card from the actor's hand to
//! the actor's played pile, then runs the behavior of its `CardKind`.
//! Sub-decisions (target, prediction, discard) go through the
//! `ResolverContext` and are logged there.

use log::debug;

use crate::cards::{CardKind, Rank};
use crate::core::error::GameError;
use crate::core::knowledge::Prediction;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::decision::DecisionKind;

use super::context::ResolverContext;
use super::effect::Resolution;

/// Dispatches the ten card behaviors.
pub struct EffectResolver;

impl EffectResolver {
    /// Play `rank` from `actor`'s hand and resolve its effect.
    pub fn play(ctx: &mut ResolverContext<'_>, actor: PlayerId, rank: Rank) -> Result<Resolution, GameError> {
        let kind = CardKind::from_rank(rank);
        if !kind.is_playable() {
            return Ok(Resolution::Inert);
        }

        // The Boy only counts Boys already on the table, not itself.
        let boy_active = kind == CardKind::Boy && ctx.state.field.any_played(CardKind::Boy);

        ctx.state.play_from_hand(actor, rank)?;
        debug!("{actor} plays {kind}");

        let resolution = match kind {
            CardKind::Boy if !boy_active => Resolution::Inactive,
            CardKind::Boy => Self::boy(ctx, actor)?,
            CardKind::Soldier => Self::soldier(ctx, actor)?,
            CardKind::Seer => Self::seer(ctx, actor)?,
            CardKind::Maiden => Self::maiden(ctx.state, actor),
            CardKind::Reaper => Self::reaper(ctx, actor)?,
            CardKind::Noble => Self::noble(ctx, actor)?,
            CardKind::Sage => Self::sage(ctx.state, actor),
            CardKind::Spirit => Self::spirit(ctx, actor)?,
            CardKind::Emperor => Self::emperor(ctx, actor)?,
            CardKind::Hero => Resolution::Inert,
        };

        debug!("{kind} by {actor}: {resolution:?}");
        Ok(resolution)
    }

    /// Force a draw, see the target's hand, discard one of its cards.
    fn boy(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };
        if ctx.state.field.is_deck_empty() {
            return Ok(Resolution::DeckExhausted);
        }

        ctx.forced_draw(target)?;
        ctx.reveal_hand(actor, target);

        let seen = ctx.state.player(target).hand_ranks().to_vec();
        let discard = ctx.decide_rank(actor, seen, DecisionKind::Trash)?;
        ctx.state.discard_from(target, discard)?;
        if discard == Rank::HERO {
            ctx.kill(target);
        }
        Ok(Resolution::Resolved)
    }

    /// Guess the target's card. A right guess eliminates it; a wrong
    /// guess of the Hero may trigger reincarnation.
    fn soldier(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };

        let guess = ctx.decide_rank(actor, Rank::all().collect(), DecisionKind::Predict)?;
        ctx.state.player_mut(actor).knowledge.predicted(Prediction {
            subject: actor,
            object: target,
            rank: guess,
        });

        if ctx.state.player(target).holds(guess) {
            ctx.kill(target);
        } else if guess == Rank::HERO && ctx.state.rules.soldier_hero_replaces {
            ctx.replace(target);
        }
        Ok(Resolution::Resolved)
    }

    fn seer(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };
        ctx.reveal_hand(actor, target);
        Ok(Resolution::Resolved)
    }

    /// Shielded until the actor's next draw.
    fn maiden(state: &mut GameState, actor: PlayerId) -> Resolution {
        state.player_mut(actor).targetable = false;
        Resolution::Resolved
    }

    /// Force a draw, then discard a random card of the target's.
    fn reaper(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };
        if ctx.state.field.is_deck_empty() {
            return Ok(Resolution::DeckExhausted);
        }

        ctx.forced_draw(target)?;

        let hand = ctx.state.player(target).hand_ranks();
        if hand.is_empty() {
            return Ok(Resolution::MissingCard);
        }
        let dropped = hand[ctx.state.rng.gen_range_usize(0..hand.len())];

        ctx.state.discard_from(target, dropped)?;
        ctx.state.player_mut(target).knowledge.seen_by(actor, dropped);
        if dropped == Rank::HERO {
            ctx.replace(target);
        }
        Ok(Resolution::Resolved)
    }

    /// Compare single cards; the lower one is eliminated, a tie
    /// eliminates both.
    fn noble(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };

        let mine = ctx.state.player(actor).hand.first().map(|c| c.rank());
        let theirs = ctx.state.player(target).hand.first().map(|c| c.rank());
        let (Some(mine), Some(theirs)) = (mine, theirs) else {
            return Ok(Resolution::MissingCard);
        };

        ctx.reveal(target, actor, mine);
        ctx.reveal(actor, target, theirs);

        if mine <= theirs {
            ctx.kill(actor);
        }
        if mine >= theirs {
            ctx.kill(target);
        }
        Ok(Resolution::Resolved)
    }

    /// Widen the actor's next draw and reshuffle the deck.
    fn sage(state: &mut GameState, actor: PlayerId) -> Resolution {
        let window = state.rules.sage_window;
        state.player_mut(actor).draw_allowance = window;
        let GameState { field, rng, .. } = state;
        field.shuffle_deck(rng);
        Resolution::Resolved
    }

    /// Swap the last card of each hand; both see what they gave away.
    fn spirit(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };

        let (a, t) = ctx.state.players.pair_mut(actor, target);
        let (Some(mine), Some(theirs)) = (a.hand.last().copied(), t.hand.last().copied()) else {
            return Ok(Resolution::MissingCard);
        };
        a.hand.pop();
        t.hand.pop();
        a.receive(theirs);
        t.receive(mine);

        ctx.reveal(actor, target, mine.rank());
        ctx.reveal(target, actor, theirs.rank());
        Ok(Resolution::Resolved)
    }

    /// Force a draw, look at the target's hand, discard one of its cards.
    /// Discarding the Hero eliminates the target.
    fn emperor(ctx: &mut ResolverContext<'_>, actor: PlayerId) -> Result<Resolution, GameError> {
        let Some(target) = ctx.choose_opponent(actor)? else {
            return Ok(Resolution::NoTarget);
        };
        if ctx.state.field.is_deck_empty() {
            return Ok(Resolution::DeckExhausted);
        }

        ctx.forced_draw(target)?;

        let seen = ctx.state.player(target).hand_ranks().to_vec();
        for &rank in &seen {
            ctx.state.player_mut(actor).knowledge.saw(target, rank);
        }

        let discard = ctx.decide_rank(actor, seen, DecisionKind::Trash)?;
        ctx.state.discard_from(target, discard)?;
        if discard == Rank::HERO {
            ctx.kill(target);
        }
        Ok(Resolution::Resolved)
    }
}
