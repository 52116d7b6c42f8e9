//! The game loop.
//!
//! `NotStarted -> InProgress -> Finished`. Starting deals one card to every
//! player through a normal draw. Each round walks the turn order; before
//! every player's turn the judge decides whether the game is over.
//! Eliminated players are skipped. A turn is a draw followed, if the hand
//! then holds more than one card, by playing one non-Hero card.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{GameError, GameState, PlayerId, PlayerMap};
use crate::decision::DecisionKind;
use crate::effects::{EffectResolver, Providers, Resolution, ResolverContext};
use crate::rules::{judge, GameResult};
use crate::training::record::{GameLog, GameRecord, SeatInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// One game: state, the seated providers and the decision log.
pub struct Game {
    state: GameState,
    providers: Providers,
    log: GameLog,
    seats: PlayerMap<SeatInfo>,
    phase: Phase,
    result: Option<GameResult>,
    seed: u64,
    turns: usize,
}

impl Game {
    pub(crate) fn new(state: GameState, providers: Providers, seats: PlayerMap<SeatInfo>, seed: u64) -> Self {
        let log = GameLog::new(state.player_count());
        Self {
            state,
            providers,
            log,
            seats,
            phase: Phase::NotStarted,
            result: None,
            seed,
            turns: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for setting up scenarios before `start`.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<SeatInfo> {
        &self.seats
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Turns taken so far, skipped players excluded.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    fn context(&mut self) -> ResolverContext<'_> {
        ResolverContext::new(&mut self.state, &mut self.providers, &mut self.log)
    }

    /// Deal one card to every player, in turn order.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.phase = Phase::InProgress;

        let order: Vec<PlayerId> = self.state.turn_order().collect();
        let mut ctx = self.context();
        for player in order {
            ctx.draw(player)?;
        }
        debug!("dealt {} players, {} cards left", self.state.player_count(), self.state.field.deck_len());
        Ok(())
    }

    /// One turn of `player`: draw, then play if there is a choice.
    ///
    /// Returns the resolution of the played card, or `None` when nothing
    /// was played.
    pub fn play_turn(&mut self, player: PlayerId) -> Result<Option<Resolution>, GameError> {
        self.turns += 1;
        let mut ctx = self.context();
        ctx.draw(player)?;

        let hand = ctx.state.player(player).hand_ranks();
        if hand.len() < 2 {
            return Ok(None);
        }

        let playable: Vec<Rank> = hand.into_iter().filter(|r| *r != Rank::HERO).collect();
        if playable.is_empty() {
            return Ok(None);
        }

        let rank = ctx.decide_rank(player, playable, DecisionKind::PlayCard)?;
        let resolution = EffectResolver::play(&mut ctx, player, rank)?;

        if cfg!(debug_assertions) {
            self.state.check_conservation()?;
        }
        Ok(Some(resolution))
    }

    /// Play to the end and return the result.
    ///
    /// Starts the game if needed. Calling again after the end returns the
    /// same result.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        if let Some(result) = &self.result {
            return Ok(result.clone());
        }
        if self.phase == Phase::NotStarted {
            self.start()?;
        }

        let order: Vec<PlayerId> = self.state.turn_order().collect();
        loop {
            for &player in &order {
                if let Some(result) = judge(&self.state)? {
                    return Ok(self.finish(result));
                }
                if !self.state.player(player).is_alive() {
                    continue;
                }
                self.play_turn(player)?;
            }
        }
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        self.log.close(&result);
        self.phase = Phase::Finished;
        info!(
            "game {} over after {} turns: {:?}, winners {:?}",
            self.seed, self.turns, result.reason, result.winners
        );
        self.result = Some(result.clone());
        result
    }

    /// The finished game's record. `None` before the game is over.
    #[must_use]
    pub fn into_record(self) -> Option<GameRecord> {
        let result = self.result?;
        Some(GameRecord {
            seed: self.seed,
            seats: self.seats,
            log: self.log,
            result,
        })
    }

    /// The decision log, finished or not.
    #[must_use]
    pub fn into_log(self) -> GameLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{numbered, FirstChoiceProvider, RandomProvider};
    use crate::game::GameBuilder;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    fn first_choice(n: usize) -> GameBuilder {
        (0..n).fold(GameBuilder::new(n).fixed_seating(), |b, _| b.seat(FirstChoiceProvider, numbered("p")))
    }

    #[test]
    fn test_start_deals_one_each() {
        let mut game = first_choice(3).build(5).unwrap();
        game.start().unwrap();
        assert_eq!(game.phase(), Phase::InProgress);
        for p in game.state().players.values() {
            assert_eq!(p.hand.len(), 1);
        }
        assert_eq!(game.state().field.deck_len(), 17 - 3);
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_run_finishes_and_tags_log() {
        let mut game = first_choice(2).build(8).unwrap();
        let result = game.run().unwrap();
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.run().unwrap(), result);

        let record = game.into_record().unwrap();
        for (_, log) in record.log.players() {
            assert!(log.outcome.is_some());
        }
    }

    #[test]
    fn test_showdown_from_stacked_deck() {
        // Deal 6 and 9, nothing left to draw: straight to the showdown.
        let mut game = first_choice(2)
            .stacked_deck(vec![rank(6), rank(9)], Some(rank(1)))
            .build(0)
            .unwrap();
        let result = game.run().unwrap();
        assert_eq!(result.winners, vec![PlayerId::new(2)]);
        assert_eq!(result.losers, vec![PlayerId::new(1)]);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_hero_never_offered_for_play() {
        // Player 1 holds the Hero and draws a Maiden: only the Maiden is legal.
        let mut game = first_choice(2)
            .stacked_deck(vec![rank(10), rank(3), rank(4), rank(5)], None)
            .build(0)
            .unwrap();
        game.start().unwrap();
        game.play_turn(PlayerId::new(1)).unwrap();

        let plays: Vec<_> = game
            .log()
            .player(PlayerId::new(1))
            .of_kind(DecisionKind::PlayCard)
            .collect();
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].choices.len(), 1);
        assert_eq!(game.state().player(PlayerId::new(1)).hand_ranks().as_slice(), &[rank(10)]);
    }

    #[test]
    fn test_random_games_terminate() {
        for seed in 0..20 {
            let mut game = (0..4)
                .fold(GameBuilder::new(4), |b, i| b.seat(RandomProvider::new(seed * 10 + i), numbered("cpu")))
                .build(seed)
                .unwrap();
            let result = game.run().unwrap();
            assert_eq!(result.winners.len() + result.losers.len(), 4);
            game.state().check_conservation().unwrap();
        }
    }
}
