//! Batch self-play.
//!
//! Runs many independent games with generated providers, keeps the
//! successful records in a `RecordBuffer` and tallies wins per seat.
//! Failed runs are counted and skipped.

use log::{info, warn};

use crate::cards::Composition;
use crate::core::{GameConfig, RuleSet, MIN_PLAYERS};
use crate::decision::{numbered, DecisionProvider, NameProvider, RandomProvider};
use crate::game::{run_session, GameBuilder, RunFailure};

use super::record::{GameRecord, RecordBuffer};

/// Configuration for a self-play batch.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub games: usize,

    /// Game `i` is seeded with `seed_offset + i`.
    pub seed_offset: u64,

    pub player_count: usize,

    pub rules: RuleSet,

    pub composition: Composition,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
            player_count: MIN_PLAYERS,
            rules: RuleSet::default(),
            composition: Composition::reference(),
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// The seed of game `index`.
    #[must_use]
    pub fn seed_for(&self, index: usize) -> u64 {
        self.seed_offset.wrapping_add(index as u64)
    }

    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.player_count)
            .with_composition(self.composition.clone())
            .with_rules(self.rules.clone())
    }
}

/// Makes the provider for `seat` in the game seeded with `seed`.
pub type ProviderFactory = Box<dyn Fn(usize, u64) -> Box<dyn DecisionProvider>>;

/// Summary of a batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelfPlayReport {
    pub games_played: usize,
    /// Runs that ended in a fault.
    pub failures: usize,
    /// Finished games where nobody won.
    pub no_winner: usize,
    /// Wins by registration seat.
    pub wins_by_seat: Vec<usize>,
    pub decisions: usize,
}

impl SelfPlayReport {
    fn new(player_count: usize) -> Self {
        Self {
            wins_by_seat: vec![0; player_count],
            ..Self::default()
        }
    }

    fn record(&mut self, record: &GameRecord) {
        self.games_played += 1;
        self.decisions += record.log.len();
        if record.winners().is_empty() {
            self.no_winner += 1;
        }
        for &winner in record.winners() {
            if let Some(slot) = self.wins_by_seat.get_mut(record.seats[winner].seat) {
                *slot += 1;
            }
        }
    }

    /// Share of finished games won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: usize) -> f64 {
        let finished = self.games_played - self.failures;
        if finished == 0 {
            return 0.0;
        }
        self.wins_by_seat.get(seat).copied().unwrap_or(0) as f64 / finished as f64
    }
}

/// Runs self-play batches.
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
    factory: ProviderFactory,
}

impl SelfPlayWorker {
    /// A worker seating a seeded `RandomProvider` at every seat.
    pub fn new(config: SelfPlayConfig) -> Self {
        Self {
            config,
            factory: Box::new(|seat: usize, seed: u64| -> Box<dyn DecisionProvider> {
                let provider_seed = seed.wrapping_mul(31).wrapping_add(seat as u64 + 1);
                Box::new(RandomProvider::new(provider_seed))
            }),
        }
    }

    /// Seat providers made by `factory` instead.
    pub fn with_factory(mut self, factory: impl Fn(usize, u64) -> Box<dyn DecisionProvider> + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one game with the given seed.
    pub fn play_game(&self, seed: u64) -> Result<GameRecord, RunFailure> {
        let mut names = numbered("cpu");
        let builder = (0..self.config.player_count).fold(
            GameBuilder::from_config(self.config.game_config()),
            |b, seat| b.seat_boxed((self.factory)(seat, seed), names.name(seat)),
        );
        run_session(builder, seed)
    }

    /// Play the whole batch into `buffer`.
    pub fn run(&self, buffer: &mut RecordBuffer) -> SelfPlayReport {
        let mut report = SelfPlayReport::new(self.config.player_count);

        for index in 0..self.config.games {
            let seed = self.config.seed_for(index);
            match self.play_game(seed) {
                Ok(record) => {
                    report.record(&record);
                    buffer.push(record);
                }
                Err(failure) => {
                    warn!("self-play: {failure}");
                    report.games_played += 1;
                    report.failures += 1;
                }
            }
        }

        info!(
            "self-play: {} games, {} failed, {} without a winner, wins by seat {:?}",
            report.games_played, report.failures, report.no_winner, report.wins_by_seat
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{FirstChoiceProvider, ScriptedProvider, Selection};

    #[test]
    fn test_config_builder() {
        let config = SelfPlayConfig::new()
            .with_games(5)
            .with_seed_offset(100)
            .with_player_count(4);
        assert_eq!(config.games, 5);
        assert_eq!(config.seed_for(3), 103);
        assert_eq!(config.player_count, 4);
    }

    #[test]
    fn test_batch_fills_buffer() {
        let worker = SelfPlayWorker::new(SelfPlayConfig::new().with_games(12).with_player_count(3));
        let mut buffer = RecordBuffer::new(8);
        let report = worker.run(&mut buffer);

        assert_eq!(report.games_played, 12);
        assert_eq!(report.failures, 0);
        assert_eq!(buffer.len(), 8);
        let wins: usize = report.wins_by_seat.iter().sum();
        assert!(wins + report.no_winner >= 12 - report.failures);
        assert!(report.decisions > 0);
    }

    #[test]
    fn test_batch_is_reproducible() {
        let config = SelfPlayConfig::new().with_games(4).with_seed_offset(77);
        let mut a = RecordBuffer::new(4);
        let mut b = RecordBuffer::new(4);
        SelfPlayWorker::new(config.clone()).run(&mut a);
        SelfPlayWorker::new(config).run(&mut b);

        let a: Vec<_> = a.iter().cloned().collect();
        let b: Vec<_> = b.iter().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_failed_runs_are_skipped() {
        let worker = SelfPlayWorker::new(SelfPlayConfig::new().with_games(3)).with_factory(|seat, _| {
            if seat == 0 {
                Box::new(ScriptedProvider::new([Selection::Opponent(7)]))
            } else {
                Box::new(FirstChoiceProvider)
            }
        });
        let mut buffer = RecordBuffer::new(10);
        let report = worker.run(&mut buffer);

        assert_eq!(report.failures, 3);
        assert!(buffer.is_empty());
        assert_eq!(report.win_rate(0), 0.0);
    }
}
