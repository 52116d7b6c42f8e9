//! Game construction.

use crate::cards::{Composition, Rank};
use crate::core::{GameConfig, GameError, GameRng, GameState, PlayerId, PlayerMap, PlayerState, RuleSet};
use crate::decision::{DecisionProvider, NameProvider};
use crate::effects::Providers;
use crate::training::record::SeatInfo;
use crate::zones::Field;

use super::engine::Game;

/// A registered agent: its provider and display name.
pub struct Seat {
    pub provider: Box<dyn DecisionProvider>,
    pub name: String,
}

/// Builder for a `Game`.
///
/// Seats are registered in caller order. At build time they are shuffled
/// into turn order (unless seating is fixed), the composition is shuffled
/// into a deck and the reincarnation card is set aside.
///
/// ```
/// use xeno_engine::decision::{numbered, RandomProvider};
/// use xeno_engine::game::GameBuilder;
///
/// let mut game = GameBuilder::new(3)
///     .seat(RandomProvider::new(1), numbered("cpu"))
///     .seat(RandomProvider::new(2), numbered("cpu"))
///     .seat(RandomProvider::new(3), numbered("cpu"))
///     .build(42)
///     .unwrap();
///
/// let result = game.run().unwrap();
/// assert_eq!(result.winners.len() + result.losers.len(), 3);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<Seat>,
    stacked: Option<(Vec<Rank>, Option<Rank>)>,
    fixed_seating: bool,
}

impl GameBuilder {
    /// A builder for `player_count` players with the reference composition.
    pub fn new(player_count: usize) -> Self {
        Self::from_config(GameConfig::new(player_count))
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            seats: Vec::new(),
            stacked: None,
            fixed_seating: false,
        }
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn composition(mut self, composition: Composition) -> Self {
        self.config.composition = composition;
        self
    }

    /// Register the next seat. The name provider is asked once, with the
    /// seat's 0-based index.
    pub fn seat(self, provider: impl DecisionProvider + 'static, mut names: impl NameProvider) -> Self {
        let name = names.name(self.seats.len());
        self.seat_boxed(Box::new(provider), name)
    }

    pub fn seat_boxed(mut self, provider: Box<dyn DecisionProvider>, name: impl Into<String>) -> Self {
        self.seats.push(Seat {
            provider,
            name: name.into(),
        });
        self
    }

    /// Use this exact deck (top card first) and reincarnation card instead
    /// of shuffling the composition.
    pub fn stacked_deck(mut self, deck: Vec<Rank>, reincarnation: Option<Rank>) -> Self {
        self.stacked = Some((deck, reincarnation));
        self
    }

    /// Keep registration order as turn order.
    pub fn fixed_seating(mut self) -> Self {
        self.fixed_seating = true;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    /// Validate, seat and shuffle. The game is not started yet.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.config.validate()?;
        let n = self.config.player_count;
        if self.seats.len() != n {
            return Err(GameError::SeatCount {
                expected: n,
                actual: self.seats.len(),
            });
        }

        let mut rng = GameRng::new(seed);

        // order[turn position] = seat index
        let mut order: Vec<usize> = (0..n).collect();
        if !self.fixed_seating {
            rng.shuffle(&mut order);
        }

        let field = match self.stacked {
            Some((deck, reincarnation)) => Field::stacked(deck, reincarnation, n),
            None => Field::shuffled(&self.config.composition, n, &mut rng),
        };

        let mut placed: Vec<(usize, Seat)> = self
            .seats
            .into_iter()
            .enumerate()
            .map(|(seat, s)| (order.iter().position(|&o| o == seat).unwrap_or(seat), s))
            .collect();
        placed.sort_by_key(|(position, _)| *position);

        let mut players = Vec::with_capacity(n);
        let mut providers = Vec::with_capacity(n);
        let mut seats = Vec::with_capacity(n);
        for (position, seat) in placed {
            let id = PlayerId::from_index(position);
            let seat_index = order[position];
            players.push(PlayerState::new(id, seat_index, seat.name.clone()));
            seats.push(SeatInfo {
                seat: seat_index,
                name: seat.name,
            });
            providers.push(seat.provider);
        }

        let state = GameState::new(PlayerMap::from_vec(players), field, self.config.rules, rng);
        let providers: Providers = PlayerMap::from_vec(providers);
        Ok(Game::new(state, providers, PlayerMap::from_vec(seats), seed))
    }
}
