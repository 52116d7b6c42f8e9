//! Game configuration.
//!
//! - `RuleSet`: rule variants where earlier revisions of the game disagreed
//! - `GameConfig`: player count, deck composition and rule set
//!
//! Both use the builder pattern and are validated once, when a game is built.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::Composition;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game supports.
pub const MAX_PLAYERS: usize = 8;

/// Rule variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// A Soldier that predicts the Hero (10) against a target not holding
    /// it still runs the reincarnation replacement on that target.
    pub soldier_hero_replaces: bool,

    /// How many top-of-deck cards a draw offers after a Sage.
    pub sage_window: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            soldier_hero_replaces: true,
            sage_window: 3,
        }
    }
}

impl RuleSet {
    pub fn with_soldier_hero_replaces(mut self, enabled: bool) -> Self {
        self.soldier_hero_replaces = enabled;
        self
    }

    pub fn with_sage_window(mut self, window: usize) -> Self {
        self.sage_window = window;
        self
    }
}

/// Complete configuration of one game.
///
/// ```
/// use xeno_engine::core::{GameConfig, RuleSet};
///
/// let config = GameConfig::new(3).with_rules(RuleSet::default().with_sage_window(2));
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(1).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    pub composition: Composition,
    pub rules: RuleSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}

impl GameConfig {
    /// Reference composition and default rules for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            composition: Composition::reference(),
            rules: RuleSet::default(),
        }
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check the configuration can produce a playable game.
    ///
    /// After setting the reincarnation card aside and dealing one card to
    /// everybody, at least one card must remain to draw.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count {} outside {MIN_PLAYERS}..={MAX_PLAYERS}",
                self.player_count
            )));
        }

        let total = self.composition.total();
        if total < self.player_count + 2 {
            return Err(GameError::InvalidConfig(format!(
                "{total} cards cannot seat {} players",
                self.player_count
            )));
        }

        if self.rules.sage_window == 0 {
            return Err(GameError::InvalidConfig("sage window must be at least 1".to_string()));
        }

        Ok(())
    }
}
