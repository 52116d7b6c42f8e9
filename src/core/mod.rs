//! Core engine types: players, knowledge, state, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, RuleSet, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use knowledge::{Knowledge, Prediction, Sighting};
pub use player::{Hand, PlayerId, PlayerMap, PlayerState};
pub use rng::GameRng;
pub use state::GameState;
