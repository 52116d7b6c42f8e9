//! # xeno-engine
//!
//! A deterministic engine for a hidden-information elimination card game
//! for 2 to 8 players.
//!
//! ## Design Principles
//!
//! 1. **Providers decide, the engine rules**: every choice goes through a
//!    `DecisionProvider` that sees only a filtered `GameView`. The engine
//!    owns all state, validates every answer and logs it.
//!
//! 2. **N-Player First**: turn order, targeting and the showdown work for
//!    any supported player count. Nothing assumes two players.
//!
//! 3. **Deterministic**: one seeded `GameRng` drives seating, shuffles and
//!    random discards. Same seed and same answers give the same game.
//!
//! ## Modules
//!
//! - `core`: players, knowledge, state, RNG, configuration, errors
//! - `cards`: ranks, card kinds, deck composition
//! - `zones`: the field (deck, played piles, reincarnation card)
//! - `decision`: views, choices and the provider contract
//! - `effects`: the ten card behaviors
//! - `rules`: termination and results
//! - `game`: builder, turn loop and the session boundary
//! - `training`: decision records and batch self-play

pub mod cards;
pub mod core;
pub mod decision;
pub mod effects;
pub mod game;
pub mod rules;
pub mod training;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, GameState, PlayerId, PlayerMap, PlayerState, RuleSet};

pub use crate::cards::{Card, CardKind, Composition, Rank};

pub use crate::zones::Field;

pub use crate::decision::{
    Choices, DecisionKind, DecisionProvider, FirstChoiceProvider, GameView, NameProvider, RandomProvider,
    ScriptedProvider, Selection,
};

pub use crate::effects::{EffectResolver, Resolution, ResolverContext};

pub use crate::rules::{EndReason, GameResult, Outcome};

pub use crate::game::{run_session, Game, GameBuilder, Phase, RunFailure};

pub use crate::training::{GameLog, GameRecord, RecordBuffer, SelfPlayConfig, SelfPlayWorker};
