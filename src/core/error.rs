//! Engine error type.
//!
//! Exhausted resources (empty deck, no eligible opponent) are not errors;
//! effects degrade to no-ops instead. Everything here aborts the current
//! game and is reported by the session as a failed run.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Rank;
use crate::decision::{Choices, DecisionKind, Selection};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{player} answered {selection} to a {kind} decision offering {choices}")]
    InvalidSelection {
        player: PlayerId,
        kind: DecisionKind,
        choices: Choices,
        selection: Selection,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} seats, got {actual}")]
    SeatCount { expected: usize, actual: usize },

    #[error("{player} holds no card of rank {rank}")]
    CardNotInHand { player: PlayerId, rank: Rank },

    #[error("{0} reached the showdown with an empty hand")]
    EmptyHand(PlayerId),

    #[error("card conservation violated: expected {expected} cards, found {found}")]
    Conservation { expected: usize, found: usize },

    #[error("decision provider panicked: {0}")]
    ProviderPanic(String),

    #[error("game already started")]
    AlreadyStarted,
}
