//! The run boundary.
//!
//! A session builds one game, plays it to the end and turns every fault
//! (invalid configuration, invalid provider answer, broken invariant,
//! provider panic) into a `RunFailure` carrying the log so far. Nothing
//! unwinds past this point.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::warn;

use crate::core::GameError;
use crate::training::record::{GameLog, GameRecord};

use super::builder::GameBuilder;

/// A failed run: what went wrong and what had been logged by then.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunFailure {
    pub error: GameError,
    pub seed: u64,
    pub partial_log: GameLog,
}

impl std::fmt::Display for RunFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "game {} failed after {} decisions: {}",
            self.seed,
            self.partial_log.len(),
            self.error
        )
    }
}

impl std::error::Error for RunFailure {}

/// Build and play exactly one game.
pub fn run_session(builder: GameBuilder, seed: u64) -> Result<GameRecord, RunFailure> {
    let player_count = builder.player_count();
    let mut game = builder.build(seed).map_err(|error| RunFailure {
        error,
        seed,
        partial_log: GameLog::new(player_count),
    })?;

    let outcome = catch_unwind(AssertUnwindSafe(|| game.run()));
    let error = match outcome {
        Ok(Ok(_)) => None,
        Ok(Err(error)) => Some(error),
        Err(payload) => Some(GameError::ProviderPanic(panic_message(payload.as_ref()))),
    };

    match error {
        None => game.into_record().ok_or_else(|| RunFailure {
            error: GameError::InvalidConfig("game ended without a result".to_string()),
            seed,
            partial_log: GameLog::new(player_count),
        }),
        Some(error) => {
            warn!("game {seed} aborted: {error}");
            Err(RunFailure {
                error,
                seed,
                partial_log: game.into_log(),
            })
        }
    }
}

impl GameBuilder {
    /// Shorthand for [`run_session`].
    pub fn run(self, seed: u64) -> Result<GameRecord, RunFailure> {
        run_session(self, seed)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
