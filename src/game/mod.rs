//! Running games.
//!
//! - `GameBuilder`: configuration, seats and seeding
//! - `Game`: the turn loop
//! - `run_session`: one complete game behind a fault boundary

mod builder;
mod engine;
mod session;

pub use builder::{GameBuilder, Seat};
pub use engine::{Game, Phase};
pub use session::{run_session, RunFailure};
