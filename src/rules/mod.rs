//! Game termination and results.
//!
//! The judge is consulted before every turn and is the only place that
//! decides winners and losers.

pub mod judge;

pub use judge::{judge, EndReason, GameResult, Outcome};
