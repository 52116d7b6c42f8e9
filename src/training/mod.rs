//! Decision records and batch self-play.
//!
//! ## Overview
//!
//! - **GameLog**: per-player decision logs written by the engine as it asks
//! - **GameRecord**: a finished game's log, seating and result
//! - **RecordBuffer**: bounded FIFO of records, with batch sampling
//! - **SelfPlayWorker**: runs batches of games and collects their records
//!
//! ## Usage
//!
//! ```
//! use xeno_engine::training::{RecordBuffer, SelfPlayConfig, SelfPlayWorker};
//!
//! let worker = SelfPlayWorker::new(SelfPlayConfig::new().with_games(10).with_player_count(4));
//! let mut buffer = RecordBuffer::new(100);
//! let report = worker.run(&mut buffer);
//!
//! assert_eq!(report.games_played, 10);
//! let samples = buffer.sample_batch(32, 7);
//! assert!(samples.len() <= 32);
//! ```

pub mod record;
pub mod self_play;

pub use record::{DecisionRecord, GameLog, GameRecord, LabelledDecision, PlayerLog, RecordBuffer, SeatInfo};
pub use self_play::{ProviderFactory, SelfPlayConfig, SelfPlayReport, SelfPlayWorker};
