//! Card system: ranks, kinds, physical copies and deck composition.
//!
//! ## Key Types
//!
//! - `Rank`: the 1-10 face value
//! - `CardKind`: the tagged behavior selected by a rank
//! - `Card`: one physical copy, with a back-reference to its holder
//! - `Composition`: copies per rank for a game

pub mod composition;
pub mod instance;
pub mod rank;

pub use composition::Composition;
pub use instance::Card;
pub use rank::{CardKind, Rank};
