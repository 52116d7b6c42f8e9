//! Card effects.
//!
//! - `ResolverContext`: the state, providers and log an effect works on,
//!   plus the shared primitives (draw, target, reveal, kill, replace)
//! - `EffectResolver`: the ten card behaviors, dispatched on `CardKind`
//! - `Resolution`: what came of a play
//!
//! ## Degrading to no-ops
//!
//! Running out of things is never an error. A draw from an empty deck,
//! a targeting effect with nobody to target, a forced draw after the deck
//! ran out and a second reincarnation all leave the state as it is (apart
//! from the played card having moved). Only a provider answering outside
//! the offered choices, or a broken invariant, aborts the game.

mod context;
mod effect;
mod resolver;
mod targeting;

pub use context::{Providers, ResolverContext};
pub use effect::Resolution;
pub use resolver::EffectResolver;
pub use targeting::{eligible_opponents, Candidates};
