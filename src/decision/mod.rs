//! The decision-provider boundary.
//!
//! Every choice in the game (which card to take from the deck, which
//! card to play, whom to target, what to guess, what to discard) is
//! delegated to the acting player's `DecisionProvider`. The engine hands
//! it a `GameView`, a `Choices` list and a `DecisionKind`, and validates
//! the returned `Selection`.

mod choice;
mod provider;
mod view;

pub use choice::{Choices, DecisionKind, OpponentOption, Selection};
pub use provider::{
    numbered, DecisionProvider, FirstChoiceProvider, NameProvider, RandomProvider, ScriptedProvider,
};
pub use view::{GameView, OpponentView, VIEW_VERSION};
