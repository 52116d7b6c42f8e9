//! How a played card's effect came out.

use serde::{Deserialize, Serialize};

/// Outcome of resolving one card effect.
///
/// Only `Resolved` means the card's specific logic ran. The other
/// variants are the silent no-ops the rules allow; the card has still
/// left the hand (except for `Inert`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The effect ran.
    Resolved,
    /// Boy played while no other Boy lay in any played pile.
    Inactive,
    /// No opponent could be targeted.
    NoTarget,
    /// A forced draw found the deck empty.
    DeckExhausted,
    /// Noble or Spirit found the actor or target without a card.
    MissingCard,
    /// The Hero does nothing.
    Inert,
}

impl Resolution {
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self == Resolution::Resolved
    }
}
