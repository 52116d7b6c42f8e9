//! Physical card copies.
//!
//! A `Card` is allocated once per physical copy and only ever moves
//! between the deck, hands, played piles and the reincarnation slot.

use serde::{Deserialize, Serialize};

use super::rank::{CardKind, Rank};
use crate::core::player::PlayerId;

/// One physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,

    /// Last player to hold this card. A back-reference, not ownership.
    pub holder: Option<PlayerId>,
}

impl Card {
    /// Create an unheld card.
    #[must_use]
    pub fn new(kind: CardKind) -> Self {
        Self { kind, holder: None }
    }

    #[must_use]
    pub fn from_rank(rank: Rank) -> Self {
        Self::new(CardKind::from_rank(rank))
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.kind.rank()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
