//! Ranks and the ten card kinds.
//!
//! `Rank` is the 1-10 face value; `CardKind` is the tagged variant that
//! selects a card's effect. The mapping between them is one-to-one.

use serde::{Deserialize, Serialize};

/// Face value of a card, 1 to 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// The inert rank: never playable, only discarded by effects.
    pub const HERO: Rank = Rank(10);

    /// Create a rank, returning `None` outside 1..=10.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every rank in ascending order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} outside 1..=10"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// The ten card behaviors, one per rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Boy,
    Soldier,
    Seer,
    Maiden,
    Reaper,
    Noble,
    Sage,
    Spirit,
    Emperor,
    Hero,
}

impl CardKind {
    const ALL: [CardKind; 10] = [
        CardKind::Boy,
        CardKind::Soldier,
        CardKind::Seer,
        CardKind::Maiden,
        CardKind::Reaper,
        CardKind::Noble,
        CardKind::Sage,
        CardKind::Spirit,
        CardKind::Emperor,
        CardKind::Hero,
    ];

    #[must_use]
    pub fn from_rank(rank: Rank) -> Self {
        Self::ALL[rank.value() as usize - 1]
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        Rank(self as u8 + 1)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Boy => "Boy",
            CardKind::Soldier => "Soldier",
            CardKind::Seer => "Seer",
            CardKind::Maiden => "Maiden",
            CardKind::Reaper => "Reaper",
            CardKind::Noble => "Noble",
            CardKind::Sage => "Sage",
            CardKind::Spirit => "Spirit",
            CardKind::Emperor => "Emperor",
            CardKind::Hero => "Hero",
        }
    }

    /// Whether this card may be chosen as a voluntary play.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, CardKind::Hero)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.rank())
    }
}
