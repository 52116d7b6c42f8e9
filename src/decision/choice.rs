//! Decision kinds, offered choices, and selections.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::player::PlayerId;

/// Which decision a provider is being asked for.
///
/// Serialized with the names external log tooling expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Pick one card from the top of the deck.
    #[serde(rename = "draw")]
    Draw,
    /// Pick an opponent to target.
    #[serde(rename = "opponentChoice")]
    OpponentChoice,
    /// Pick a card from hand to play.
    #[serde(rename = "play_card")]
    PlayCard,
    /// Soldier: guess a rank the target holds.
    #[serde(rename = "pred")]
    Predict,
    /// Boy/Emperor: pick a card to discard from the target's hand.
    #[serde(rename = "trush")]
    Trash,
}

impl DecisionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DecisionKind::Draw => "draw",
            DecisionKind::OpponentChoice => "opponentChoice",
            DecisionKind::PlayCard => "play_card",
            DecisionKind::Predict => "pred",
            DecisionKind::Trash => "trush",
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opponent offered for targeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpponentOption {
    /// Position in the offered list; what the provider answers with.
    pub index: usize,
    pub player: PlayerId,
}

/// The dense list of legal answers for one decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choices {
    /// Rank-keyed decisions. Duplicates are kept in offer order.
    Ranks(Vec<Rank>),
    Opponents(Vec<OpponentOption>),
}

impl Choices {
    /// Index an opponent list.
    #[must_use]
    pub fn opponents(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Choices::Opponents(
            players
                .into_iter()
                .enumerate()
                .map(|(index, player)| OpponentOption { index, player })
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Choices::Ranks(r) => r.len(),
            Choices::Opponents(o) => o.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The selection that picks the `i`-th offered option.
    #[must_use]
    pub fn selection_at(&self, i: usize) -> Option<Selection> {
        match self {
            Choices::Ranks(r) => r.get(i).copied().map(Selection::Rank),
            Choices::Opponents(o) => o.get(i).map(|opt| Selection::Opponent(opt.index)),
        }
    }

    /// Is `selection` one of the offered options?
    #[must_use]
    pub fn accepts(&self, selection: Selection) -> bool {
        match (self, selection) {
            (Choices::Ranks(r), Selection::Rank(rank)) => r.contains(&rank),
            (Choices::Opponents(o), Selection::Opponent(i)) => o.iter().any(|opt| opt.index == i),
            _ => false,
        }
    }
}

impl std::fmt::Display for Choices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choices::Ranks(r) => {
                let ranks: Vec<_> = r.iter().map(|r| r.value()).collect();
                write!(f, "ranks {ranks:?}")
            }
            Choices::Opponents(o) => {
                let players: Vec<_> = o.iter().map(|opt| opt.player.turn_number()).collect();
                write!(f, "opponents {players:?}")
            }
        }
    }
}

/// A provider's answer: a rank for rank-keyed kinds, an index for
/// `OpponentChoice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Rank(Rank),
    Opponent(usize),
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Rank(r) => write!(f, "rank {r}"),
            Selection::Opponent(i) => write!(f, "opponent #{i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(values: &[u8]) -> Choices {
        Choices::Ranks(values.iter().map(|&v| Rank::new(v).unwrap()).collect())
    }

    #[test]
    fn test_accepts_offered_rank_only() {
        let choices = ranks(&[3, 3, 7]);
        assert!(choices.accepts(Selection::Rank(Rank::new(7).unwrap())));
        assert!(!choices.accepts(Selection::Rank(Rank::new(4).unwrap())));
        assert!(!choices.accepts(Selection::Opponent(0)));
    }

    #[test]
    fn test_opponents_are_indexed_densely() {
        let choices = Choices::opponents([PlayerId::new(3), PlayerId::new(1)]);
        assert_eq!(choices.len(), 2);
        assert!(choices.accepts(Selection::Opponent(1)));
        assert!(!choices.accepts(Selection::Opponent(2)));
        assert_eq!(choices.selection_at(1), Some(Selection::Opponent(1)));
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(serde_json::to_string(&DecisionKind::Trash).unwrap(), "\"trush\"");
        assert_eq!(serde_json::to_string(&DecisionKind::PlayCard).unwrap(), "\"play_card\"");
        assert_eq!(DecisionKind::OpponentChoice.to_string(), "opponentChoice");
    }

    #[test]
    fn test_selection_serde_is_unambiguous() {
        let json = serde_json::to_string(&Selection::Opponent(3)).unwrap();
        assert_eq!(json, r#"{"opponent":3}"#);
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Selection::Opponent(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(ranks(&[1, 10]).to_string(), "ranks [1, 10]");
        assert_eq!(Selection::Opponent(2).to_string(), "opponent #2");
    }
}
