//! Termination judge.
//!
//! Checked before every turn:
//! - fewer than two players alive: the survivors win, everybody else loses
//! - two or more alive and the deck is empty: showdown on the single card
//!   every player holds, eliminated or not; a strict maximum wins, any tie
//!   for the maximum means everybody loses
//! - otherwise the game continues

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Per-player outcome tag appended to the decision log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// At most one player survived.
    LastStanding,
    /// The deck ran out and one player held the highest card.
    Showdown,
    /// The deck ran out and the highest card was shared.
    TiedShowdown,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winners in turn order.
    pub winners: Vec<PlayerId>,
    /// Losers in turn order.
    pub losers: Vec<PlayerId>,
    pub reason: EndReason,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    #[must_use]
    pub fn outcome(&self, player: PlayerId) -> Outcome {
        if self.is_winner(player) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

/// Decide whether the game is over.
///
/// Returns `Ok(None)` while the game continues. A player reaching the
/// showdown without a card is an engine fault.
pub fn judge(state: &GameState) -> Result<Option<GameResult>, GameError> {
    let alive = state.alive_players();

    if alive.len() < 2 {
        let losers = state.turn_order().filter(|p| !alive.contains(p)).collect();
        return Ok(Some(GameResult {
            winners: alive,
            losers,
            reason: EndReason::LastStanding,
        }));
    }

    if !state.field.is_deck_empty() {
        return Ok(None);
    }

    let mut contenders: Vec<(PlayerId, Rank)> = Vec::with_capacity(state.player_count());
    for player in state.turn_order() {
        let card = state
            .player(player)
            .hand
            .first()
            .ok_or(GameError::EmptyHand(player))?;
        contenders.push((player, card.rank()));
    }

    let best = contenders.iter().map(|&(_, r)| r).max();
    let at_best: Vec<PlayerId> = contenders
        .iter()
        .filter(|&&(_, r)| Some(r) == best)
        .map(|&(p, _)| p)
        .collect();

    if at_best.len() == 1 {
        let winner = at_best[0];
        Ok(Some(GameResult {
            winners: vec![winner],
            losers: state.turn_order().filter(|&p| p != winner).collect(),
            reason: EndReason::Showdown,
        }))
    } else {
        Ok(Some(GameResult {
            winners: Vec::new(),
            losers: state.turn_order().collect(),
            reason: EndReason::TiedShowdown,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{GameRng, PlayerMap, PlayerState, RuleSet};
    use crate::zones::Field;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    /// One card per listed hand (`None` leaves the hand empty).
    fn state_with(deck: Vec<u8>, hands: &[Option<u8>]) -> GameState {
        let players = PlayerMap::new(hands.len(), |id| PlayerState::new(id, id.index(), "p"));
        let field = Field::stacked(deck.into_iter().map(rank).collect(), None, hands.len());
        let mut state = GameState::new(players, field, RuleSet::default(), GameRng::new(0));
        for (i, hand) in hands.iter().enumerate() {
            if let Some(v) = hand {
                state
                    .player_mut(PlayerId::from_index(i))
                    .receive(Card::from_rank(rank(*v)));
            }
        }
        state
    }

    #[test]
    fn test_continues_while_deck_and_players_remain() {
        let state = state_with(vec![3], &[Some(1), Some(2)]);
        assert_eq!(judge(&state).unwrap(), None);
    }

    #[test]
    fn test_showdown_strict_max_wins() {
        let state = state_with(vec![], &[Some(6), Some(9)]);
        let result = judge(&state).unwrap().unwrap();
        assert_eq!(result.winners, vec![PlayerId::new(2)]);
        assert_eq!(result.losers, vec![PlayerId::new(1)]);
        assert_eq!(result.reason, EndReason::Showdown);
        assert_eq!(result.outcome(PlayerId::new(1)), Outcome::Lose);
    }

    #[test]
    fn test_showdown_tie_for_max_everyone_loses() {
        let state = state_with(vec![], &[Some(5), Some(5)]);
        let result = judge(&state).unwrap().unwrap();
        assert!(result.winners.is_empty());
        assert_eq!(result.losers.len(), 2);
        assert_eq!(result.reason, EndReason::TiedShowdown);

        // A tie below the max does not matter.
        let state = state_with(vec![], &[Some(3), Some(3), Some(7)]);
        let result = judge(&state).unwrap().unwrap();
        assert_eq!(result.winners, vec![PlayerId::new(3)]);
    }

    #[test]
    fn test_eliminated_players_enter_showdown() {
        let mut state = state_with(vec![], &[Some(10), Some(4), Some(2)]);
        state.player_mut(PlayerId::new(1)).eliminate();
        let result = judge(&state).unwrap().unwrap();
        assert_eq!(result.winners, vec![PlayerId::new(1)]);
        assert_eq!(result.losers, vec![PlayerId::new(2), PlayerId::new(3)]);
        assert_eq!(result.reason, EndReason::Showdown);

        // An eliminated player can also force a tie.
        let mut state = state_with(vec![], &[Some(6), Some(6), Some(2)]);
        state.player_mut(PlayerId::new(2)).eliminate();
        let result = judge(&state).unwrap().unwrap();
        assert!(result.winners.is_empty());
        assert_eq!(result.reason, EndReason::TiedShowdown);
    }

    #[test]
    fn test_last_standing() {
        let mut state = state_with(vec![1, 2], &[Some(1), Some(2), Some(3)]);
        state.player_mut(PlayerId::new(1)).eliminate();
        state.player_mut(PlayerId::new(3)).eliminate();
        let result = judge(&state).unwrap().unwrap();
        assert_eq!(result.winners, vec![PlayerId::new(2)]);
        assert_eq!(result.reason, EndReason::LastStanding);

        state.player_mut(PlayerId::new(2)).eliminate();
        let result = judge(&state).unwrap().unwrap();
        assert!(result.winners.is_empty());
        assert_eq!(result.losers.len(), 3);
    }

    #[test]
    fn test_empty_hand_at_showdown_is_a_fault() {
        let state = state_with(vec![], &[Some(4), None]);
        assert_eq!(judge(&state), Err(GameError::EmptyHand(PlayerId::new(2))));
    }

    #[test]
    fn test_outcome_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Outcome::Win).unwrap(), "\"win\"");
        assert_eq!(serde_json::to_string(&Outcome::Lose).unwrap(), "\"lose\"");
    }
}
