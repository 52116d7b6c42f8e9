//! Opponent targeting.
//!
//! A player is a legal target when it is not the actor and it is
//! targetable (no Maiden protection pending). Candidates are listed in
//! turn order; the provider answers with a position in that list.

use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Candidate targets, in turn order.
pub type Candidates = SmallVec<[PlayerId; 8]>;

/// Every other player whose targetable flag is set.
///
/// Elimination does not clear the flag, so an eliminated player stays
/// targetable until it is shielded.
#[must_use]
pub fn eligible_opponents(state: &GameState, actor: PlayerId) -> Candidates {
    state
        .players
        .iter()
        .filter(|(id, p)| *id != actor && p.targetable)
        .map(|(id, _)| id)
        .collect()
}
