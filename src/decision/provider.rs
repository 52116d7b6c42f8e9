//! The decision-provider contract and the built-in providers.
//!
//! A provider answers every decision of one player. The engine calls it
//! synchronously and waits for the answer; a provider may block for as
//! long as it likes (human input, model inference).
//!
//! ## Contract
//!
//! - `choices` is never empty.
//! - The answer must be one of `choices` (a rank for rank-keyed kinds,
//!   an index for `OpponentChoice`). Anything else aborts the game.
//!
//! Closures with the right signature are providers too:
//!
//! ```
//! use xeno_engine::decision::{Choices, DecisionKind, DecisionProvider, GameView, Selection};
//!
//! fn boxed(p: impl DecisionProvider + 'static) -> Box<dyn DecisionProvider> {
//!     Box::new(p)
//! }
//!
//! let _always_first = boxed(|_: &GameView, choices: &Choices, _: DecisionKind| choices.pick(0));
//! ```

use std::collections::VecDeque;

use super::choice::{Choices, DecisionKind, Selection};
use super::view::GameView;
use crate::cards::Rank;
use crate::core::rng::GameRng;

/// Supplies all of one player's choices.
pub trait DecisionProvider {
    fn decide(&mut self, view: &GameView, choices: &Choices, kind: DecisionKind) -> Selection;
}

impl<F> DecisionProvider for F
where
    F: FnMut(&GameView, &Choices, DecisionKind) -> Selection,
{
    fn decide(&mut self, view: &GameView, choices: &Choices, kind: DecisionKind) -> Selection {
        self(view, choices, kind)
    }
}

/// Supplies a player's display name, given the 0-based seat index.
pub trait NameProvider {
    fn name(&mut self, seat: usize) -> String;
}

impl<F> NameProvider for F
where
    F: FnMut(usize) -> String,
{
    fn name(&mut self, seat: usize) -> String {
        self(seat)
    }
}

/// Names seats `"{prefix}1"`, `"{prefix}2"`, ...
pub fn numbered(prefix: impl Into<String>) -> impl NameProvider {
    let prefix = prefix.into();
    move |seat: usize| format!("{prefix}{}", seat + 1)
}

impl Choices {
    /// The selection for the `i`-th option.
    ///
    /// An out-of-range `i` yields a selection no list accepts, so the
    /// engine rejects it instead of guessing.
    #[must_use]
    pub fn pick(&self, i: usize) -> Selection {
        self.selection_at(i)
            .unwrap_or(Selection::Opponent(usize::MAX))
    }
}

/// Always answers with the first offered option.
#[derive(Clone, Debug, Default)]
pub struct FirstChoiceProvider;

impl DecisionProvider for FirstChoiceProvider {
    fn decide(&mut self, _view: &GameView, choices: &Choices, _kind: DecisionKind) -> Selection {
        choices.pick(0)
    }
}

/// Picks uniformly among the offered options.
///
/// Seeded, so a game of random providers is reproducible.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: GameRng,
}

impl RandomProvider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl DecisionProvider for RandomProvider {
    fn decide(&mut self, _view: &GameView, choices: &Choices, _kind: DecisionKind) -> Selection {
        let i = self.rng.gen_range_usize(0..choices.len().max(1));
        choices.pick(i)
    }
}

/// Replays queued answers in order, then falls back to the first option.
///
/// Scripted answers are returned verbatim, valid or not, which makes
/// this the tool for driving exact scenarios and fault paths in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: VecDeque<Selection>,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Queue a rank answer. Panics on a value outside 1..=10.
    #[must_use]
    pub fn then_rank(mut self, value: u8) -> Self {
        let rank = Rank::new(value).unwrap_or_else(|| panic!("rank {value} outside 1..=10"));
        self.script.push_back(Selection::Rank(rank));
        self
    }

    /// Queue an opponent-index answer.
    #[must_use]
    pub fn then_opponent(mut self, index: usize) -> Self {
        self.script.push_back(Selection::Opponent(index));
        self
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn decide(&mut self, _view: &GameView, choices: &Choices, _kind: DecisionKind) -> Selection {
        self.script.pop_front().unwrap_or_else(|| choices.pick(0))
    }
}
