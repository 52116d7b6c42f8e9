//! Decision logs, game records and the record buffer.
//!
//! Every decision the engine asks for is recorded together with the view
//! the provider saw, giving per-player logs of:
//! - the filtered view at the decision point
//! - the decision kind and the offered choices
//! - the selection actually made
//! - a trailing win/lose tag once the game is over
//!
//! `GameRecord::labelled_decisions` flattens a finished game into the
//! (decision, final outcome) pairs external training tooling consumes.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::decision::{Choices, DecisionKind, GameView, Selection};
use crate::rules::{GameResult, Outcome};

/// One answered decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// The deciding player's view at the time of asking.
    pub view: GameView,

    pub kind: DecisionKind,

    pub choices: Choices,

    pub selection: Selection,

    /// Position of this decision in the whole game (0-indexed).
    pub move_number: usize,
}

/// All decisions of one player plus the final outcome tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLog {
    pub decisions: Vec<DecisionRecord>,

    /// `None` until the game is over (and on a failed run).
    pub outcome: Option<Outcome>,
}

impl PlayerLog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Decisions of one kind, in order.
    pub fn of_kind(&self, kind: DecisionKind) -> impl Iterator<Item = &DecisionRecord> {
        self.decisions.iter().filter(move |d| d.kind == kind)
    }
}

/// Per-player decision logs, keyed by turn number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    players: PlayerMap<PlayerLog>,
    moves: usize,
}

impl GameLog {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerMap::with_default(player_count),
            moves: 0,
        }
    }

    /// Record a decision for `player`.
    pub fn push(
        &mut self,
        player: PlayerId,
        view: GameView,
        kind: DecisionKind,
        choices: Choices,
        selection: Selection,
    ) {
        self.players[player].decisions.push(DecisionRecord {
            view,
            kind,
            choices,
            selection,
            move_number: self.moves,
        });
        self.moves += 1;
    }

    /// Append the outcome tag for every player.
    pub fn close(&mut self, result: &GameResult) {
        for (player, log) in self.players.iter_mut() {
            log.outcome = Some(result.outcome(player));
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerLog {
        &self.players[player]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &PlayerLog)> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Total decisions across all players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves == 0
    }

    /// Every decision in the order it was made.
    #[must_use]
    pub fn chronological(&self) -> Vec<(PlayerId, &DecisionRecord)> {
        let mut all: Vec<_> = self
            .players
            .iter()
            .flat_map(|(p, log)| log.decisions.iter().map(move |d| (p, d)))
            .collect();
        all.sort_by_key(|(_, d)| d.move_number);
        all
    }
}

/// Seat registration of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    /// Index the caller registered the seat under.
    pub seat: usize,
    pub name: String,
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,

    /// Seat and name of each player, in turn order.
    pub seats: PlayerMap<SeatInfo>,

    pub log: GameLog,

    pub result: GameResult,
}

impl GameRecord {
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.result.winners
    }

    #[must_use]
    pub fn losers(&self) -> &[PlayerId] {
        &self.result.losers
    }

    /// Turn number of the player registered at `seat`.
    #[must_use]
    pub fn player_at_seat(&self, seat: usize) -> Option<PlayerId> {
        self.seats
            .iter()
            .find(|(_, info)| info.seat == seat)
            .map(|(p, _)| p)
    }

    /// Pair every decision with its player's final outcome.
    #[must_use]
    pub fn labelled_decisions(&self) -> Vec<LabelledDecision> {
        self.log
            .chronological()
            .into_iter()
            .map(|(player, record)| LabelledDecision {
                player,
                record: record.clone(),
                outcome: self.result.outcome(player),
            })
            .collect()
    }
}

/// A decision together with how the game ended for the decider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledDecision {
    pub player: PlayerId,
    pub record: DecisionRecord,
    pub outcome: Outcome,
}

/// Bounded store of finished games.
///
/// FIFO: when full, the oldest record is dropped.
#[derive(Clone, Debug)]
pub struct RecordBuffer {
    records: VecDeque<GameRecord>,
    max_records: usize,
}

impl RecordBuffer {
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records.min(1024)),
            max_records,
        }
    }

    /// Add a record, evicting the oldest if full.
    pub fn push(&mut self, record: GameRecord) {
        if self.max_records == 0 {
            return;
        }
        if self.records.len() >= self.max_records {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }

    /// Decisions across all stored games.
    #[must_use]
    pub fn total_decisions(&self) -> usize {
        self.records.iter().map(|r| r.log.len()).sum()
    }

    #[must_use]
    pub fn labelled_decisions(&self) -> Vec<LabelledDecision> {
        self.records.iter().flat_map(|r| r.labelled_decisions()).collect()
    }

    /// A reproducible random batch of labelled decisions.
    #[must_use]
    pub fn sample_batch(&self, batch_size: usize, seed: u64) -> Vec<LabelledDecision> {
        let mut all = self.labelled_decisions();
        if all.is_empty() || batch_size == 0 {
            return vec![];
        }

        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut all);
        all.truncate(batch_size);
        all
    }
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}
