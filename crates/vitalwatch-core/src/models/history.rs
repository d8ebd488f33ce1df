use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::evaluation::{EvaluationResult, RiskTier};

/// Maximum number of entries kept.
pub const MAX_HISTORY_ENTRIES: usize = 8;

/// Entries older than this are dropped.
pub const HISTORY_MAX_AGE: SignedDuration = SignedDuration::from_hours(24 * 7);

/// A compact record of one past evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub recorded_at: Timestamp,
    pub score: u8,
    pub risk: RiskTier,
    pub summary: String,
    pub flags: Vec<String>,
}

impl HistoryEntry {
    pub fn from_result(result: &EvaluationResult, recorded_at: Timestamp) -> Self {
        Self {
            recorded_at,
            score: result.score,
            risk: result.risk,
            summary: result.summary.clone(),
            flags: result.flags.clone(),
        }
    }

    fn is_expired(&self, now: Timestamp) -> bool {
        now.duration_since(self.recorded_at) > HISTORY_MAX_AGE
    }
}

/// Bounded, most-recent-first list of past evaluations.
///
/// The client persists this as JSON; expiry is applied on every insert and
/// whenever a persisted list is loaded back with [`EvaluationHistory::prune`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationHistory {
    entries: Vec<HistoryEntry>,
}

impl EvaluationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry at the front, dropping expired and overflow entries.
    pub fn record(&mut self, entry: HistoryEntry, now: Timestamp) {
        self.entries.insert(0, entry);
        self.prune(now);
    }

    /// Drop expired entries and enforce the size cap.
    pub fn prune(&mut self, now: Timestamp) {
        self.entries.retain(|e| !e.is_expired(now));
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
