//! Session log: an append-only in-memory record of processed queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classify::ProblemKind;

/// One processed query. Created once per successful pipeline call, never
/// mutated afterwards; removed only by clearing the whole log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The raw query as the user typed it.
    pub query: String,
    /// Result string, including solver-level `"Error"` markers.
    pub result: String,
    /// The narrated explanation (with any confidence note appended).
    pub explanation: String,
    /// The category the query was classified as.
    pub kind: ProblemKind,
    /// Classification confidence at the time of processing.
    pub confidence: f32,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        query: String,
        result: String,
        explanation: String,
        kind: ProblemKind,
        confidence: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            query,
            result,
            explanation,
            kind,
            confidence,
            timestamp: Utc::now(),
        }
    }
}

/// Owned, uncapped, in-memory log. One instance per session; no global
/// state and no locking - the pipeline is single-threaded.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<HistoryEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// An owned copy of the log, in insertion order.
    #[allow(dead_code)]
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
