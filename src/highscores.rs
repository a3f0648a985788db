//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks top 10 scores.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::persistence;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry, stored on disk as a `[name, score]` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Coerce a stored pair. Extra trailing elements are ignored.
    fn from_json(value: &Value) -> Option<Self> {
        let fields = value.as_array()?;
        let name = fields.first()?.as_str()?;
        let score = fields.get(1)?.as_u64()?;
        Some(Self::new(name, score))
    }
}

impl From<(String, u64)> for HighScoreEntry {
    fn from((name, score): (String, u64)) -> Self {
        Self { name, score }
    }
}

impl From<HighScoreEntry> for (String, u64) {
    fn from(entry: HighScoreEntry) -> Self {
        (entry.name, entry.score)
    }
}

/// High score leaderboard, sorted descending by score.
///
/// Equal scores keep insertion order, earliest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from entries in stored order
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        // Vec::sort_by is stable, so ties keep their stored order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    /// Parse a stored list, or `None` if any entry has the wrong shape
    pub fn from_json(value: &Value) -> Option<Self> {
        let entries = value
            .as_array()?
            .iter()
            .map(HighScoreEntry::from_json)
            .collect::<Option<Vec<_>>>()?;
        Some(Self::from_entries(entries))
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // A tie with the last entry ranks after it and falls off
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score and keep the top 10.
    /// Returns the rank achieved (1-indexed) or None if it fell off.
    pub fn add_score(&mut self, name: impl Into<String>, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score);

        // Insert after every entry with an equal or higher score
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, HighScoreEntry::new(name, score));

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        rank
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// Where finished sessions record their scores
pub trait ScoreStore {
    /// Current table. Never fails; unreadable data is an empty table.
    fn load(&self) -> HighScores;

    /// Merge one score into the stored table and write it back in full
    fn save(&mut self, name: &str, score: u64) -> Result<HighScores>;
}

/// High scores kept in a JSON file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for HighScoreFile {
    fn load(&self) -> HighScores {
        let Some(value) = persistence::read_json::<Value>(&self.path) else {
            return HighScores::new();
        };
        match HighScores::from_json(&value) {
            Some(scores) => {
                log::info!("Loaded {} high scores", scores.len());
                scores
            }
            None => {
                log::warn!(
                    "High score file {} has unexpected entries, starting fresh",
                    self.path.display()
                );
                HighScores::new()
            }
        }
    }

    fn save(&mut self, name: &str, score: u64) -> Result<HighScores> {
        let mut scores = self.load();
        let rank = scores.add_score(name, score);
        persistence::write_json(&self.path, &scores)?;
        match rank {
            Some(rank) => log::info!("Saved score {} for {} at rank {}", score, name, rank),
            None => log::info!("Score {} for {} did not make the table", score, name),
        }
        Ok(scores)
    }
}

/// In-memory store for runs that should not touch disk
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HighScores,
    saves: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> HighScores {
        self.scores.clone()
    }

    fn save(&mut self, name: &str, score: u64) -> Result<HighScores> {
        self.saves += 1;
        self.scores.add_score(name, score);
        Ok(self.scores.clone())
    }
}

/// Rows for the high score screen
pub fn format_table(scores: &HighScores) -> Vec<String> {
    if scores.is_empty() {
        return vec!["No high scores yet!".to_string()];
    }
    scores
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {} - {}", i + 1, e.name, e.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn scores_of(table: &HighScores) -> Vec<u64> {
        table.entries.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_order_with_ties() {
        let mut table = HighScores::new();
        for (name, score) in [("a", 50), ("b", 90), ("c", 30), ("d", 90)] {
            table.add_score(name, score);
        }
        assert_eq!(scores_of(&table), vec![90, 90, 50, 30]);
        let names: Vec<_> = table.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut table = HighScores::new();
        for score in 1..=15 {
            table.add_score("Player", score);
        }
        assert_eq!(table.len(), MAX_HIGH_SCORES);
        assert_eq!(scores_of(&table), (6..=15).rev().collect::<Vec<_>>());
        assert_eq!(table.top_score(), Some(15));
    }

    #[test]
    fn test_add_score_rank() {
        let mut table = HighScores::new();
        assert_eq!(table.add_score("a", 10), Some(1));
        assert_eq!(table.add_score("b", 20), Some(1));
        assert_eq!(table.add_score("c", 10), Some(3));
        // Zero is still a score
        assert_eq!(table.add_score("d", 0), Some(4));

        for _ in 0..6 {
            table.add_score("e", 5);
        }
        assert_eq!(table.len(), MAX_HIGH_SCORES);
        // Ties with the last entry fall off
        assert!(!table.qualifies(0));
        assert_eq!(table.add_score("f", 0), None);
        assert_eq!(table.len(), MAX_HIGH_SCORES);
        assert!(table.entries.iter().all(|e| e.name != "f"));
    }

    #[test]
    fn test_from_entries_is_stable() {
        let table = HighScores::from_entries(vec![
            HighScoreEntry::new("x", 5),
            HighScoreEntry::new("y", 9),
            HighScoreEntry::new("z", 5),
        ]);
        let names: Vec<_> = table.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_from_json_coerces_pairs() {
        let value = json!([["a", 3], ["b", 7, "extra"]]);
        let table = HighScores::from_json(&value).unwrap();
        assert_eq!(table.entries[0], HighScoreEntry::new("b", 7));
        assert_eq!(table.entries[1], HighScoreEntry::new("a", 3));
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(HighScores::from_json(&json!({"a": 1})).is_none());
        assert!(HighScores::from_json(&json!([["a"]])).is_none());
        assert!(HighScores::from_json(&json!([["a", "ten"]])).is_none());
        assert!(HighScores::from_json(&json!([[1, 2]])).is_none());
        assert!(HighScores::from_json(&json!([["a", -4]])).is_none());
        assert_eq!(HighScores::from_json(&json!([])), Some(HighScores::new()));
    }

    #[test]
    fn test_serializes_as_pairs() {
        let table = HighScores::from_entries(vec![HighScoreEntry::new("Player", 12)]);
        assert_eq!(serde_json::to_value(&table).unwrap(), json!([["Player", 12]]));
        let back: HighScores = serde_json::from_value(json!([["Player", 12]])).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryScoreStore::new();
        assert!(store.load().is_empty());
        store.save("Player", 4).unwrap();
        store.save("Player", 8).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(scores_of(&store.load()), vec![8, 4]);
    }

    #[test]
    fn test_format_table() {
        assert_eq!(format_table(&HighScores::new()), vec!["No high scores yet!"]);
        let table = HighScores::from_entries(vec![
            HighScoreEntry::new("Player", 42),
            HighScoreEntry::new("Ada", 7),
        ]);
        assert_eq!(format_table(&table), vec!["1. Player - 42", "2. Ada - 7"]);
    }

    proptest! {
        #[test]
        fn table_stays_sorted_and_capped(scores in proptest::collection::vec(0u64..50, 0..40)) {
            let mut table = HighScores::new();
            for (i, score) in scores.iter().enumerate() {
                table.add_score(format!("p{i}"), *score);
            }

            prop_assert_eq!(table.len(), scores.len().min(MAX_HIGH_SCORES));

            // Same result as append, stable sort, truncate
            let mut expected: Vec<(String, u64)> = scores
                .iter()
                .enumerate()
                .map(|(i, s)| (format!("p{i}"), *s))
                .collect();
            expected.sort_by(|a, b| b.1.cmp(&a.1));
            expected.truncate(MAX_HIGH_SCORES);
            let actual: Vec<(String, u64)> = table.entries.iter().cloned().map(Into::into).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
