//! High-score data types
//!
//! Serialised with Serde to JSON; timestamps use chrono so the file stays
//! human-readable.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Entries kept in the table
pub const MAX_ENTRIES: usize = 10;

/// Current score file version
pub const CURRENT_SCORE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub stars_collected: u32,
    pub achieved_at: DateTime<Local>,
}

/// Best runs, highest score first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreTable {
    pub version: u32,
    pub entries: Vec<HighScore>,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        HighScoreTable {
            version: CURRENT_SCORE_VERSION,
            entries: Vec::new(),
        }
    }
}

impl HighScoreTable {
    /// Inserts a finished run and returns its 0-based rank, or `None` if it
    /// did not make the table.
    ///
    /// Ties rank below existing entries with the same score.
    pub fn record(&mut self, score: u32, stars_collected: u32) -> Option<usize> {
        self.record_at(score, stars_collected, Local::now())
    }

    pub fn record_at(
        &mut self,
        score: u32,
        stars_collected: u32,
        achieved_at: DateTime<Local>,
    ) -> Option<usize> {
        if score == 0 {
            return None;
        }

        let rank = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return None;
        }

        self.entries.insert(
            rank,
            HighScore {
                score,
                stars_collected,
                achieved_at,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }
}

/// Error types for score file operations
#[derive(Debug)]
pub enum ScoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::IoError(e) => write!(f, "IO error: {}", e),
            ScoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ScoreError::InvalidVersion(v) => write!(f, "Invalid score file version: {}", v),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        ScoreError::IoError(err)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::SerializationError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_orders_by_score() {
        let mut table = HighScoreTable::default();

        assert_eq!(table.record(5, 5), Some(0));
        assert_eq!(table.record(12, 30), Some(0));
        assert_eq!(table.record(8, 8), Some(1));

        let scores: Vec<u32> = table.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![12, 8, 5]);
        assert_eq!(table.best(), Some(12));
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut table = HighScoreTable::default();
        table.record(7, 7);
        assert_eq!(table.record(7, 17), Some(1));
    }

    #[test]
    fn test_zero_score_is_not_recorded() {
        let mut table = HighScoreTable::default();
        assert_eq!(table.record(0, 3), None);
        assert_eq!(table.best(), None);
    }

    #[test]
    fn test_table_is_capped() {
        let mut table = HighScoreTable::default();
        for score in 1..=15 {
            table.record(score, score);
        }

        assert_eq!(table.entries.len(), MAX_ENTRIES);
        assert_eq!(table.best(), Some(15));
        assert_eq!(table.entries.last().map(|e| e.score), Some(6));
        assert_eq!(table.record(3, 3), None);
    }
}
