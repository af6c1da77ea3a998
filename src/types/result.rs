use crate::types::catalog::Vaporizer;
use crate::types::preferences::UserPreferences;
use serde::{Deserialize, Serialize};

/// A catalog item with its computed score, recomputed on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVaporizer {
    pub item: Vaporizer,
    pub score: f32,
    pub match_percent: u8,
}

/// Top pick plus up to three alternates and a one-sentence explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub top_pick: ScoredVaporizer,
    pub alternates: Vec<ScoredVaporizer>,
    pub explanation: String,
}

/// A persisted preferences + result bundle with a user-editable nickname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResult {
    pub id: String,
    pub timestamp: i64,
    pub nickname: String,
    pub preferences: UserPreferences,
    pub result: QuizResult,
}
