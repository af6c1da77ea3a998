use crate::error::{MatchError, Result};
use crate::types::config::MatchConfig;
use crate::types::preferences::UserPreferences;
use crate::types::result::{QuizResult, SavedResult};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Bounded saved-result store over a single JSON blob. Newest entries sit at
/// the front; saves beyond capacity drop the oldest.
pub struct ResultStore {
    path: PathBuf,
    capacity: usize,
}

impl ResultStore {
    pub fn new(path: PathBuf, capacity: usize) -> Self {
        Self {
            path,
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: Option<&MatchConfig>) -> Self {
        let defaults = MatchConfig::default();
        let config = config.unwrap_or(&defaults);
        Self::new(config.store_path(), config.store_capacity())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(
        &self,
        preferences: &UserPreferences,
        result: &QuizResult,
        nickname: Option<&str>,
    ) -> Result<SavedResult> {
        let entry = SavedResult {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            nickname: nickname
                .map(str::to_string)
                .unwrap_or_else(|| result.top_pick.item.name.clone()),
            preferences: *preferences,
            result: result.clone(),
        };

        let mut entries = self.list();
        entries.insert(0, entry.clone());
        entries.truncate(self.capacity);
        self.write_all(&entries)?;
        Ok(entry)
    }

    /// All saved results, newest first. A missing or unreadable blob is
    /// treated as no data.
    pub fn list(&self) -> Vec<SavedResult> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "saved-result store unreadable");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "saved-result store corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<SavedResult> {
        self.list().into_iter().find(|entry| entry.id == id)
    }

    /// Returns whether the id existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let entries = self.list();
        let before = entries.len();
        let remaining: Vec<SavedResult> =
            entries.into_iter().filter(|entry| entry.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.write_all(&remaining)?;
        Ok(true)
    }

    /// Replace one entry's nickname, leaving everything else untouched.
    /// Returns whether the id existed.
    pub fn rename(&self, id: &str, nickname: &str) -> Result<bool> {
        let mut entries = self.list();
        let mut found = false;
        for entry in &mut entries {
            if entry.id == id {
                entry.nickname = nickname.to_string();
                found = true;
            }
        }
        if !found {
            return Ok(false);
        }
        self.write_all(&entries)?;
        Ok(true)
    }

    fn write_all(&self, entries: &[SavedResult]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(MatchError::Io)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json).map_err(MatchError::Io)?;
        Ok(())
    }
}
