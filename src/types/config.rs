use crate::error::{MatchError, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORE_CAPACITY: usize = 10;
pub const DEFAULT_STORE_FILE: &str = ".vapormatch/results.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchConfig {
    pub store: Option<StoreConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub file: Option<String>,
}

impl MatchConfig {
    /// Resolved store path; relative defaults live under `$HOME`.
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = self.store.as_ref().and_then(|store| store.path.as_ref()) {
            return PathBuf::from(path);
        }
        let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        home.join(DEFAULT_STORE_FILE)
    }

    pub fn store_capacity(&self) -> usize {
        self.store
            .as_ref()
            .and_then(|store| store.capacity)
            .unwrap_or(DEFAULT_STORE_CAPACITY)
    }

    pub fn catalog_file(&self) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.file.as_ref())
            .map(PathBuf::from)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.store.as_ref().and_then(|store| store.capacity) {
            if capacity == 0 {
                return Err(MatchError::ConfigParse(
                    "store.capacity must be greater than 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}
