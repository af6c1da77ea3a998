use crate::error::{MatchError, Result};
use crate::types::config::MatchConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "vapormatch.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/vapormatch/config.toml";

/// Load configuration. An explicit path must exist and is used alone;
/// otherwise the global file and the working-directory file are merged,
/// with the local file winning key-by-key.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<MatchConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(MatchError::ConfigNotFound(path.display().to_string()));
        }
        let cfg = parse_config_file(path)?;
        cfg.validate()?;
        return Ok(Some(cfg));
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_layered(global.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
}

pub(crate) fn load_layered(
    global_path: Option<&Path>,
    local_path: &Path,
) -> Result<Option<MatchConfig>> {
    let global_exists = global_path.map(Path::exists).unwrap_or(false);
    if !global_exists && !local_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, local_path)?;

    let cfg: MatchConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MatchError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn parse_config_file(path: &Path) -> Result<MatchConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MatchError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| MatchError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
