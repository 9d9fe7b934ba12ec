use crate::error::{Result, WellcheckError};
use crate::store::jsonl::DEFAULT_STORE_FILE;
use crate::types::config::WellcheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "wellcheck.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".wellcheck/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/wellcheck/config.toml";

pub fn load_config(root: &Path) -> Result<Option<WellcheckConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<WellcheckConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }

    let cfg: WellcheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| WellcheckError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

pub fn store_path(root: &Path, config: Option<&WellcheckConfig>) -> PathBuf {
    let configured = config
        .and_then(WellcheckConfig::store_path)
        .unwrap_or(DEFAULT_STORE_FILE);
    resolve_path(root, configured)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    debug!(path = %path.display(), "merging config");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| WellcheckError::ConfigParse(format!("{}: {}", path.display(), e)))
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

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}
