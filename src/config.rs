use crate::error::{CarscoreError, Result};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "carscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".carscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/carscore/config.toml";

/// Loads the scoring config for `root`, layering the global file, the
/// project file and the local override over the built-in defaults.
pub fn load_config(root: &Path) -> Result<ScoringConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScoringConfig> {
    let mut merged = Value::try_from(ScoringConfig::default())?;
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CarscoreError::ConfigParse(e.to_string()))?;
    Ok(cfg)
}

/// Renders the built-in defaults as a starter `carscore.toml`.
pub fn default_config_toml() -> Result<String> {
    Ok(toml::to_string_pretty(&ScoringConfig::default())?)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CarscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
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
