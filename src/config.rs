use crate::error::{Result, StatusError};
use crate::types::config::OrganizationConfig;
use crate::types::status::Points;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "membership.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".membership/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/member-status/config.toml";

pub fn load_config(root: &Path) -> Result<OrganizationConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<OrganizationConfig> {
    let org_path = root.join(DEFAULT_CONFIG_FILE);
    if !org_path.exists() {
        return Err(StatusError::ConfigNotFound(org_path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &org_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| StatusError::ConfigParse(e.to_string()))
}

pub fn resolve_required_points(
    config: &OrganizationConfig,
    cli_override: Option<Points>,
) -> Result<Points> {
    cli_override
        .or(config.organization.required_points)
        .ok_or(StatusError::MissingRequiredPoints)
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
        .map_err(|e| StatusError::ConfigParse(format!("{}: {}", path.display(), e)))
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
