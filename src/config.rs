//! Configuration file support for dep-health.
//!
//! Provides YAML-based configuration through `dep-health.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use dep_health::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-health.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub corpus: Option<PathBuf>,
    pub format: Option<String>,
    pub severity_threshold: Option<String>,
    pub cvss_threshold: Option<f64>,
    pub ignore_cves: Option<Vec<IgnoreCve>>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An advisory excluded from threshold evaluation.
#[derive(Debug, Deserialize)]
pub struct IgnoreCve {
    pub id: String,
    pub reason: Option<String>,
}

impl ConfigFile {
    /// Ids of the ignored advisories, trimmed.
    pub fn ignored_ids(&self) -> Vec<String> {
        self.ignore_cves
            .iter()
            .flatten()
            .map(|entry| entry.id.trim().to_string())
            .collect()
    }

    /// Non-empty reasons of the ignored advisories, keyed by trimmed id.
    pub fn ignore_reasons(&self) -> BTreeMap<String, String> {
        self.ignore_cves
            .iter()
            .flatten()
            .filter_map(|entry| {
                let reason = entry.reason.as_deref()?.trim();
                (!reason.is_empty()).then(|| (entry.id.trim().to_string(), reason.to_string()))
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ignore_cves) = config.ignore_cves {
        for (i, entry) in ignore_cves.iter().enumerate() {
            if entry.id.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_cves[{}].id must not be empty.\n\n\
                     💡 Hint: Each ignore_cves entry must have a non-empty 'id' field (e.g., \"CVE-2024-1234\").",
                    i
                );
            }
        }
    }

    if let Some(score) = config.cvss_threshold {
        if !(0.0..=10.0).contains(&score) {
            bail!(
                "Invalid config: cvss_threshold must be between 0.0 and 10.0, got {}.",
                score
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
