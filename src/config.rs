//! Configuration file support for dep-explorer.
//!
//! Provides YAML-based configuration through `dep-explorer.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use dependency_explorer::application::dto::OutputFormat;
use dependency_explorer::explorer::policies::DisplayMode;
use dependency_explorer::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-explorer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub mode: Option<String>,
    pub search: Option<String>,
    pub modules: Option<Vec<String>>,
    pub sonar_url: Option<String>,
    pub project_key: Option<String>,
    pub branch: Option<String>,
    pub pull_request: Option<String>,
    pub fail_on_findings: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, already validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }

    /// Parsed `mode`, already validated on load
    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.mode
            .as_deref()
            .and_then(|m| DisplayMode::from_str(m).ok())
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
    if let Some(format) = config.format.as_deref() {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(mode) = config.mode.as_deref() {
        if let Err(e) = DisplayMode::from_str(mode) {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(modules) = &config.modules {
        for (i, module) in modules.iter().enumerate() {
            if module.trim().is_empty() {
                bail!(
                    "Invalid config: modules[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a module key (e.g., \"acme:app\").",
                    i
                );
            }
        }
    }
    if config.sonar_url.is_some() && config.project_key.is_none() {
        bail!(
            "Invalid config: sonar_url is set but project_key is missing.\n\n\
             💡 Hint: Add 'project_key' with the key of the analysed project."
        );
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
