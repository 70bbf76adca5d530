//! Optional CLI defaults loaded from a JSON file
//!
//! The file is named by `CARD_CONFIG_PATH` (or `--config`). Command-line
//! flags always win over values from the file.

use anyhow::{bail, Context, Result};
use card_core::{chemistry, ChemistryLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "CARD_CONFIG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Style applied when `--style` is not given
    #[serde(default)]
    pub default_style: Option<String>,
    /// Chemistry level text applied when `--chemistry` is not given
    #[serde(default)]
    pub default_chemistry: Option<String>,
}

impl CliConfig {
    /// Load from the file named by `CARD_CONFIG_PATH`, if set
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_env_value(env::var(CONFIG_PATH_ENV).ok())
    }

    /// Blank values count as unset
    pub fn from_env_value(value: Option<String>) -> Result<Option<Self>> {
        let Some(path) = value else {
            return Ok(None);
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        Self::load(Path::new(path))
            .with_context(|| format!("Invalid config from {CONFIG_PATH_ENV}='{path}'"))
            .map(Some)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;

        config.validate()?;
        debug!("Loaded CLI config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Default style must be in the catalog and the level must parse
    pub fn validate(&self) -> Result<()> {
        if let Some(style) = self.default_style.as_deref() {
            if chemistry::find(style).is_none() {
                bail!("Unknown default_style '{}'", style);
            }
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Option<ChemistryLevel>> {
        self.default_chemistry
            .as_deref()
            .map(|text| text.parse::<ChemistryLevel>())
            .transpose()
            .context("Invalid default_chemistry")
    }
}
