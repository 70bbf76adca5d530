//! Card CLI Library
//!
//! Loads saved card database responses from disk, resolves the profile
//! selection from flags and config, and renders evaluations as text.

#![recursion_limit = "256"]

pub mod config;
pub mod render;

use anyhow::{Context, Result};
use card_core::{ChemistryLevel, PlayerPage, PlayerResponse, PlayerVersion, ProfileSelection};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub use config::{CliConfig, CONFIG_PATH_ENV};
pub use render::{render_classification, render_profile, render_styles};

/// Load a single-player response.
///
/// Accepts the endpoint's `{ mainVersion, otherVersions }` wrapper or a bare
/// card version.
pub fn load_player(path: &Path) -> Result<PlayerResponse> {
    let value = read_json(path)?;

    if value.get("mainVersion").is_some() {
        return serde_json::from_value(value)
            .with_context(|| format!("Failed to parse player response: {}", path.display()));
    }

    let main_version: PlayerVersion = serde_json::from_value(value)
        .with_context(|| format!("Failed to parse player version: {}", path.display()))?;
    Ok(PlayerResponse { main_version, other_versions: Vec::new() })
}

/// Load one page of the paged list endpoint
pub fn load_player_page(path: &Path) -> Result<PlayerPage> {
    let value = read_json(path)?;
    let page: PlayerPage = serde_json::from_value(value)
        .with_context(|| format!("Failed to parse player page: {}", path.display()))?;

    if page.players.len() as u32 > page.players_per_page {
        warn!(
            "Page holds {} players but playersPerPage is {}",
            page.players.len(),
            page.players_per_page
        );
    }
    Ok(page)
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

/// Build the profile selection: flags first, then config, then defaults
pub fn resolve_selection(
    style: Option<String>,
    chemistry: Option<&str>,
    config: Option<&CliConfig>,
) -> Result<ProfileSelection> {
    let level = match chemistry {
        Some(text) => text
            .parse::<ChemistryLevel>()
            .with_context(|| format!("Invalid --chemistry value '{text}'"))?,
        None => match config {
            Some(config) => config.level()?.unwrap_or_default(),
            None => ChemistryLevel::default(),
        },
    };

    let style = style.or_else(|| config.and_then(|c| c.default_style.clone()));
    let selection = ProfileSelection::new(style, level);
    debug!("Resolved selection: {:?}", selection);
    Ok(selection)
}
