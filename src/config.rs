// src/config.rs
//! Configuration file parsing for Recetario
//!
//! Supports a TOML configuration file with the following sections:
//! - [database] - Location of the SQLite file
//! - [currency] - Symbol and digit grouping used to render prices
//! - [policy] - Business rules that are a matter of choice

use crate::currency::CurrencyFormat;
use crate::db::paths;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database settings
    #[serde(default)]
    pub database: DatabaseSection,

    /// Price display settings
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Validation policies
    #[serde(default)]
    pub policy: PolicySection,
}

/// Database configuration section
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseSection {
    /// Path to the database file (platform data dir when unset)
    pub path: Option<PathBuf>,
}

/// Policy configuration section
#[derive(Debug, Default, Deserialize)]
pub struct PolicySection {
    /// When an ingredient referenced by a recipe may still be edited
    #[serde(default)]
    pub ingredient_in_use: InUsePolicy,
}

/// Which edits are refused for an ingredient that recipes already use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InUsePolicy {
    /// Refuse edits that change the ingredient's name or unit
    #[default]
    IdentityChange,
    /// Refuse every edit
    AnyEdit,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or the default one when it exists
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match paths::default_config_path() {
            Some(path) if path.exists() => {
                debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.currency.symbol.trim().is_empty() {
            anyhow::bail!("currency.symbol must not be empty");
        }

        let sep = self.currency.grouping_separator;
        if sep.is_alphanumeric() || sep == '-' {
            anyhow::bail!(
                "currency.grouping_separator must not be a digit, letter or '-', got '{}'",
                sep
            );
        }

        Ok(())
    }

    /// Database path, honoring an override from the command line
    pub fn db_path(&self, override_path: Option<&str>) -> String {
        if let Some(path) = override_path {
            return path.to_string();
        }
        self.database
            .path
            .clone()
            .unwrap_or_else(paths::default_db_path)
            .to_string_lossy()
            .into_owned()
    }
}
