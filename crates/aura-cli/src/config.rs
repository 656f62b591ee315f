//! Configuration management for the Aura CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Aura project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_risks_file")]
    pub risks: String,
    #[serde(default = "default_references_file")]
    pub references: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,
    #[serde(default = "default_telemetry_path")]
    pub path: String,
}

// Default value functions
fn default_max_items() -> usize { 5 }
fn default_risks_file() -> String { "risks.yaml".to_string() }
fn default_references_file() -> String { "references.yaml".to_string() }
fn default_telemetry_enabled() -> bool { true }
fn default_telemetry_path() -> String { "telemetry.csv".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            query: QueryConfig::default(),
            data: DataConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            risks: default_risks_file(),
            references: default_references_file(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
            path: default_telemetry_path(),
        }
    }
}

impl Config {
    /// Load config from aura.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// The resolved risk/reference source paths (working directory first,
    /// then `data/`).
    pub fn data_paths(&self) -> Result<(PathBuf, PathBuf)> {
        let base = std::env::current_dir()?;
        Ok((
            aura::kb::resolve_data_path(&base, &self.data.risks),
            aura::kb::resolve_data_path(&base, &self.data.references),
        ))
    }
}

/// Find aura.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("aura.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.query.max_items, 5);
        assert_eq!(back.data.risks, "risks.yaml");
        assert!(back.telemetry.enabled);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let back: Config = toml::from_str("[query]\nmax_items = 3\n").unwrap();
        assert_eq!(back.query.max_items, 3);
        assert_eq!(back.telemetry.path, "telemetry.csv");
    }
}
