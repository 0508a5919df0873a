//! Configuration management.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// PDD token.
    pub token: Option<String>,

    /// OAuth token; when set the registrar API is used.
    pub oauth_token: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// API base URL override.
    pub base_url: Option<String>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("ru", "yandex", "pdd")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a key by name, as used by `pdd config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "token" => self.token = Some(value.to_string()),
            "oauth_token" => self.oauth_token = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "base_url" => self.base_url = Some(value.to_string()),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 token          - Your PDD token\n  \
                 oauth_token    - Registrar OAuth token\n  \
                 output_format  - Default output format (pretty/json/csv)\n  \
                 base_url       - API base URL",
                key
            ),
        }
        Ok(())
    }
}

/// Mask a secret for display, keeping a few characters at each end.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}
