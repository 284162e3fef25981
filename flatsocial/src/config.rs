//! Runtime configuration.
//!
//! Resolution order, last wins: built-in defaults, an optional `flatsocial.toml`,
//! environment variables, then whatever the caller (the CLI) overrides explicitly.
//!
//! ```toml
//! [storage]
//! data_dir = "./shared/data"
//!
//! [accounts]
//! min_password_len = 6
//! bcrypt_cost = 10
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_AVATAR;

/// Name of the config file picked up from the working directory when no path is given.
pub const CONFIG_FILE: &str = "flatsocial.toml";
/// Overrides `storage.data_dir`.
pub const ENV_DATA_DIR: &str = "FLATSOCIAL_DATA_DIR";
/// `production` switches the default data directory to [`PRODUCTION_DATA_DIR`].
pub const ENV_PROFILE: &str = "FLATSOCIAL_ENV";
pub const PRODUCTION_DATA_DIR: &str = "/app/shared/data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub accounts: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding `users.json` and friends. `${VAR}` expands from the environment.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "shared/data".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default = "default_avatar")]
    pub default_avatar: String,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            default_avatar: default_avatar(),
            min_password_len: default_min_password_len(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn default_min_password_len() -> usize {
    6
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or `flatsocial.toml` from the working directory if present, then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::read_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Apply environment overrides using `lookup` to resolve variables.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup(ENV_PROFILE).as_deref() == Some("production") {
            self.storage.data_dir = PRODUCTION_DATA_DIR.to_string();
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|dir| !dir.trim().is_empty()) {
            self.storage.data_dir = dir;
        }
        self
    }

    /// Data directory with a `${VAR}` placeholder expanded.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let raw = self.storage.data_dir.as_str();
        if let Some(var_name) = raw.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
            let value = std::env::var(var_name)
                .with_context(|| format!("Environment variable {var_name} not set"))?;
            Ok(PathBuf::from(value))
        } else {
            Ok(PathBuf::from(raw))
        }
    }

    fn validate(&self) -> Result<()> {
        let cost = self.accounts.bcrypt_cost;
        if !(4..=31).contains(&cost) {
            anyhow::bail!("accounts.bcrypt_cost must be between 4 and 31, got {cost}");
        }
        if self.accounts.min_password_len == 0 {
            anyhow::bail!("accounts.min_password_len must be at least 1");
        }
        Ok(())
    }
}
