use std::path::PathBuf;

use anyhow::Result;
use flatsocial::{Client, Config, JsonFileStore};
use log::debug;

/// Where the CLI finds its configuration and data.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub config_path: Option<PathBuf>,
    /// Beats both the config file and `FLATSOCIAL_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
}

impl AppContext {
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config_path.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.display().to_string();
        }
        debug!("resolved configuration: {config:?}");
        Ok(config)
    }

    pub fn client(&self) -> Result<Client<JsonFileStore>> {
        Client::open(self.config()?)
    }
}
