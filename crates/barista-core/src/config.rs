//! Session configuration.
//!
//! Loaded from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "menu": { "items": { "latte": 3, "tea": 1 }, "fallback": 2 },
//!   "display_after_run": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Menu;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu entry {0} has zero work; every order must take at least one unit")]
    ZeroWork(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeConfig {
    /// Work policy for new orders.
    pub menu: Menu,

    /// Print the status display after every `RUN`.
    pub display_after_run: bool,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            menu: Menu::default(),
            display_after_run: true,
        }
    }
}

impl CafeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.menu.zero_work_entry() {
            Some(name) => Err(ConfigError::ZeroWork(name)),
            None => Ok(()),
        }
    }
}
