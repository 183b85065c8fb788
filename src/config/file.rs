//! # Config File
//!
//! Optional user configuration stored at `~/.config/clipcheck/config`.
//! The API token is never read from this file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use serde::Deserialize;

use super::{ConfigError, CreatePolicy};
use crate::constants::{CONFIG_DIR, CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Settings read from the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Backend domain (e.g., "example-be.glean.com")
    #[serde(default)]
    pub domain: Option<String>,

    /// Collection checked by the probe
    #[serde(default)]
    pub collection_id: Option<i64>,

    /// Full API base URL, overriding the one derived from `domain`
    #[serde(default)]
    pub base_url: Option<String>,

    /// What to do when the target collection is not accessible
    #[serde(default)]
    pub create_collection: Option<CreatePolicy>,
}

impl FileConfig {
    /// Returns the path to the config file (~/.config/clipcheck/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config.
    pub fn path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME));
        }
        dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Loads the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
