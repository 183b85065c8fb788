//! # Configuration
//!
//! Resolves the probe configuration once at startup: token from the
//! environment, everything else from CLI flags, then the config file,
//! then built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod file;

use std::{fmt, io, path::PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub use self::file::{set_home_override, FileConfig};
use crate::constants::{API_BASE_PATH, DEFAULT_COLLECTION_ID, DEFAULT_DOMAIN, TOKEN_ENV_VAR};

/// Configuration failures, all raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} not set", TOKEN_ENV_VAR)]
    MissingToken,

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// What the probe does when the target collection is not accessible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatePolicy {
    /// Prompt on a terminal; behaves like `no` otherwise
    #[default]
    Ask,
    /// Always create a test collection
    Yes,
    /// Never create a test collection
    No,
}

/// Values supplied on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub domain: Option<String>,
    pub collection_id: Option<i64>,
    pub base_url: Option<String>,
    pub create_collection: Option<CreatePolicy>,
}

/// Fully resolved probe configuration. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    token: String,
    domain: String,
    collection_id: i64,
    base_url: String,
    create_collection: CreatePolicy,
}

impl ProbeConfig {
    /// Resolves configuration from the process environment and config file.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).ok();
        let file = FileConfig::load()?;
        Self::resolve(token, overrides, file)
    }

    /// Merges the token, CLI overrides, and file settings.
    ///
    /// Priority: CLI flag > config file > built-in default.
    /// An empty or whitespace-only token counts as missing.
    pub fn resolve(
        token: Option<String>,
        overrides: ConfigOverrides,
        file: FileConfig,
    ) -> Result<Self, ConfigError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        // A domain given on the command line outranks a file base_url.
        let file_base_url = file.base_url.filter(|_| overrides.domain.is_none());

        let domain = overrides
            .domain
            .or(file.domain)
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());

        let base_url = overrides
            .base_url
            .or(file_base_url)
            .unwrap_or_else(|| format!("https://{domain}{API_BASE_PATH}"));

        Ok(Self {
            token,
            collection_id: overrides
                .collection_id
                .or(file.collection_id)
                .unwrap_or(DEFAULT_COLLECTION_ID),
            create_collection: overrides
                .create_collection
                .or(file.create_collection)
                .unwrap_or_default(),
            domain,
            base_url,
        })
    }

    /// Builds a configuration directly, mainly for tests and embedding.
    pub fn new(token: impl Into<String>, domain: impl Into<String>, collection_id: i64) -> Self {
        let domain = domain.into();
        Self {
            token: token.into(),
            base_url: format!("https://{domain}{API_BASE_PATH}"),
            domain,
            collection_id,
            create_collection: CreatePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_collection = policy;
        self
    }

    /// The bearer token. Never print this.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub const fn collection_id(&self) -> i64 {
        self.collection_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn create_collection(&self) -> CreatePolicy {
        self.create_collection
    }
}

impl fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("token", &format_args!("<{} chars>", self.token.len()))
            .field("domain", &self.domain)
            .field("collection_id", &self.collection_id)
            .field("base_url", &self.base_url)
            .field("create_collection", &self.create_collection)
            .finish()
    }
}
