//! TOML configuration for the portfolio binary.
//!
//! One file configures both halves of the system:
//!
//! ```toml
//! [store]
//! backend = "file"
//! snapshot_path = "projects.json"
//!
//! [api]
//! host = "0.0.0.0"
//! port = 8750
//! ```
//!
//! Every field has a default, so a missing file or an empty table is valid.

use std::path::Path;

use anyhow::{Context, Result};
use portfolio_api::ApiConfig;
use portfolio_store::{StoreBackend, StoreConfig, StoreHandle};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record store selection.
    #[serde(default = "default_store")]
    pub store: StoreConfig,

    /// Read API listener.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Without a config file the CLI snapshots to the working directory, so
/// separate invocations (an `add` here, a `serve` there) share records.
fn default_store() -> StoreConfig {
    StoreConfig {
        backend: StoreBackend::File,
        snapshot_path: Some("projects.json".into()),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Builds the configured record store.
    pub async fn open_store(&self) -> Result<StoreHandle> {
        Ok(portfolio_store::create_store(&self.store).await?)
    }
}
