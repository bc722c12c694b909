//! Record store trait and factory.
//!
//! This module defines the `RecordStore` trait that all storage backends
//! must satisfy, plus the configuration that selects one.
//!
//! # Backends
//!
//! - `MemoryStore`: process-local storage, lost on exit
//! - `FileStore`: memory semantics plus a JSON snapshot on disk
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_store::{create_store, StoreConfig};
//!
//! let config = StoreConfig::default();
//! let store = create_store(&config).await?;
//!
//! let id = store.create("Acme").await?;
//! let project = store.get(id).await?;
//! println!("created {}", project.title);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use portfolio_core::{Error, FieldUpdate, Project, ProjectId, Result};
use serde::{Deserialize, Serialize};

use crate::file::FileStore;
use crate::memory::MemoryStore;

/// Shared handle to a record store backend.
///
/// Cheap to clone; every component holding one sees the same records.
pub type StoreHandle = Arc<dyn RecordStore>;

/// Keyed storage of project records.
///
/// Implementations guarantee read-after-write consistency on a single id:
/// a read never observes a partially-written record. Ids are assigned in
/// ascending order starting at 1 and are never reused. Deletion is not
/// part of the contract.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Allocates a new record with the given title and default fields,
    /// returning its id.
    async fn create(&self, title: &str) -> Result<ProjectId>;

    /// Returns the record with the given id, or [`Error::NotFound`].
    async fn get(&self, id: ProjectId) -> Result<Project>;

    /// Returns every stored record in ascending id order.
    async fn list_all(&self) -> Result<Vec<Project>>;

    /// Overwrites both mutable fields of an existing record in one step.
    ///
    /// Fails with [`Error::NotFound`] if no record has this id.
    async fn update(&self, id: ProjectId, fields: FieldUpdate) -> Result<()>;
}

/// Store configuration.
///
/// Selects and parameterizes the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend type: "memory" or "file".
    #[serde(default)]
    pub backend: StoreBackend,

    /// Path to the JSON snapshot (file backend only).
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

/// Available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map, lost on exit.
    #[default]
    Memory,
    /// JSON snapshot on disk, reloaded on open.
    File,
}

/// Creates the record store backend described by `config`.
///
/// The file backend requires `snapshot_path`; a missing path is a
/// configuration error.
pub async fn create_store(config: &StoreConfig) -> Result<StoreHandle> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("using in-memory record store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::File => {
            let path = config
                .snapshot_path
                .as_ref()
                .ok_or_else(|| Error::config("file backend requires store.snapshot_path"))?;
            tracing::info!(path = %path.display(), "using file-backed record store");
            Ok(Arc::new(FileStore::open(path.clone()).await?))
        }
    }
}
