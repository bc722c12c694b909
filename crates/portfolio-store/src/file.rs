//! File-backed record store backend.
//!
//! Keeps the full record set in memory (same state as the in-memory
//! backend) and writes a JSON snapshot after every mutation. On open the
//! snapshot is reloaded, so records and id allocation survive restarts.

use std::path::PathBuf;

use async_trait::async_trait;
use portfolio_core::{FieldUpdate, Project, ProjectId, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::memory::StoreState;
use crate::store::RecordStore;

/// On-disk snapshot format.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    next_id: Option<ProjectId>,
    #[serde(default)]
    records: Vec<Project>,
}

/// Record store persisted as a JSON snapshot.
///
/// The snapshot is written to a temporary file and renamed into place, so
/// a crash mid-write leaves the previous snapshot intact.
#[derive(Debug)]
pub struct FileStore {
    state: RwLock<StoreState>,
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at `path`, loading the snapshot if one exists.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                tracing::info!(
                    path = %path.display(),
                    records = snapshot.records.len(),
                    "loaded record snapshot"
                );
                StoreState::from_records(snapshot.records, snapshot.next_id)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no snapshot yet, starting empty");
                StoreState::default()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            state: RwLock::new(state),
            path,
        })
    }

    /// Serializes `state` and swaps it into place.
    ///
    /// Called with the write lock held so snapshots never interleave.
    async fn persist(&self, state: &StoreState) -> Result<()> {
        let snapshot = Snapshot {
            next_id: state.next_id(),
            records: state.records(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn create(&self, title: &str) -> Result<ProjectId> {
        let mut state = self.state.write().await;
        let id = state.create(title);
        self.persist(&state).await?;
        tracing::debug!(%id, title, "created project record");
        Ok(id)
    }

    async fn get(&self, id: ProjectId) -> Result<Project> {
        self.state.read().await.get(id)
    }

    async fn list_all(&self) -> Result<Vec<Project>> {
        Ok(self.state.read().await.list_all())
    }

    async fn update(&self, id: ProjectId, fields: FieldUpdate) -> Result<()> {
        let mut state = self.state.write().await;
        state.update(id, fields)?;
        self.persist(&state).await?;
        tracing::debug!(%id, "updated project fields");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("projects.json")
    }

    #[tokio::test]
    async fn test_open_without_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(snapshot_path(&dir)).await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);

        let store = FileStore::open(path.clone()).await.unwrap();
        let id = store.create("Acme").await.unwrap();
        store
            .update(
                id,
                FieldUpdate {
                    description: "A great company".to_string(),
                    founded: 2001,
                },
            )
            .await
            .unwrap();
        drop(store);

        let reopened = FileStore::open(path).await.unwrap();
        let project = reopened.get(id).await.unwrap();
        assert_eq!(project.title, "Acme");
        assert_eq!(project.description, "A great company");
        assert_eq!(project.founded, 2001);
    }

    #[tokio::test]
    async fn test_id_allocation_resumes_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);

        let store = FileStore::open(path.clone()).await.unwrap();
        store.create("one").await.unwrap();
        store.create("two").await.unwrap();
        drop(store);

        let reopened = FileStore::open(path).await.unwrap();
        let id = reopened.create("three").await.unwrap();
        assert_eq!(id, ProjectId::new(3));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = FileStore::open(path).await.unwrap_err();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
