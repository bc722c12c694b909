//! In-memory record store backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use portfolio_core::{Error, FieldUpdate, Project, ProjectId, Result};
use tokio::sync::RwLock;

use crate::store::RecordStore;

/// Record map plus the id counter, shared by the in-memory and file
/// backends. All mutation happens under one write lock, so both fields of
/// an update land together.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    records: BTreeMap<ProjectId, Project>,
    next_id: Option<ProjectId>,
}

impl StoreState {
    pub(crate) fn create(&mut self, title: &str) -> ProjectId {
        let id = self.next_id.unwrap_or_else(ProjectId::first);
        self.records.insert(id, Project::new(id, title));
        self.next_id = Some(id.next());
        id
    }

    pub(crate) fn get(&self, id: ProjectId) -> Result<Project> {
        self.records.get(&id).cloned().ok_or(Error::NotFound { id })
    }

    pub(crate) fn list_all(&self) -> Vec<Project> {
        // BTreeMap iteration is already ascending by id.
        self.records.values().cloned().collect()
    }

    pub(crate) fn update(&mut self, id: ProjectId, fields: FieldUpdate) -> Result<()> {
        let record = self.records.get_mut(&id).ok_or(Error::NotFound { id })?;
        record.description = fields.description;
        record.founded = fields.founded;
        Ok(())
    }

    /// Rebuilds state from previously persisted records.
    ///
    /// Id allocation resumes past the highest restored id, so restored and
    /// fresh records never collide.
    pub(crate) fn from_records(records: Vec<Project>, next_id: Option<ProjectId>) -> Self {
        let records: BTreeMap<ProjectId, Project> =
            records.into_iter().map(|p| (p.id, p)).collect();
        let past_max = records.keys().next_back().map(|id| id.next());
        Self {
            records,
            next_id: next_id.max(past_max),
        }
    }

    pub(crate) fn records(&self) -> Vec<Project> {
        self.list_all()
    }

    pub(crate) fn next_id(&self) -> Option<ProjectId> {
        self.next_id
    }
}

/// Process-local record store.
///
/// Records live only as long as the process; the file backend layers
/// persistence on top of the same state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, title: &str) -> Result<ProjectId> {
        let id = self.state.write().await.create(title);
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
        self.state.write().await.update(id, fields)?;
        tracing::debug!(%id, "updated project fields");
        Ok(())
    }
}
