//! The write path: raw form fields applied to an existing record.

use portfolio_core::{FieldUpdate, ProjectId, Result};

use crate::store::{RecordStore, StoreHandle};

/// Applies edit-form submissions to the record store.
///
/// Fields arrive as raw strings exactly as the form posted them, on every
/// save and whether or not they changed. Coercion is permissive: a
/// non-numeric founding year becomes 0 rather than an error. The only
/// failure is an unknown id.
#[derive(Clone)]
pub struct WritePath {
    store: StoreHandle,
}

impl WritePath {
    /// Creates a write path over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Coerces the raw fields and overwrites the record in one store call.
    ///
    /// Idempotent: re-applying the same input leaves the same stored state.
    pub async fn apply(
        &self,
        id: ProjectId,
        description: Option<&str>,
        founded: Option<&str>,
    ) -> Result<()> {
        let fields = FieldUpdate::from_raw(description, founded);
        tracing::debug!(%id, founded = fields.founded, "applying field update");
        self.store.update(id, fields).await
    }
}
