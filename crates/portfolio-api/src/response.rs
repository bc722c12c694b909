//! The wire shape served to API clients.

use portfolio_core::Project;
use serde::{Deserialize, Serialize};

/// One project as it appears on the wire.
///
/// Field names are part of the published contract — in particular the
/// record title is served as `post_title` and the id as `ID` — so they are
/// pinned with serde renames rather than following Rust naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Record id.
    #[serde(rename = "ID")]
    pub id: u64,

    /// Record title.
    pub post_title: String,

    /// Free-form description.
    pub description: String,

    /// Founding year.
    pub founded: i64,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.as_u64(),
            post_title: project.title,
            description: project.description,
            founded: project.founded,
        }
    }
}
