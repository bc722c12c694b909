//! Router and request handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use portfolio_core::ProjectId;
use portfolio_store::{RecordStore, StoreHandle};

use crate::error::ApiError;
use crate::response::ProjectResponse;

/// Builds the read-only router over the given store.
///
/// Only GET is routed; other methods on these paths receive 405.
pub fn router(store: StoreHandle) -> Router {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{id}", get(get_project))
        .with_state(store)
}

/// `GET /projects` — every record, ascending by id.
async fn list_projects(
    State(store): State<StoreHandle>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = store.list_all().await?;
    tracing::debug!(count = projects.len(), "serving project listing");
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// `GET /projects/{id}` — a single record.
///
/// Id 0 never names a record (allocation starts at 1) and is treated as an
/// absent id, serving the full listing instead.
async fn get_project(
    State(store): State<StoreHandle>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    if id == 0 {
        return Ok(list_projects(State(store)).await?.into_response());
    }

    let project = store.get(ProjectId::new(id)).await?;
    Ok(Json(ProjectResponse::from(project)).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use portfolio_store::{MemoryStore, RecordStore, WritePath};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn seeded_store() -> StoreHandle {
        let store: StoreHandle = Arc::new(MemoryStore::new());
        for title in ["one", "two", "three"] {
            store.create(title).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_list_returns_every_record_in_wire_shape() {
        let app = router(seeded_store().await);
        let (status, json) = get_json(app, "/projects").await;

        assert_eq!(status, StatusCode::OK);
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["ID"], 1);
        assert_eq!(items[0]["post_title"], "one");
        assert_eq!(items[0]["description"], "");
        assert_eq!(items[0]["founded"], 0);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_single_object() {
        let app = router(seeded_store().await);
        let (status, json) = get_json(app, "/projects/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ID"], 2);
        assert_eq!(json["post_title"], "two");
    }

    #[tokio::test]
    async fn test_unknown_id_is_404_with_error_body() {
        let app = router(seeded_store().await);
        let (status, json) = get_json(app, "/projects/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["category"], "not_found");
    }

    #[tokio::test]
    async fn test_id_zero_serves_full_listing() {
        let app = router(seeded_store().await);
        let (status, json) = get_json(app, "/projects/0").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_post_is_not_accepted() {
        let app = router(seeded_store().await);
        let response = app
            .oneshot(
                Request::post("/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_end_to_end_create_apply_read() {
        let store: StoreHandle = Arc::new(MemoryStore::new());
        let id = store.create("Acme").await.unwrap();
        WritePath::new(store.clone())
            .apply(id, Some("A great company"), Some("2001"))
            .await
            .unwrap();

        let app = router(store);
        let (status, json) = get_json(app, &format!("/projects/{id}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "ID": 1,
                "post_title": "Acme",
                "description": "A great company",
                "founded": 2001,
            })
        );
    }
}
