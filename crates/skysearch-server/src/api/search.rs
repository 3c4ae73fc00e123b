use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use skysearch_core::Coordinates;
use skysearch_resolver::{SearchOutcome, SessionContext};

use crate::middleware::{RequestId, SessionAuth};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ResolveRequest {
    query: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Runs one free-text query through the resolution pipeline.
///
/// Pipeline failures are not HTTP errors: they come back as a
/// `success: false` outcome with a user-facing message. Only malformed
/// requests produce an [`ApiError`].
pub(super) async fn resolve_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<ResolveRequest>,
) -> Result<Json<ApiResponse<SearchOutcome>>, ApiError> {
    if body.query.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query must not be empty",
        ));
    }

    let coords = match (body.latitude, body.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
        _ => None,
    };

    let session = SessionContext::new(req_id.0.clone(), auth.0);
    let outcome = state.pipeline.run(body.query.trim(), coords, &session).await;

    Ok(Json(ApiResponse {
        data: outcome,
        meta: ResponseMeta::new(req_id.0),
    }))
}
