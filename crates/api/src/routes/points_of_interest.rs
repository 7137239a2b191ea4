//! Point of interest endpoints, nested under a city.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use common::{CityId, PointOfInterestId};
use domain::{JsonPatchDocument, PatchDocument, PointOfInterestForCreation, PointOfInterestPatch};
use serde::Serialize;
use store::{CityStore, PointOfInterest};

use super::AppState;
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath};

const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestResponse {
    pub id: PointOfInterestId,
    pub name: String,
    pub description: String,
}

impl From<PointOfInterest> for PointOfInterestResponse {
    fn from(poi: PointOfInterest) -> Self {
        Self {
            id: poi.id,
            name: poi.name,
            description: poi.description,
        }
    }
}

/// Path at which a point of interest can be fetched.
pub fn location(city_id: CityId, point_of_interest_id: PointOfInterestId) -> String {
    format!("/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}")
}

/// Picks the patch format from the content type: merge patch when asked
/// for explicitly, JSON Patch otherwise.
pub fn parse_patch_document(headers: &HeaderMap, body: &[u8]) -> Result<PatchDocument, ApiError> {
    let is_merge_patch = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(MERGE_PATCH_CONTENT_TYPE));

    let document = if is_merge_patch {
        serde_json::from_slice::<PointOfInterestPatch>(body).map(PatchDocument::from)
    } else {
        serde_json::from_slice::<JsonPatchDocument>(body).map(PatchDocument::from)
    };

    document.map_err(|e| ApiError::BadRequest(format!("Invalid patch document: {e}")))
}

/// GET /api/cities/:cityId/pointsofinterest: all points of interest of a city.
#[tracing::instrument(skip(state))]
pub async fn list<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(city_id): AppPath<CityId>,
) -> Result<Json<Vec<PointOfInterestResponse>>, ApiError> {
    let points_of_interest = state
        .point_of_interest_service
        .list_points_of_interest(city_id)
        .await?;

    Ok(Json(
        points_of_interest
            .into_iter()
            .map(PointOfInterestResponse::from)
            .collect(),
    ))
}

/// GET /api/cities/:cityId/pointsofinterest/:id: a single point of interest.
#[tracing::instrument(skip(state))]
pub async fn get<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath((city_id, id)): AppPath<(CityId, PointOfInterestId)>,
) -> Result<Json<PointOfInterestResponse>, ApiError> {
    let poi = state
        .point_of_interest_service
        .get_point_of_interest(city_id, id)
        .await?;
    Ok(Json(PointOfInterestResponse::from(poi)))
}

/// POST /api/cities/:cityId/pointsofinterest: create a point of interest.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(city_id): AppPath<CityId>,
    AppJson(req): AppJson<PointOfInterestForCreation>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .point_of_interest_service
        .create_point_of_interest(city_id, req)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(city_id, created.id))],
        Json(PointOfInterestResponse::from(created)),
    ))
}

/// PUT /api/cities/:cityId/pointsofinterest/:id: replace name and description.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath((city_id, id)): AppPath<(CityId, PointOfInterestId)>,
    AppJson(req): AppJson<PointOfInterestForCreation>,
) -> Result<StatusCode, ApiError> {
    state
        .point_of_interest_service
        .update_point_of_interest(city_id, id, req)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/cities/:cityId/pointsofinterest/:id: apply a patch document.
#[tracing::instrument(skip(state, headers, body))]
pub async fn partially_update<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath((city_id, id)): AppPath<(CityId, PointOfInterestId)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let patch = parse_patch_document(&headers, &body)?;
    state
        .point_of_interest_service
        .partially_update_point_of_interest(city_id, id, patch)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/cities/:cityId/pointsofinterest/:id: remove and notify.
#[tracing::instrument(skip(state))]
pub async fn delete<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath((city_id, id)): AppPath<(CityId, PointOfInterestId)>,
) -> Result<StatusCode, ApiError> {
    state
        .point_of_interest_service
        .delete_point_of_interest(city_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
