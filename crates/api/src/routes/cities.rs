//! City endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::CityId;
use serde::Serialize;
use store::{City, CityStore};

use super::AppState;
use super::points_of_interest::PointOfInterestResponse;
use crate::error::ApiError;
use crate::extract::AppPath;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub id: CityId,
    pub name: String,
    pub description: String,
    pub number_of_points_of_interest: usize,
    pub points_of_interest: Vec<PointOfInterestResponse>,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            number_of_points_of_interest: city.number_of_points_of_interest(),
            points_of_interest: city
                .points_of_interest
                .into_iter()
                .map(PointOfInterestResponse::from)
                .collect(),
            name: city.name,
            description: city.description,
        }
    }
}

/// GET /api/cities: list every city with its points of interest.
#[tracing::instrument(skip(state))]
pub async fn list<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<CityResponse>>, ApiError> {
    let cities = state.city_service.list_cities().await?;
    Ok(Json(cities.into_iter().map(CityResponse::from).collect()))
}

/// GET /api/cities/:cityId: a single city.
#[tracing::instrument(skip(state))]
pub async fn get<S: CityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(city_id): AppPath<CityId>,
) -> Result<Json<CityResponse>, ApiError> {
    let city = state.city_service.get_city(city_id).await?;
    Ok(Json(CityResponse::from(city)))
}
