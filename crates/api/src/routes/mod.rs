//! HTTP route handlers.

pub mod cities;
pub mod health;
pub mod metrics;
pub mod points_of_interest;

use domain::{CityService, PointOfInterestService};
use store::CityStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CityStore> {
    pub city_service: CityService<S>,
    pub point_of_interest_service: PointOfInterestService<S>,
}
