use thiserror::Error;

use crate::{CityId, PointOfInterestId};

/// Errors that can occur when interacting with the city store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No city with the given id exists.
    #[error("City not found: {0}")]
    CityNotFound(CityId),

    /// The city exists but holds no point of interest with the given id.
    #[error("Point of interest {point_of_interest_id} not found in city {city_id}")]
    PointOfInterestNotFound {
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    },

    /// Every point of interest id has been handed out.
    #[error("No point of interest id left after {0}")]
    IdsExhausted(PointOfInterestId),

    /// The backing storage could not serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for city store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
