//! Domain error types.

use common::{CityId, PointOfInterestId};
use store::StoreError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors that can occur during city and point of interest operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The referenced city does not exist.
    #[error("City not found: {0}")]
    CityNotFound(CityId),

    /// The referenced point of interest does not exist in the city.
    #[error("Point of interest {point_of_interest_id} not found in city {city_id}")]
    PointOfInterestNotFound {
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    },

    /// The input or the patched result broke a field constraint.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Anything the caller cannot fix.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Returns true for either not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::CityNotFound(_) | DomainError::PointOfInterestNotFound { .. }
        )
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CityNotFound(city_id) => DomainError::CityNotFound(city_id),
            StoreError::PointOfInterestNotFound {
                city_id,
                point_of_interest_id,
            } => DomainError::PointOfInterestNotFound {
                city_id,
                point_of_interest_id,
            },
            err @ StoreError::IdsExhausted(_) => DomainError::Internal(err.to_string()),
            StoreError::Unavailable(reason) => DomainError::Internal(reason),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}
