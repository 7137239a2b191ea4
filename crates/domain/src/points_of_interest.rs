//! Point of interest operations.

use std::sync::Arc;

use common::{CityId, PointOfInterestId};
use notifications::{MailService, dispatch};
use store::{CityStore, PointOfInterest};

use crate::error::DomainError;
use crate::input::{PointOfInterestForCreation, PointOfInterestForUpdate};
use crate::patch::PatchDocument;
use crate::validation::{Validate, ValidationErrors};

/// Subject of the mail sent after a point of interest is deleted.
pub const DELETED_SUBJECT: &str = "Point of interest deleted";

fn deleted_message(point_of_interest: &PointOfInterest) -> String {
    format!(
        "Point of interest {} with id {} was deleted",
        point_of_interest.name, point_of_interest.id
    )
}

fn reject(errors: ValidationErrors) -> DomainError {
    metrics::counter!("validation_failures_total").increment(1);
    DomainError::Validation(errors)
}

/// Service for managing the points of interest of a city.
///
/// Validation runs before any lookup on create and replace. On patch the
/// target is resolved first, since the patch is applied to its current
/// values.
pub struct PointOfInterestService<S: CityStore> {
    store: S,
    mail_service: Arc<dyn MailService>,
}

impl<S: CityStore> PointOfInterestService<S> {
    pub fn new(store: S, mail_service: Arc<dyn MailService>) -> Self {
        Self {
            store,
            mail_service,
        }
    }

    /// Returns the points of interest of a city. No points of interest is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn list_points_of_interest(
        &self,
        city_id: CityId,
    ) -> Result<Vec<PointOfInterest>, DomainError> {
        self.store
            .list_points_of_interest(city_id)
            .await
            .map_err(|e| {
                let err = DomainError::from(e);
                match &err {
                    DomainError::CityNotFound(_) => tracing::info!(
                        %city_id,
                        "city wasn't found when accessing points of interest"
                    ),
                    DomainError::Internal(reason) => tracing::error!(
                        %city_id,
                        %reason,
                        "exception while getting points of interest for city"
                    ),
                    _ => {}
                }
                err
            })
    }

    /// Returns one point of interest of a city.
    #[tracing::instrument(skip(self))]
    pub async fn get_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest, DomainError> {
        Ok(self
            .store
            .get_point_of_interest(city_id, point_of_interest_id)
            .await?)
    }

    /// Validates the input and appends a new point of interest with a store-wide id.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_point_of_interest(
        &self,
        city_id: CityId,
        input: PointOfInterestForCreation,
    ) -> Result<PointOfInterest, DomainError> {
        input.validate().map_err(reject)?;

        let created = self
            .store
            .add_point_of_interest(city_id, input.into())
            .await?;

        metrics::counter!("points_of_interest_created_total").increment(1);
        tracing::info!(%city_id, point_of_interest_id = %created.id, "point of interest created");
        Ok(created)
    }

    /// Replaces name and description of an existing point of interest.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
        input: PointOfInterestForCreation,
    ) -> Result<(), DomainError> {
        input.validate().map_err(reject)?;

        self.store
            .update_point_of_interest(city_id, point_of_interest_id, input.into())
            .await?;

        metrics::counter!("points_of_interest_updated_total").increment(1);
        Ok(())
    }

    /// Applies a patch document to the current values and commits the result.
    ///
    /// The patched view is re-validated before anything is written.
    #[tracing::instrument(skip(self, patch))]
    pub async fn partially_update_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
        patch: PatchDocument,
    ) -> Result<(), DomainError> {
        let current = self
            .store
            .get_point_of_interest(city_id, point_of_interest_id)
            .await?;

        let mut view = PointOfInterestForUpdate::from(&current);
        patch
            .apply_to(&mut view)
            .map_err(|e| reject(e.into()))?;
        view.validate().map_err(reject)?;

        // The target may have been removed since it was read.
        self.store
            .update_point_of_interest(city_id, point_of_interest_id, view.into())
            .await?;

        metrics::counter!("points_of_interest_updated_total").increment(1);
        Ok(())
    }

    /// Removes a point of interest and sends a deletion mail in the background.
    ///
    /// The mail outcome never affects the result.
    #[tracing::instrument(skip(self))]
    pub async fn delete_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest, DomainError> {
        let removed = self
            .store
            .remove_point_of_interest(city_id, point_of_interest_id)
            .await?;

        metrics::counter!("points_of_interest_deleted_total").increment(1);
        dispatch(
            self.mail_service.clone(),
            DELETED_SUBJECT,
            deleted_message(&removed),
        );

        Ok(removed)
    }
}
