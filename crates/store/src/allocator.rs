//! Point of interest id allocation.

use crate::{City, PointOfInterestId, Result, StoreError};

/// Returns the id for the next point of interest.
///
/// Ids are global: the result is one past the highest id held by any city,
/// or [`PointOfInterestId::first`] when no city has a point of interest.
/// Callers must hold exclusive access to `cities` until the new entry is
/// appended, otherwise two callers can be handed the same id.
pub fn next_point_of_interest_id(cities: &[City]) -> Result<PointOfInterestId> {
    match cities
        .iter()
        .flat_map(|c| c.points_of_interest.iter())
        .map(|p| p.id)
        .max()
    {
        Some(max) => max.next().ok_or(StoreError::IdsExhausted(max)),
        None => Ok(PointOfInterestId::first()),
    }
}
