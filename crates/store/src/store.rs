use async_trait::async_trait;

use crate::{City, CityId, PointOfInterest, PointOfInterestFields, PointOfInterestId, Result};

/// Core trait for city store implementations.
///
/// Lookups are by id; a missing city is reported before a missing point of
/// interest. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Returns all cities in store order. An empty store yields an empty list.
    async fn list_cities(&self) -> Result<Vec<City>>;

    /// Returns the city with the given id.
    async fn get_city(&self, city_id: CityId) -> Result<City>;

    /// Returns the points of interest of a city in insertion order.
    async fn list_points_of_interest(&self, city_id: CityId) -> Result<Vec<PointOfInterest>>;

    /// Returns a single point of interest of a city.
    async fn get_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest>;

    /// Allocates a store-wide id and appends a new point of interest to the city.
    ///
    /// Allocation and append are atomic with respect to other writers.
    async fn add_point_of_interest(
        &self,
        city_id: CityId,
        fields: PointOfInterestFields,
    ) -> Result<PointOfInterest>;

    /// Overwrites name and description of an existing point of interest.
    ///
    /// Returns the updated entity.
    async fn update_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
        fields: PointOfInterestFields,
    ) -> Result<PointOfInterest>;

    /// Removes a point of interest from its city and returns it.
    async fn remove_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest>;
}
