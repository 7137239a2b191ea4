use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    City, CityId, PointOfInterest, PointOfInterestFields, PointOfInterestId, Result, StoreError,
    allocator::next_point_of_interest_id, seed::seed_cities, store::CityStore,
};

/// In-memory city store.
///
/// Clones share the same underlying data. Every mutation runs under a single
/// write guard, so id allocation and append cannot interleave between
/// concurrent writers.
#[derive(Clone, Default)]
pub struct InMemoryCityStore {
    cities: Arc<RwLock<Vec<City>>>,
}

impl InMemoryCityStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given cities.
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities: Arc::new(RwLock::new(cities)),
        }
    }

    /// Creates a store populated with the fixed seed data.
    pub fn seeded() -> Self {
        Self::with_cities(seed_cities())
    }

    /// Returns the number of points of interest across all cities.
    pub async fn point_of_interest_count(&self) -> usize {
        self.cities
            .read()
            .await
            .iter()
            .map(City::number_of_points_of_interest)
            .sum()
    }
}

fn find_city(cities: &[City], city_id: CityId) -> Result<&City> {
    cities
        .iter()
        .find(|c| c.id == city_id)
        .ok_or(StoreError::CityNotFound(city_id))
}

fn find_city_mut(cities: &mut [City], city_id: CityId) -> Result<&mut City> {
    cities
        .iter_mut()
        .find(|c| c.id == city_id)
        .ok_or(StoreError::CityNotFound(city_id))
}

fn not_found(city_id: CityId, point_of_interest_id: PointOfInterestId) -> StoreError {
    StoreError::PointOfInterestNotFound {
        city_id,
        point_of_interest_id,
    }
}

#[async_trait]
impl CityStore for InMemoryCityStore {
    async fn list_cities(&self) -> Result<Vec<City>> {
        Ok(self.cities.read().await.clone())
    }

    async fn get_city(&self, city_id: CityId) -> Result<City> {
        let cities = self.cities.read().await;
        find_city(&cities, city_id).cloned()
    }

    async fn list_points_of_interest(&self, city_id: CityId) -> Result<Vec<PointOfInterest>> {
        let cities = self.cities.read().await;
        Ok(find_city(&cities, city_id)?.points_of_interest.clone())
    }

    async fn get_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest> {
        let cities = self.cities.read().await;
        find_city(&cities, city_id)?
            .point_of_interest(point_of_interest_id)
            .cloned()
            .ok_or_else(|| not_found(city_id, point_of_interest_id))
    }

    async fn add_point_of_interest(
        &self,
        city_id: CityId,
        fields: PointOfInterestFields,
    ) -> Result<PointOfInterest> {
        let mut cities = self.cities.write().await;

        // Resolve the city first so a miss does not depend on allocation.
        find_city(&cities, city_id)?;
        let id = next_point_of_interest_id(&cities)?;

        let point_of_interest = PointOfInterest::new(id, fields.name, fields.description);
        find_city_mut(&mut cities, city_id)?
            .points_of_interest
            .push(point_of_interest.clone());

        tracing::debug!(%city_id, point_of_interest_id = %id, "point of interest added");
        Ok(point_of_interest)
    }

    async fn update_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
        fields: PointOfInterestFields,
    ) -> Result<PointOfInterest> {
        let mut cities = self.cities.write().await;
        let point_of_interest = find_city_mut(&mut cities, city_id)?
            .point_of_interest_mut(point_of_interest_id)
            .ok_or_else(|| not_found(city_id, point_of_interest_id))?;

        point_of_interest.apply(fields);
        Ok(point_of_interest.clone())
    }

    async fn remove_point_of_interest(
        &self,
        city_id: CityId,
        point_of_interest_id: PointOfInterestId,
    ) -> Result<PointOfInterest> {
        let mut cities = self.cities.write().await;
        find_city_mut(&mut cities, city_id)?
            .remove_point_of_interest(point_of_interest_id)
            .ok_or_else(|| not_found(city_id, point_of_interest_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_city_store() -> InMemoryCityStore {
        InMemoryCityStore::with_cities(vec![
            City::new(CityId::new(1), "Bruges", "Canals").with_point_of_interest(
                PointOfInterest::new(PointOfInterestId::new(1), "A", "B"),
            ),
            City::new(CityId::new(2), "Leuven", "University"),
        ])
    }

    #[tokio::test]
    async fn list_cities_on_empty_store() {
        let store = InMemoryCityStore::new();
        assert!(store.list_cities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_store_has_three_cities() {
        let store = InMemoryCityStore::seeded();
        let cities = store.list_cities().await.unwrap();

        let names: Vec<_> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["New York City", "Antwerp", "Paris"]);
        assert_eq!(store.point_of_interest_count().await, 6);
    }

    #[tokio::test]
    async fn get_city_not_found() {
        let store = single_city_store();
        let result = store.get_city(CityId::new(99)).await;
        assert_eq!(result, Err(StoreError::CityNotFound(CityId::new(99))));
    }

    #[tokio::test]
    async fn list_points_of_interest_of_city_without_any() {
        let store = single_city_store();
        let pois = store.list_points_of_interest(CityId::new(2)).await.unwrap();
        assert!(pois.is_empty());
    }

    #[tokio::test]
    async fn get_point_of_interest_reports_city_before_poi() {
        let store = single_city_store();

        let missing_city = store
            .get_point_of_interest(CityId::new(9), PointOfInterestId::new(1))
            .await;
        assert_eq!(missing_city, Err(StoreError::CityNotFound(CityId::new(9))));

        let missing_poi = store
            .get_point_of_interest(CityId::new(2), PointOfInterestId::new(1))
            .await;
        assert!(matches!(
            missing_poi,
            Err(StoreError::PointOfInterestNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn add_allocates_globally_unique_ids() {
        let store = single_city_store();

        let first = store
            .add_point_of_interest(CityId::new(2), PointOfInterestFields::new("X", "Y"))
            .await
            .unwrap();
        let second = store
            .add_point_of_interest(CityId::new(1), PointOfInterestFields::new("Z", "W"))
            .await
            .unwrap();

        assert_eq!(first.id, PointOfInterestId::new(2));
        assert_eq!(second.id, PointOfInterestId::new(3));

        let fetched = store
            .get_point_of_interest(CityId::new(2), first.id)
            .await
            .unwrap();
        assert_eq!(fetched, first);
    }

    #[tokio::test]
    async fn add_to_unknown_city_leaves_store_untouched() {
        let store = single_city_store();
        let result = store
            .add_point_of_interest(CityId::new(42), PointOfInterestFields::new("X", "Y"))
            .await;

        assert_eq!(result, Err(StoreError::CityNotFound(CityId::new(42))));
        assert_eq!(store.point_of_interest_count().await, 1);
    }

    #[tokio::test]
    async fn add_fails_once_ids_are_exhausted() {
        let max = PointOfInterestId::new(i32::MAX);
        let store = InMemoryCityStore::with_cities(vec![
            City::new(CityId::new(1), "Full", "")
                .with_point_of_interest(PointOfInterest::new(max, "a", "b")),
        ]);

        let result = store
            .add_point_of_interest(CityId::new(1), PointOfInterestFields::new("X", "Y"))
            .await;

        assert_eq!(result, Err(StoreError::IdsExhausted(max)));
        assert_eq!(store.point_of_interest_count().await, 1);
    }

    #[tokio::test]
    async fn update_overwrites_in_place() {
        let store = single_city_store();
        let updated = store
            .update_point_of_interest(
                CityId::new(1),
                PointOfInterestId::new(1),
                PointOfInterestFields::new("New name", "New description"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, PointOfInterestId::new(1));
        let fetched = store
            .get_point_of_interest(CityId::new(1), PointOfInterestId::new(1))
            .await
            .unwrap();
        assert_eq!(fetched.name, "New name");
        assert_eq!(fetched.description, "New description");
    }

    #[tokio::test]
    async fn remove_then_get_is_not_found() {
        let store = single_city_store();
        let removed = store
            .remove_point_of_interest(CityId::new(1), PointOfInterestId::new(1))
            .await
            .unwrap();
        assert_eq!(removed.name, "A");

        let again = store
            .remove_point_of_interest(CityId::new(1), PointOfInterestId::new(1))
            .await;
        assert!(matches!(again, Err(StoreError::PointOfInterestNotFound { .. })));
        assert_eq!(store.point_of_interest_count().await, 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = single_city_store();
        let clone = store.clone();

        clone
            .add_point_of_interest(CityId::new(1), PointOfInterestFields::new("X", "Y"))
            .await
            .unwrap();

        assert_eq!(store.point_of_interest_count().await, 2);
    }
}
