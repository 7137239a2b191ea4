//! Read-only city operations.

use common::CityId;
use store::{City, CityStore};

use crate::error::DomainError;

/// Service for reading cities.
pub struct CityService<S: CityStore> {
    store: S,
}

impl<S: CityStore> CityService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every city in store order. No cities is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        Ok(self.store.list_cities().await?)
    }

    /// Returns the city with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn get_city(&self, city_id: CityId) -> Result<City, DomainError> {
        Ok(self.store.get_city(city_id).await?)
    }
}
