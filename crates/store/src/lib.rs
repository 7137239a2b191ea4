//! City store for the CityInfo API.
//!
//! Holds every city and its points of interest in process memory. The
//! store is built once at startup (usually from [`seed_cities`]) and shared
//! between request handlers; nothing is persisted.

pub mod allocator;
pub mod error;
pub mod memory;
pub mod model;
pub mod seed;
pub mod store;

pub use allocator::next_point_of_interest_id;
pub use common::{CityId, PointOfInterestId};
pub use error::{Result, StoreError};
pub use memory::InMemoryCityStore;
pub use model::{City, PointOfInterest, PointOfInterestFields};
pub use seed::seed_cities;
pub use store::CityStore;
