//! Shared identifier types used across the CityInfo crates.

mod types;

pub use types::{CityId, PointOfInterestId};
