//! Domain layer for the CityInfo API.
//!
//! This crate provides:
//! - Input types for creating, replacing and patching points of interest
//! - Field validation and the name/description cross-field rule
//! - JSON Patch and merge-patch documents over a closed set of fields
//! - `CityService` and `PointOfInterestService`, the operations the HTTP
//!   layer calls into

pub mod cities;
pub mod error;
pub mod input;
pub mod patch;
pub mod points_of_interest;
pub mod validation;

pub use cities::CityService;
pub use error::DomainError;
pub use input::{PointOfInterestForCreation, PointOfInterestForUpdate};
pub use patch::{
    JsonPatchDocument, PatchDocument, PatchError, PatchField, PatchOperation, PointOfInterestPatch,
};
pub use points_of_interest::{DELETED_SUBJECT, PointOfInterestService};
pub use validation::{Validate, ValidationErrors, is_valid};
