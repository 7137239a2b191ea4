//! Client-supplied point of interest representations.
//!
//! Neither type carries an id: ids are assigned by the store and never
//! change afterwards. Missing fields deserialize as empty strings so that
//! they are reported by field validation instead of failing to parse.

use serde::{Deserialize, Serialize};
use store::{PointOfInterest, PointOfInterestFields};

/// Body of a create (POST) or full replace (PUT) request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointOfInterestForCreation {
    pub name: String,
    pub description: String,
}

impl PointOfInterestForCreation {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<PointOfInterestForCreation> for PointOfInterestFields {
    fn from(input: PointOfInterestForCreation) -> Self {
        PointOfInterestFields::new(input.name, input.description)
    }
}

/// Patchable view of a stored point of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointOfInterestForUpdate {
    pub name: String,
    pub description: String,
}

impl PointOfInterestForUpdate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&PointOfInterest> for PointOfInterestForUpdate {
    fn from(poi: &PointOfInterest) -> Self {
        Self::new(poi.name.clone(), poi.description.clone())
    }
}

impl From<PointOfInterestForUpdate> for PointOfInterestFields {
    fn from(view: PointOfInterestForUpdate) -> Self {
        PointOfInterestFields::new(view.name, view.description)
    }
}
