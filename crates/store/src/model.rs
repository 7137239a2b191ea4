//! Stored entities.

use crate::{CityId, PointOfInterestId};

/// A point of interest owned by exactly one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterest {
    pub id: PointOfInterestId,
    pub name: String,
    pub description: String,
}

impl PointOfInterest {
    /// Creates a point of interest with an already allocated id.
    pub fn new(
        id: PointOfInterestId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Overwrites the mutable fields, keeping the id.
    pub fn apply(&mut self, fields: PointOfInterestFields) {
        self.name = fields.name;
        self.description = fields.description;
    }

    /// Returns the mutable fields as a standalone value.
    pub fn fields(&self) -> PointOfInterestFields {
        PointOfInterestFields::new(self.name.clone(), self.description.clone())
    }
}

/// The mutable part of a point of interest: everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterestFields {
    pub name: String,
    pub description: String,
}

impl PointOfInterestFields {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A city and the points of interest it owns, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub description: String,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Creates a city without points of interest.
    pub fn new(id: CityId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            points_of_interest: Vec::new(),
        }
    }

    /// Builder-style helper used by seed data and tests.
    pub fn with_point_of_interest(mut self, point_of_interest: PointOfInterest) -> Self {
        self.points_of_interest.push(point_of_interest);
        self
    }

    /// Number of points of interest; derived, never stored.
    pub fn number_of_points_of_interest(&self) -> usize {
        self.points_of_interest.len()
    }

    /// First point of interest with the given id.
    pub fn point_of_interest(&self, id: PointOfInterestId) -> Option<&PointOfInterest> {
        self.points_of_interest.iter().find(|p| p.id == id)
    }

    pub(crate) fn point_of_interest_mut(
        &mut self,
        id: PointOfInterestId,
    ) -> Option<&mut PointOfInterest> {
        self.points_of_interest.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn remove_point_of_interest(
        &mut self,
        id: PointOfInterestId,
    ) -> Option<PointOfInterest> {
        let index = self.points_of_interest.iter().position(|p| p.id == id)?;
        Some(self.points_of_interest.remove(index))
    }
}
