use serde::{Deserialize, Serialize};

/// Identifier of a city.
///
/// Cities only come from seed data, so ids are never allocated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(i32);

impl CityId {
    /// Creates a city ID from its raw integer value.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CityId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<CityId> for i32 {
    fn from(id: CityId) -> Self {
        id.0
    }
}

/// Identifier of a point of interest.
///
/// Unique across the whole store, not just within the owning city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointOfInterestId(i32);

impl PointOfInterestId {
    /// Creates a point of interest ID from its raw integer value.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The id handed out when no point of interest exists yet.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Returns the id that follows this one, or `None` past `i32::MAX`.
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the raw integer value.
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PointOfInterestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PointOfInterestId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<PointOfInterestId> for i32 {
    fn from(id: PointOfInterestId) -> Self {
        id.0
    }
}
