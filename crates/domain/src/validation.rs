//! Field constraints and the name/description rule.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::input::{PointOfInterestForCreation, PointOfInterestForUpdate};

/// Longest accepted point of interest name, in characters.
pub const NAME_MAX_LENGTH: usize = 50;

/// Longest accepted point of interest description, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

pub const NAME_FIELD: &str = "Name";
pub const DESCRIPTION_FIELD: &str = "Description";

pub const NAME_REQUIRED: &str = "You should provide a name value.";
pub const DESCRIPTION_SAME_AS_NAME: &str =
    "The provided description should be different from the name";

/// The cross-field rule shared by create, replace and patch.
///
/// Comparison is exact: case and whitespace matter.
pub fn is_valid(name: &str, description: &str) -> bool {
    name != description
}

/// Field-level validation failures, keyed by field name.
///
/// Serializes as `{"Field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set with one message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Types that can check their own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

fn validate_point_of_interest(name: &str, description: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if name.trim().is_empty() {
        errors.add(NAME_FIELD, NAME_REQUIRED);
    } else if name.chars().count() > NAME_MAX_LENGTH {
        errors.add(
            NAME_FIELD,
            format!("The field {NAME_FIELD} must be at most {NAME_MAX_LENGTH} characters long."),
        );
    }

    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        errors.add(
            DESCRIPTION_FIELD,
            format!(
                "The field {DESCRIPTION_FIELD} must be at most {DESCRIPTION_MAX_LENGTH} characters long."
            ),
        );
    }

    if !is_valid(name, description) {
        errors.add(DESCRIPTION_FIELD, DESCRIPTION_SAME_AS_NAME);
    }

    errors.into_result()
}

impl Validate for PointOfInterestForCreation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_point_of_interest(&self.name, &self.description)
    }
}

impl Validate for PointOfInterestForUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_point_of_interest(&self.name, &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_name_and_description_is_invalid() {
        assert!(!is_valid("Same", "Same"));
        assert!(is_valid("Same", "same"));
        assert!(is_valid("Same", "Same "));
    }

    #[test]
    fn cross_field_violation_is_keyed_to_description() {
        let errors = PointOfInterestForCreation::new("X", "X").validate().unwrap_err();
        assert_eq!(
            errors.field(DESCRIPTION_FIELD),
            Some(&[DESCRIPTION_SAME_AS_NAME.to_string()][..])
        );
        assert!(errors.field(NAME_FIELD).is_none());
    }

    #[test]
    fn name_is_required() {
        let errors = PointOfInterestForCreation::new("", "Something").validate().unwrap_err();
        assert_eq!(errors.field(NAME_FIELD), Some(&[NAME_REQUIRED.to_string()][..]));
    }

    #[test]
    fn empty_name_and_description_reports_both() {
        let errors = PointOfInterestForUpdate::new("", "").validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec![DESCRIPTION_FIELD, NAME_FIELD]);
    }

    #[test]
    fn length_limits_count_characters() {
        let name = "é".repeat(NAME_MAX_LENGTH);
        assert!(PointOfInterestForCreation::new(name, "d").validate().is_ok());

        let too_long = "n".repeat(NAME_MAX_LENGTH + 1);
        let errors = PointOfInterestForCreation::new(too_long, "d").validate().unwrap_err();
        assert!(errors.field(NAME_FIELD).is_some());

        let description = "d".repeat(DESCRIPTION_MAX_LENGTH + 1);
        let errors = PointOfInterestForUpdate::new("n", description).validate().unwrap_err();
        assert!(errors.field(DESCRIPTION_FIELD).is_some());
    }

    #[test]
    fn empty_description_is_allowed() {
        assert!(PointOfInterestForCreation::new("Name", "").validate().is_ok());
    }

    #[test]
    fn serializes_as_field_map() {
        let errors = ValidationErrors::single(DESCRIPTION_FIELD, DESCRIPTION_SAME_AS_NAME);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Description": [DESCRIPTION_SAME_AS_NAME] })
        );
        assert_eq!(
            errors.to_string(),
            format!("Description: {DESCRIPTION_SAME_AS_NAME}")
        );
    }
}
