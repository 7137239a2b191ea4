//! Partial-update documents for points of interest.
//!
//! Only `name` and `description` can be patched. Two document formats are
//! accepted: an RFC 6902 JSON Patch (a list of operations) and a merge
//! patch (an object with optional fields). Both are applied to a
//! [`PointOfInterestForUpdate`] view, never to the stored entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::input::PointOfInterestForUpdate;
use crate::validation::ValidationErrors;

/// A patchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    Name,
    Description,
}

impl PatchField {
    fn get(self, view: &PointOfInterestForUpdate) -> &str {
        match self {
            PatchField::Name => &view.name,
            PatchField::Description => &view.description,
        }
    }

    fn set(self, view: &mut PointOfInterestForUpdate, value: String) {
        match self {
            PatchField::Name => view.name = value,
            PatchField::Description => view.description = value,
        }
    }
}

impl FromStr for PatchField {
    type Err = PatchError;

    /// Parses a JSON Pointer such as `/name`. Matching is case-insensitive.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segment = path
            .strip_prefix('/')
            .ok_or_else(|| PatchError::InvalidPath(path.to_string()))?;

        if segment.eq_ignore_ascii_case("name") {
            Ok(PatchField::Name)
        } else if segment.eq_ignore_ascii_case("description") {
            Ok(PatchField::Description)
        } else {
            Err(PatchError::UnknownPath(path.to_string()))
        }
    }
}

impl fmt::Display for PatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchField::Name => write!(f, "/name"),
            PatchField::Description => write!(f, "/description"),
        }
    }
}

/// Structural failures while applying a patch document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The path is not a JSON Pointer.
    #[error("The path '{0}' is not a valid JSON Pointer.")]
    InvalidPath(String),

    /// The path points at something that cannot be patched.
    #[error("The target location specified by path '{0}' was not found.")]
    UnknownPath(String),

    /// The value is neither a string nor null.
    #[error("The value for path '{0}' must be a string.")]
    InvalidValue(String),

    /// A `test` operation did not match the current value.
    #[error("The current value at path '{0}' is not equal to the test value.")]
    TestFailed(String),
}

impl PatchError {
    /// Key under which structural patch errors are reported.
    pub const FIELD: &'static str = "PointOfInterestForUpdate";
}

impl From<PatchError> for ValidationErrors {
    fn from(err: PatchError) -> Self {
        ValidationErrors::single(PatchError::FIELD, err.to_string())
    }
}

/// One RFC 6902 operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// Strings are taken as is, null clears the field.
fn string_value(path: &str, value: &Value) -> Result<String, PatchError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        _ => Err(PatchError::InvalidValue(path.to_string())),
    }
}

impl PatchOperation {
    pub fn replace(field: PatchField, value: impl Into<String>) -> Self {
        PatchOperation::Replace {
            path: field.to_string(),
            value: Value::String(value.into()),
        }
    }

    pub fn remove(field: PatchField) -> Self {
        PatchOperation::Remove {
            path: field.to_string(),
        }
    }

    fn apply(&self, view: &mut PointOfInterestForUpdate) -> Result<(), PatchError> {
        match self {
            // Both fields always exist, so add and replace coincide.
            PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
                let field: PatchField = path.parse()?;
                field.set(view, string_value(path, value)?);
            }
            PatchOperation::Remove { path } => {
                let field: PatchField = path.parse()?;
                field.set(view, String::new());
            }
            PatchOperation::Move { from, path } => {
                let source: PatchField = from.parse()?;
                let target: PatchField = path.parse()?;
                if source != target {
                    let value = source.get(view).to_string();
                    source.set(view, String::new());
                    target.set(view, value);
                }
            }
            PatchOperation::Copy { from, path } => {
                let source: PatchField = from.parse()?;
                let target: PatchField = path.parse()?;
                let value = source.get(view).to_string();
                target.set(view, value);
            }
            PatchOperation::Test { path, value } => {
                let field: PatchField = path.parse()?;
                if field.get(view) != string_value(path, value)? {
                    return Err(PatchError::TestFailed(path.clone()));
                }
            }
        }
        Ok(())
    }
}

/// An RFC 6902 JSON Patch document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPatchDocument(pub Vec<PatchOperation>);

impl JsonPatchDocument {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    /// Applies every operation in order. On error the view is left unchanged.
    pub fn apply_to(&self, view: &mut PointOfInterestForUpdate) -> Result<(), PatchError> {
        let mut patched = view.clone();
        for operation in &self.0 {
            operation.apply(&mut patched)?;
        }
        *view = patched;
        Ok(())
    }
}

/// A merge patch: present fields overwrite, absent fields stay untouched
/// and `null` clears a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PointOfInterestPatch {
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

/// Only runs for members present in the document, so `null` maps to
/// `Some(None)` while a missing member keeps the `None` default.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl PointOfInterestPatch {
    pub fn apply_to(&self, view: &mut PointOfInterestForUpdate) {
        if let Some(name) = &self.name {
            view.name = name.clone().unwrap_or_default();
        }
        if let Some(description) = &self.description {
            view.description = description.clone().unwrap_or_default();
        }
    }
}

/// Either supported patch format.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchDocument {
    JsonPatch(JsonPatchDocument),
    Merge(PointOfInterestPatch),
}

impl PatchDocument {
    pub fn apply_to(&self, view: &mut PointOfInterestForUpdate) -> Result<(), PatchError> {
        match self {
            PatchDocument::JsonPatch(document) => document.apply_to(view),
            PatchDocument::Merge(patch) => {
                patch.apply_to(view);
                Ok(())
            }
        }
    }
}

impl From<JsonPatchDocument> for PatchDocument {
    fn from(document: JsonPatchDocument) -> Self {
        PatchDocument::JsonPatch(document)
    }
}

impl From<PointOfInterestPatch> for PatchDocument {
    fn from(patch: PointOfInterestPatch) -> Self {
        PatchDocument::Merge(patch)
    }
}
