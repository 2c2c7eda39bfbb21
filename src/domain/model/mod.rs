//! Record types stored by the registries.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::error::{RegistryError, ValidationError};

pub mod classroom;
pub mod teacher;

pub use classroom::{Classroom, ClassroomDraft};
pub use teacher::{Teacher, TeacherDraft, TEACHER_CATEGORIES};

/// Contract every persisted record fulfils.
///
/// The store works with any record without knowing its fields: the collection
/// name keys the backing resource and serde provides the structural codec.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Name of the backing collection (`teachers`, `classrooms`).
    const COLLECTION: &'static str;

    /// Human readable entity name used in error messages.
    const ENTITY: &'static str;

    /// Registry-assigned identifier.
    fn id(&self) -> u32;

    /// The field that must be unique within the collection.
    fn unique_name(&self) -> &str;
}

/// Canonical form used on both sides of every name comparison.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Next identifier for a collection: current maximum plus one, 1 when empty.
pub fn next_id<R: Record>(records: &[R]) -> Result<u32, RegistryError> {
    records
        .iter()
        .map(Record::id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(RegistryError::IdsExhausted { entity: R::ENTITY })
}

/// Returns true when another record (ignoring `except`) already uses `name`.
pub fn name_taken<R: Record>(records: &[R], name: &str, except: Option<u32>) -> bool {
    let wanted = normalize_name(name);
    records
        .iter()
        .filter(|r| Some(r.id()) != except)
        .any(|r| normalize_name(r.unique_name()) == wanted)
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<i32, ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(value)
}
