//! Error taxonomy shared by the registries and the store.

use std::path::PathBuf;
use thiserror::Error;

/// A candidate field value failed its declared constraint.
///
/// Always raised before any mutation: the registry and its store are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },

    #[error("a {entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("teacher {teacher_id} does not exist")]
    UnknownTeacher { teacher_id: u32 },
}

/// The persistence gateway could not read or write a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode collection '{collection}': {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("store for collection '{collection}' is unavailable")]
    Unavailable { collection: &'static str },
}

/// Every failure a registry operation can report to its caller.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    #[error(
        "teacher {teacher_id} is the class teacher of: {}",
        .classrooms.join(", ")
    )]
    Dependency {
        teacher_id: u32,
        classrooms: Vec<String>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The registry was used before its cross-registry lookup was bound.
    #[error("{capability} lookup has not been bound")]
    Unwired { capability: &'static str },

    /// The highest stored id is already `u32::MAX`.
    #[error("no {entity} id left after {}", u32::MAX)]
    IdsExhausted { entity: &'static str },
}

impl RegistryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
