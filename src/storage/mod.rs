//! Persistence gateway: load/save of whole record collections.

pub mod gateway;
pub mod json_file;
pub mod memory;

pub use gateway::Gateway;
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::domain::error::StoreError;

/// Raw storage for serialized collections, one resource per collection name.
///
/// Backends only move text around; encoding and the fail-soft load policy
/// live in [`Gateway`].
pub trait StoreBackend {
    /// Returns the stored text, or `None` when the collection has never been written.
    fn read(&self, collection: &'static str) -> Result<Option<String>, StoreError>;

    /// Replaces the stored text for `collection`.
    fn write(&self, collection: &'static str, contents: &str) -> Result<(), StoreError>;

    /// Where the collection lives, for log messages.
    fn location(&self, collection: &'static str) -> String;
}
