//! In-memory store, used by tests and by embedders that persist elsewhere.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::StoreBackend;
use crate::domain::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RefCell<HashMap<&'static str, String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with raw text, bypassing encoding.
    pub fn insert_raw(&self, collection: &'static str, contents: impl Into<String>) {
        self.collections
            .borrow_mut()
            .insert(collection, contents.into());
    }

    pub fn raw(&self, collection: &'static str) -> Option<String> {
        self.collections.borrow().get(collection).cloned()
    }

    /// Makes every following write fail with [`StoreError::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StoreBackend for MemoryBackend {
    fn read(&self, collection: &'static str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(collection))
    }

    fn write(&self, collection: &'static str, contents: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable { collection });
        }
        self.insert_raw(collection, contents);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, collection: &'static str) -> String {
        format!("memory:{collection}")
    }
}
