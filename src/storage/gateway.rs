//! Typed load/save over a [`StoreBackend`].

use std::rc::Rc;

use tracing::{debug, warn};

use super::StoreBackend;
use crate::domain::error::StoreError;
use crate::domain::model::Record;

/// Loads and saves whole collections of a [`Record`] type.
///
/// Cloning is cheap; both registries share one gateway.
#[derive(Clone)]
pub struct Gateway {
    backend: Rc<dyn StoreBackend>,
}

impl Gateway {
    pub fn new(backend: Rc<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Loads a collection. Never fails:
    /// - a missing collection is initialised empty and an empty list returned;
    /// - an unreadable or malformed collection is logged and treated as empty.
    ///
    /// A malformed file is left as-is so it can be repaired by hand; it is
    /// overwritten by the next successful save.
    pub fn load<R: Record>(&self) -> Vec<R> {
        let location = self.backend.location(R::COLLECTION);
        let raw = match self.backend.read(R::COLLECTION) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(
                    collection = R::COLLECTION,
                    %location,
                    "no stored collection, initialising empty"
                );
                if let Err(e) = self.save::<R>(&[]) {
                    warn!(
                        collection = R::COLLECTION,
                        error = %e,
                        "failed to initialise empty collection"
                    );
                }
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    collection = R::COLLECTION,
                    error = %e,
                    "failed to read collection, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => {
                debug!(
                    collection = R::COLLECTION,
                    count = records.len(),
                    %location,
                    "loaded collection"
                );
                records
            }
            Err(e) => {
                warn!(
                    collection = R::COLLECTION,
                    %location,
                    error = %e,
                    "stored collection is malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection with `records`.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            collection: R::COLLECTION,
            source,
        })?;
        self.backend.write(R::COLLECTION, &contents)?;
        debug!(collection = R::COLLECTION, count = records.len(), "saved collection");
        Ok(())
    }
}
