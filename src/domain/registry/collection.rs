use std::cell::RefCell;
use std::rc::Rc;

use super::directory::Directory;
use super::ChangeCallback;
use crate::domain::error::{RegistryError, Result};
use crate::domain::model::Record;
use crate::storage::Gateway;

/// Shared machinery of both registries: the live collection, its gateway
/// and the change subscriber.
pub(crate) struct Collection<R> {
    records: Rc<RefCell<Vec<R>>>,
    gateway: Gateway,
    on_changed: Option<ChangeCallback>,
}

impl<R: Record> Collection<R> {
    pub(crate) fn load(gateway: Gateway) -> Self {
        let records = gateway.load::<R>();
        Self {
            records: Rc::new(RefCell::new(records)),
            gateway,
            on_changed: None,
        }
    }

    pub(crate) fn directory(&self) -> Directory<R> {
        Directory::new(Rc::clone(&self.records))
    }

    pub(crate) fn snapshot(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    pub(crate) fn with<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        f(&self.records.borrow())
    }

    pub(crate) fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub(crate) fn get(&self, id: u32) -> Result<R> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(RegistryError::NotFound {
                entity: R::ENTITY,
                id,
            })
    }

    pub(crate) fn set_on_changed(&mut self, callback: ChangeCallback) {
        self.on_changed = Some(callback);
    }

    /// Persists `next` and only then makes it the live collection.
    ///
    /// On a store failure the live collection is untouched and no
    /// notification fires.
    pub(crate) fn commit(&mut self, next: Vec<R>) -> Result<()> {
        self.gateway.save(&next)?;
        *self.records.borrow_mut() = next;
        if let Some(callback) = self.on_changed.as_mut() {
            callback();
        }
        Ok(())
    }
}
