//! Process-local collections shared between request handlers.
//!
//! Contents live only as long as the process. The lock exists so the collection can be
//! shared across tokio worker threads; it gives no ordering guarantees between requests.

use crate::{DashboardError, DashboardResult};
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub(crate) struct MemoryStore<T> {
    name: &'static str,
    items: Arc<RwLock<Vec<T>>>,
}

// Manual impl: cloning shares the collection and must not require `T: Clone`.
impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> MemoryStore<T> {
    pub(crate) fn new(name: &'static str, items: Vec<T>) -> Self {
        Self {
            name,
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> DashboardResult<R> {
        let guard = self
            .items
            .read()
            .map_err(|_| DashboardError::StatePoisoned(self.name))?;
        Ok(f(&guard))
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> DashboardResult<R> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| DashboardError::StatePoisoned(self.name))?;
        Ok(f(&mut guard))
    }
}
