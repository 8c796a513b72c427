//! Record repositories.
//!
//! A repository is the only mutation path a screen has; the trait keeps the
//! in-memory fixture store and any future remote-backed store swappable at
//! composition time. Insertion order is preserved because the unsorted
//! table state must show the dataset's existing order.

use cmms_model::Entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};

pub trait Repository<T: Entity> {
    /// Snapshot of all records in insertion order.
    fn list(&self) -> Vec<T>;
    fn get(&self, id: Uuid) -> Option<T>;
    fn insert(&mut self, record: T) -> Result<()>;
    fn update(&mut self, record: T) -> Result<()>;
    fn remove(&mut self, id: Uuid) -> Result<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity + Clone> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Borrowing view for read paths that don't need clones.
    pub fn records(&self) -> &[T] {
        &self.records
    }
}

impl<T: Entity + Clone> Repository<T> for MemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn get(&self, id: Uuid) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    fn insert(&mut self, record: T) -> Result<()> {
        if self.records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::DuplicateId(record.id()));
        }
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<()> {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
        {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id())),
        }
    }

    fn remove(&mut self, id: Uuid) -> Result<T> {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
