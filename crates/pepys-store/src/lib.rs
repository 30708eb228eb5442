//! Pepys Storage Layer
//!
//! Implements the RecordStore trait in process memory.
//!
//! # Architecture
//!
//! - Records keyed by [`RecordId`] in an ordered map behind a shared lock
//! - Clones share the same records, so a store can be handed to several
//!   components (or threads) without copying
//! - Nothing is persisted; dropping the last clone drops the records
//!
//! # Examples
//!
//! ```
//! use pepys_domain::traits::{RecordFilter, RecordStore};
//! use pepys_domain::{EntityReference, EntityType, Record};
//! use pepys_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let record = Record::new(
//!     "journal",
//!     vec![EntityReference::new(EntityType::Person, "Sarah")],
//!     b"{}".to_vec(),
//! );
//! store.save(record).unwrap();
//!
//! let filter = RecordFilter {
//!     entity_identifier: Some("sarah".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(store.query(&filter).unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

use pepys_domain::traits::{RecordFilter, RecordStore};
use pepys_domain::{Record, RecordId};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The shared record map cannot be used
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Record rejected before storage
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// In-memory implementation of RecordStore
///
/// # Thread Safety
///
/// Clones share one lock-protected map. A writer that panicked mid-update
/// leaves the lock poisoned; every later operation then fails with
/// [`StoreError::Unavailable`] rather than reading half-written state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<BTreeMap<RecordId, Record>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    /// Get a record that must exist
    pub fn require(&self, id: RecordId) -> Result<Record, StoreError> {
        self.get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<RecordId, Record>>, StoreError> {
        self.records.read().map_err(|_| {
            warn!("Record store lock is poisoned");
            StoreError::Unavailable("record lock poisoned".to_string())
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<RecordId, Record>>, StoreError> {
        self.records.write().map_err(|_| {
            warn!("Record store lock is poisoned");
            StoreError::Unavailable("record lock poisoned".to_string())
        })
    }
}

impl RecordStore for MemoryStore {
    type Error = StoreError;

    fn save(&mut self, record: Record) -> Result<RecordId, Self::Error> {
        if record.origin_app.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "origin_app must not be empty".to_string(),
            ));
        }

        let id = record.id;
        let mut records = self.write()?;
        match records.get_mut(&id) {
            Some(existing) => {
                debug!("Merging record {}", id);
                existing.merge(record);
            }
            None => {
                debug!("Saving record {} from {}", id, record.origin_app);
                records.insert(id, record);
            }
        }
        Ok(id)
    }

    fn get(&self, id: RecordId) -> Result<Option<Record>, Self::Error> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn query(&self, filter: &RecordFilter) -> Result<Vec<Record>, Self::Error> {
        let records = self.read()?;
        let mut matched: Vec<Record> = records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matched.sort_by_key(|record| (record.created_at, record.id));
        if let Some(limit) = filter.limit {
            matched.truncate(limit);
        }
        debug!("Query matched {} records", matched.len());
        Ok(matched)
    }

    fn delete(&mut self, id: RecordId) -> Result<bool, Self::Error> {
        let removed = self.write()?.remove(&id).is_some();
        if removed {
            debug!("Deleted record {}", id);
        }
        Ok(removed)
    }

    fn delete_by_origin(&mut self, origin_app: &str) -> Result<usize, Self::Error> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|_, record| record.origin_app != origin_app);
        let removed = before - records.len();
        debug!("Deleted {} records from {}", removed, origin_app);
        Ok(removed)
    }

    fn count_by_origin(&self) -> Result<BTreeMap<String, usize>, Self::Error> {
        let records = self.read()?;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records.values() {
            *counts.entry(record.origin_app.as_str()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(origin, count)| (origin.to_string(), count))
            .collect())
    }
}
