//! In-memory entity store.
//!
//! # Invariants
//! - The store exclusively owns the three collections; callers only ever get
//!   copies in and out.
//! - Collections keep insertion order and are never re-sorted.
//! - A single read-write lock guards all three collections together, so a
//!   mutation's existence check and its write happen atomically and a query
//!   sees one consistent snapshot.
//! - Mutations validate before they touch state. A poisoned lock therefore
//!   still guards consistent data and is recovered rather than propagated.
//! - Log events carry metadata only; names and addresses never reach the log.

mod medical_records;
mod residents;
mod stations;

pub use medical_records::*;
pub use residents::*;
pub use stations::*;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use thiserror::Error;

use crate::dataset::Dataset;
use crate::models::{MedicalRecord, Resident, StationMapping};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The three collections held by an [`EntityStore`].
///
/// Read access goes through [`EntityStore::snapshot`]; mutations are only
/// reachable through the repositories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tables {
    residents: Vec<Resident>,
    stations: Vec<StationMapping>,
    medical_records: Vec<MedicalRecord>,
}

impl Tables {
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty() && self.stations.is_empty() && self.medical_records.is_empty()
    }
}

impl From<Dataset> for Tables {
    fn from(dataset: Dataset) -> Self {
        Self {
            residents: dataset.persons,
            stations: dataset.firestations,
            medical_records: dataset.medicalrecords,
        }
    }
}

impl From<&Tables> for Dataset {
    fn from(tables: &Tables) -> Self {
        Dataset {
            persons: tables.residents.clone(),
            firestations: tables.stations.clone(),
            medicalrecords: tables.medical_records.clone(),
        }
    }
}

/// Read guard over the store, consistent for as long as it is held.
pub type Snapshot<'a> = RwLockReadGuard<'a, Tables>;

/// Owned, thread-safe holder of residents, station mappings and medical
/// records.
#[derive(Debug, Default)]
pub struct EntityStore {
    tables: RwLock<Tables>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the contents of `dataset`.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        store.load(dataset);
        store
    }

    /// Replace the whole store contents with `dataset`.
    pub fn load(&self, dataset: Dataset) {
        let tables = Tables::from(dataset);
        debug!(
            "event=store_load module=store status=ok residents={} stations={} medical_records={}",
            tables.residents.len(),
            tables.stations.len(),
            tables.medical_records.len()
        );
        *self.write() = tables;
    }

    /// Drop every record.
    pub fn reset(&self) {
        *self.write() = Tables::default();
        debug!("event=store_reset module=store status=ok");
    }

    /// Copy the current contents back into the dataset shape.
    pub fn to_dataset(&self) -> Dataset {
        Dataset::from(&*self.snapshot())
    }

    /// Consistent read access to all three collections.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn residents(&self) -> ResidentRepository<'_> {
        ResidentRepository::new(self)
    }

    pub fn stations(&self) -> StationRepository<'_> {
        StationRepository::new(self)
    }

    pub fn medical_records(&self) -> MedicalRecordRepository<'_> {
        MedicalRecordRepository::new(self)
    }
}
