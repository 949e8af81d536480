//! Medical record collection operations.

use log::debug;

use super::{EntityStore, StoreError, StoreResult, Tables};
use crate::models::MedicalRecord;

impl Tables {
    pub fn medical_records(&self) -> &[MedicalRecord] {
        &self.medical_records
    }

    /// First medical record with the given name.
    pub fn medical_record(&self, first_name: &str, last_name: &str) -> Option<&MedicalRecord> {
        self.medical_records
            .iter()
            .find(|m| m.is_named(first_name, last_name))
    }

    fn medical_record_position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.medical_records
            .iter()
            .position(|m| m.is_named(first_name, last_name))
    }

    pub(crate) fn insert_medical_record(&mut self, record: &MedicalRecord) -> StoreResult<MedicalRecord> {
        if self.medical_record(&record.first_name, &record.last_name).is_some() {
            return Err(StoreError::AlreadyExists(format!(
                "Medical record of {}",
                record.name()
            )));
        }
        self.medical_records.push(record.clone());
        Ok(record.clone())
    }

    pub(crate) fn update_medical_record(&mut self, record: &MedicalRecord) -> StoreResult<MedicalRecord> {
        let index = self
            .medical_record_position(&record.first_name, &record.last_name)
            .ok_or_else(|| StoreError::NotFound(format!("Medical record of {}", record.name())))?;
        let stored = &mut self.medical_records[index];
        stored.apply_update(record);
        Ok(stored.clone())
    }

    pub(crate) fn remove_medical_record(&mut self, first_name: &str, last_name: &str) -> StoreResult<()> {
        let index = self
            .medical_record_position(first_name, last_name)
            .ok_or_else(|| {
                StoreError::NotFound(format!("Medical record of {first_name} {last_name}"))
            })?;
        self.medical_records.remove(index);
        Ok(())
    }
}

/// Typed view over the medical record collection of an [`EntityStore`].
#[derive(Debug, Clone, Copy)]
pub struct MedicalRecordRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> MedicalRecordRepository<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Get a medical record by name (case-insensitive).
    pub fn find(&self, first_name: &str, last_name: &str) -> Option<MedicalRecord> {
        self.store
            .snapshot()
            .medical_record(first_name, last_name)
            .cloned()
    }

    /// Get every medical record with the given name.
    pub fn find_all_by_name(&self, first_name: &str, last_name: &str) -> Vec<MedicalRecord> {
        self.store
            .snapshot()
            .medical_records()
            .iter()
            .filter(|m| m.is_named(first_name, last_name))
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<MedicalRecord> {
        self.store.snapshot().medical_records().to_vec()
    }

    /// Insert a copy of `record`.
    pub fn create(&self, record: &MedicalRecord) -> StoreResult<MedicalRecord> {
        let created = self.store.write().insert_medical_record(record)?;
        debug!("event=medical_record_create module=store status=ok");
        Ok(created)
    }

    /// Overwrite birthdate, medications and allergies of an existing record.
    pub fn update(&self, record: &MedicalRecord) -> StoreResult<MedicalRecord> {
        let updated = self.store.write().update_medical_record(record)?;
        debug!("event=medical_record_update module=store status=ok");
        Ok(updated)
    }

    /// Delete a medical record by name.
    pub fn delete(&self, first_name: &str, last_name: &str) -> StoreResult<()> {
        self.store
            .write()
            .remove_medical_record(first_name, last_name)?;
        debug!("event=medical_record_delete module=store status=ok");
        Ok(())
    }
}
