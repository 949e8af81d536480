//! Resident collection operations.
//!
//! (first name, last name) is treated as a unique key on the write path:
//! create rejects a second resident with the same name and update/delete act
//! on the first match. The read path is deliberately permissive: name lookups
//! return every match, because a dataset may legitimately hold two residents
//! sharing a name at different addresses. The two paths are not reconciled
//! here.

use log::debug;

use super::{EntityStore, StoreError, StoreResult, Tables};
use crate::models::Resident;

impl Tables {
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// First resident with the given name.
    pub fn resident(&self, first_name: &str, last_name: &str) -> Option<&Resident> {
        self.residents
            .iter()
            .find(|r| r.is_named(first_name, last_name))
    }

    /// Every resident with the given name.
    pub fn residents_named<'a>(
        &'a self,
        first_name: &'a str,
        last_name: &'a str,
    ) -> impl Iterator<Item = &'a Resident> + 'a {
        self.residents
            .iter()
            .filter(move |r| r.is_named(first_name, last_name))
    }

    pub fn residents_at<'a>(&'a self, address: &'a str) -> impl Iterator<Item = &'a Resident> + 'a {
        self.residents.iter().filter(move |r| r.lives_at(address))
    }

    pub fn residents_in<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a Resident> + 'a {
        self.residents.iter().filter(move |r| r.lives_in(city))
    }

    fn resident_position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.residents
            .iter()
            .position(|r| r.is_named(first_name, last_name))
    }

    pub(crate) fn insert_resident(&mut self, resident: &Resident) -> StoreResult<Resident> {
        if self.resident(&resident.first_name, &resident.last_name).is_some() {
            return Err(StoreError::AlreadyExists(format!("Person {}", resident.name())));
        }
        self.residents.push(resident.clone());
        Ok(resident.clone())
    }

    pub(crate) fn update_resident(&mut self, resident: &Resident) -> StoreResult<Resident> {
        let index = self
            .resident_position(&resident.first_name, &resident.last_name)
            .ok_or_else(|| StoreError::NotFound(format!("Person {}", resident.name())))?;
        let stored = &mut self.residents[index];
        stored.apply_update(resident);
        Ok(stored.clone())
    }

    pub(crate) fn remove_resident(&mut self, first_name: &str, last_name: &str) -> StoreResult<()> {
        let index = self
            .resident_position(first_name, last_name)
            .ok_or_else(|| StoreError::NotFound(format!("Person {first_name} {last_name}")))?;
        self.residents.remove(index);
        Ok(())
    }
}

/// Typed view over the resident collection of an [`EntityStore`].
#[derive(Debug, Clone, Copy)]
pub struct ResidentRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> ResidentRepository<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Get a resident by name (case-insensitive).
    pub fn find(&self, first_name: &str, last_name: &str) -> Option<Resident> {
        self.store.snapshot().resident(first_name, last_name).cloned()
    }

    /// Get every resident with the given name.
    pub fn find_all_by_name(&self, first_name: &str, last_name: &str) -> Vec<Resident> {
        self.store
            .snapshot()
            .residents_named(first_name, last_name)
            .cloned()
            .collect()
    }

    /// Get every resident living at `address`, in insertion order.
    pub fn find_all_by_address(&self, address: &str) -> Vec<Resident> {
        self.store.snapshot().residents_at(address).cloned().collect()
    }

    /// Get every resident living in `city`, in insertion order.
    pub fn find_all_by_city(&self, city: &str) -> Vec<Resident> {
        self.store.snapshot().residents_in(city).cloned().collect()
    }

    /// List all residents.
    pub fn list(&self) -> Vec<Resident> {
        self.store.snapshot().residents().to_vec()
    }

    /// Insert a copy of `resident`.
    pub fn create(&self, resident: &Resident) -> StoreResult<Resident> {
        let created = self.store.write().insert_resident(resident)?;
        debug!("event=resident_create module=store status=ok");
        Ok(created)
    }

    /// Overwrite the contact fields of an existing resident.
    pub fn update(&self, resident: &Resident) -> StoreResult<Resident> {
        let updated = self.store.write().update_resident(resident)?;
        debug!("event=resident_update module=store status=ok");
        Ok(updated)
    }

    /// Delete a resident by name.
    pub fn delete(&self, first_name: &str, last_name: &str) -> StoreResult<()> {
        self.store.write().remove_resident(first_name, last_name)?;
        debug!("event=resident_delete module=store status=ok");
        Ok(())
    }
}
