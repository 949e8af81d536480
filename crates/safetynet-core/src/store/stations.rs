//! Station mapping collection operations.

use log::debug;

use super::{EntityStore, StoreError, StoreResult, Tables};
use crate::models::StationMapping;

impl Tables {
    pub fn stations(&self) -> &[StationMapping] {
        &self.stations
    }

    /// Mapping covering `address`, if any.
    pub fn station_at(&self, address: &str) -> Option<&StationMapping> {
        self.stations.iter().find(|s| s.covers(address))
    }

    /// Addresses covered by `station`, in insertion order.
    pub fn addresses_of(&self, station: u32) -> impl Iterator<Item = &str> + '_ {
        self.stations
            .iter()
            .filter(move |s| s.station == station)
            .map(|s| s.address.as_str())
    }

    fn station_position(&self, address: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.covers(address))
    }

    pub(crate) fn insert_station(&mut self, mapping: &StationMapping) -> StoreResult<StationMapping> {
        if self.station_at(&mapping.address).is_some() {
            return Err(StoreError::AlreadyExists(format!(
                "Fire station at {}",
                mapping.address
            )));
        }
        self.stations.push(mapping.clone());
        Ok(mapping.clone())
    }

    pub(crate) fn update_station(&mut self, mapping: &StationMapping) -> StoreResult<StationMapping> {
        let index = self
            .station_position(&mapping.address)
            .ok_or_else(|| StoreError::NotFound(format!("Fire station at {}", mapping.address)))?;
        let stored = &mut self.stations[index];
        stored.station = mapping.station;
        Ok(stored.clone())
    }

    pub(crate) fn remove_station(&mut self, address: &str) -> StoreResult<()> {
        let index = self
            .station_position(address)
            .ok_or_else(|| StoreError::NotFound(format!("Fire station at {address}")))?;
        self.stations.remove(index);
        Ok(())
    }
}

/// Typed view over the station mapping collection of an [`EntityStore`].
#[derive(Debug, Clone, Copy)]
pub struct StationRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> StationRepository<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Get the mapping for an address (case-insensitive).
    pub fn find(&self, address: &str) -> Option<StationMapping> {
        self.store.snapshot().station_at(address).cloned()
    }

    /// Get every mapping of station `station`, in insertion order.
    pub fn find_all_by_station(&self, station: u32) -> Vec<StationMapping> {
        self.store
            .snapshot()
            .stations()
            .iter()
            .filter(|s| s.station == station)
            .cloned()
            .collect()
    }

    /// Addresses covered by `station`; empty when the station is unknown.
    pub fn addresses(&self, station: u32) -> Vec<String> {
        self.store
            .snapshot()
            .addresses_of(station)
            .map(str::to_owned)
            .collect()
    }

    /// Station number covering `address`.
    pub fn station_number(&self, address: &str) -> StoreResult<u32> {
        self.store
            .snapshot()
            .station_at(address)
            .map(|s| s.station)
            .ok_or_else(|| StoreError::NotFound(format!("Fire station at address {address}")))
    }

    pub fn list(&self) -> Vec<StationMapping> {
        self.store.snapshot().stations().to_vec()
    }

    /// Map a new address to a station.
    pub fn create(&self, mapping: &StationMapping) -> StoreResult<StationMapping> {
        let created = self.store.write().insert_station(mapping)?;
        debug!("event=station_create module=store status=ok station={}", created.station);
        Ok(created)
    }

    /// Change the station covering an existing address.
    pub fn update(&self, mapping: &StationMapping) -> StoreResult<StationMapping> {
        let updated = self.store.write().update_station(mapping)?;
        debug!("event=station_update module=store status=ok station={}", updated.station);
        Ok(updated)
    }

    /// Remove the mapping of an address.
    pub fn delete(&self, address: &str) -> StoreResult<()> {
        self.store.write().remove_station(address)?;
        debug!("event=station_delete module=store status=ok");
        Ok(())
    }
}
