//! Station-centric queries: rosters, phone alerts and flood homes.

use serde::Serialize;

use super::{dedup_first_seen, AlertsEngine};
use crate::models::ResidentView;
use crate::{AlertsError, AlertsResult};

/// Residents covered by one station, with adult/child counts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StationRoster {
    pub residents: Vec<ResidentView>,
    /// Residents of known age older than 18
    pub adult_count: usize,
    /// Residents of known age 18 or younger
    pub child_count: usize,
}

/// One household in a flood view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FloodHome {
    pub address: String,
    pub residents: Vec<ResidentView>,
}

fn station_not_found(station: u32) -> AlertsError {
    AlertsError::NotFound(format!("Fire station number {station}"))
}

impl AlertsEngine<'_> {
    /// Every resident covered by `station`, with adult and child counts.
    ///
    /// Residents of unknown age are listed but counted in neither total.
    pub fn station_roster(&self, station: u32) -> AlertsResult<StationRoster> {
        let tables = self.snapshot();
        let projector = self.projector(&tables);

        let mut addresses = tables.addresses_of(station).peekable();
        if addresses.peek().is_none() {
            return Err(station_not_found(station));
        }

        let residents: Vec<ResidentView> = addresses
            .flat_map(|address| projector.project_all(tables.residents_at(address)))
            .collect();

        let adult_count = residents.iter().filter(|v| v.is_adult() == Some(true)).count();
        let child_count = residents.iter().filter(|v| v.is_adult() == Some(false)).count();

        Ok(StationRoster {
            residents,
            adult_count,
            child_count,
        })
    }

    /// Phone numbers of residents covered by `station`, de-duplicated across
    /// all covered addresses in first-seen order.
    pub fn phone_alert(&self, station: u32) -> AlertsResult<Vec<String>> {
        let tables = self.snapshot();

        let addresses: Vec<&str> = tables.addresses_of(station).collect();
        if addresses.is_empty() {
            return Err(station_not_found(station));
        }

        let phones = addresses
            .into_iter()
            .flat_map(|address| tables.residents_at(address))
            .map(|r| r.phone.clone());

        Ok(dedup_first_seen(phones))
    }

    /// One entry per address covered by each requested station.
    ///
    /// Stations are processed in input order, duplicates included. Unknown
    /// stations contribute no entries and are not an error.
    pub fn flood(&self, stations: &[u32]) -> Vec<FloodHome> {
        let tables = self.snapshot();
        let projector = self.projector(&tables);

        stations
            .iter()
            .flat_map(|&station| tables.addresses_of(station))
            .map(|address| FloodHome {
                address: address.to_owned(),
                residents: projector.project_all(tables.residents_at(address)),
            })
            .collect()
    }
}
