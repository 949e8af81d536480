//! Address-centric queries: child alerts and fire incidents.

use serde::Serialize;

use super::AlertsEngine;
use crate::models::ResidentView;
use crate::{AlertsError, AlertsResult};

/// Children living at an address, with the adults they live with.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ChildAlert {
    pub children: Vec<ResidentView>,
    pub adults: Vec<ResidentView>,
}

impl ChildAlert {
    /// No child lives at the address. Adults alone do not make an alert.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Residents at a burning address and the station covering it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FireIncident {
    pub station_number: u32,
    pub residents: Vec<ResidentView>,
}

impl AlertsEngine<'_> {
    /// Split the residents of `address` into children and adults.
    ///
    /// Residents of unknown age appear in neither list. Never fails.
    pub fn child_alert(&self, address: &str) -> ChildAlert {
        let tables = self.snapshot();
        let projector = self.projector(&tables);

        let (adults, children): (Vec<_>, Vec<_>) = projector
            .project_all(tables.residents_at(address))
            .into_iter()
            .filter(|v| v.age.is_some())
            .partition(|v| v.is_adult() == Some(true));

        ChildAlert { children, adults }
    }

    /// Residents of `address` with the station number covering it.
    ///
    /// An address without a station mapping is not covered and fails with
    /// `NotFound`, even when people live there.
    pub fn fire(&self, address: &str) -> AlertsResult<FireIncident> {
        let tables = self.snapshot();
        let projector = self.projector(&tables);

        let residents = projector.project_all(tables.residents_at(address));
        let station_number = tables
            .station_at(address)
            .map(|s| s.station)
            .ok_or_else(|| AlertsError::NotFound(format!("Fire station at address {address}")))?;

        Ok(FireIncident {
            station_number,
            residents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MedicalRecord, Resident, StationMapping};
    use crate::store::EntityStore;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    fn setup_store() -> EntityStore {
        let store = EntityStore::new();
        store.stations().create(&StationMapping::new("1509 Culver St", 3)).unwrap();

        let people = [
            ("John", "1509 Culver St", Some((1984, 3, 6))),
            ("Tenley", "1509 Culver St", Some((2012, 2, 18))),
            ("Roger", "1509 Culver St", Some((2017, 9, 6))),
            ("Unknown", "1509 Culver St", None),
            ("Eric", "951 LoneTree Rd", Some((1994, 8, 6))),
        ];
        for (first, address, birth) in people {
            let mut resident = Resident::new(first, "Boyd");
            resident.address = address.into();
            store.residents().create(&resident).unwrap();
            if let Some((y, m, d)) = birth {
                let mut record = MedicalRecord::new(first, "Boyd", NaiveDate::from_ymd_opt(y, m, d).unwrap());
                record.medications = vec![format!("{}-med", first.to_lowercase())];
                store.medical_records().create(&record).unwrap();
            }
        }
        store
    }

    #[test]
    fn test_child_alert_partitions() {
        let store = setup_store();
        let alert = AlertsEngine::new(&store, today()).child_alert("1509 CULVER ST");

        let children: Vec<_> = alert.children.iter().map(|v| v.first_name.as_str()).collect();
        let adults: Vec<_> = alert.adults.iter().map(|v| v.first_name.as_str()).collect();
        assert_eq!(children, vec!["Tenley", "Roger"]);
        assert_eq!(adults, vec!["John"]);
        assert!(!alert.is_empty());
        assert_eq!(alert.children[0].age, Some(12));
    }

    #[test]
    fn test_child_alert_without_children() {
        let store = setup_store();
        let alert = AlertsEngine::new(&store, today()).child_alert("951 LoneTree Rd");
        assert!(alert.is_empty());
        assert_eq!(alert.adults.len(), 1);
    }

    #[test]
    fn test_child_alert_empty_address() {
        let store = setup_store();
        let alert = AlertsEngine::new(&store, today()).child_alert("1 Nowhere Rd");
        assert_eq!(alert, ChildAlert::default());
    }

    #[test]
    fn test_fire_incident() {
        let store = setup_store();
        let incident = AlertsEngine::new(&store, today()).fire("1509 culver st").unwrap();

        assert_eq!(incident.station_number, 3);
        assert_eq!(incident.residents.len(), 4);
        let john = &incident.residents[0];
        assert_eq!(john.age, Some(40));
        assert_eq!(john.medical_record.as_ref().unwrap().medications, vec!["john-med".to_string()]);
        assert!(incident.residents[3].age.is_none());
    }

    #[test]
    fn test_fire_without_coverage() {
        let store = setup_store();
        let result = AlertsEngine::new(&store, today()).fire("951 LoneTree Rd");
        assert!(matches!(result, Err(AlertsError::NotFound(_))));
    }

    #[test]
    fn test_fire_covered_but_uninhabited() {
        let store = setup_store();
        store.stations().create(&StationMapping::new("748 Townings Dr", 3)).unwrap();
        let incident = AlertsEngine::new(&store, today()).fire("748 Townings Dr").unwrap();
        assert_eq!(incident.station_number, 3);
        assert!(incident.residents.is_empty());
    }
}
