//! Field allow-lists applied to query results before they are printed.
//!
//! The core keeps every field of a [`ResidentView`] populated; each query
//! exposes its own subset here.

use serde_json::{json, Value};

use safetynet_core::{ChildAlert, FireIncident, FloodHome, ResidentView, StationRoster};

/// Fields of a resident view (and of its medical record) to keep.
#[derive(Debug, Clone, Copy)]
pub struct FieldFilter {
    person: &'static [&'static str],
    medical: &'static [&'static str],
}

impl FieldFilter {
    pub const ROSTER: Self = Self {
        person: &["firstName", "lastName", "address", "city", "zip", "phone"],
        medical: &[],
    };

    pub const CHILD: Self = Self {
        person: &["firstName", "lastName", "age"],
        medical: &[],
    };

    pub const HOUSEHOLD_MEMBER: Self = Self {
        person: &["firstName", "lastName"],
        medical: &[],
    };

    pub const INCIDENT: Self = Self {
        person: &["firstName", "lastName", "phone", "age", "medicalRecord"],
        medical: &["medications", "allergies"],
    };

    pub const PERSON_INFO: Self = Self {
        person: &[
            "firstName",
            "lastName",
            "address",
            "city",
            "zip",
            "email",
            "age",
            "medicalRecord",
        ],
        medical: &["medications", "allergies"],
    };

    pub fn apply(&self, view: &ResidentView) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(view)?;
        retain(&mut value, self.person);
        if let Some(medical) = value.get_mut("medicalRecord") {
            retain(medical, self.medical);
        }
        Ok(value)
    }

    pub fn apply_all(&self, views: &[ResidentView]) -> serde_json::Result<Value> {
        views
            .iter()
            .map(|v| self.apply(v))
            .collect::<serde_json::Result<Vec<_>>>()
            .map(Value::Array)
    }
}

fn retain(value: &mut Value, allowed: &[&str]) {
    if let Value::Object(map) = value {
        map.retain(|key, _| allowed.contains(&key.as_str()));
    }
}

pub fn station_roster(roster: &StationRoster) -> serde_json::Result<Value> {
    Ok(json!({
        "persons": FieldFilter::ROSTER.apply_all(&roster.residents)?,
        "numberOfAdults": roster.adult_count,
        "numberOfChildren": roster.child_count,
    }))
}

/// `None` when no child lives at the address.
pub fn child_alert(alert: &ChildAlert) -> serde_json::Result<Option<Value>> {
    if alert.is_empty() {
        return Ok(None);
    }
    Ok(Some(json!({
        "children": FieldFilter::CHILD.apply_all(&alert.children)?,
        "adults": FieldFilter::HOUSEHOLD_MEMBER.apply_all(&alert.adults)?,
    })))
}

pub fn fire(incident: &FireIncident) -> serde_json::Result<Value> {
    Ok(json!({
        "stationNumber": incident.station_number,
        "persons": FieldFilter::INCIDENT.apply_all(&incident.residents)?,
    }))
}

pub fn flood(homes: &[FloodHome]) -> serde_json::Result<Value> {
    homes
        .iter()
        .map(|home| {
            Ok(json!({
                "address": home.address,
                "persons": FieldFilter::INCIDENT.apply_all(&home.residents)?,
            }))
        })
        .collect::<serde_json::Result<Vec<_>>>()
        .map(Value::Array)
}

pub fn person_info(views: &[ResidentView]) -> serde_json::Result<Value> {
    FieldFilter::PERSON_INFO.apply_all(views)
}
