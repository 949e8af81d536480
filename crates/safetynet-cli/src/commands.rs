//! Command dispatch: load the dataset, run one operation, render its output.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use serde_json::{json, Value};

use safetynet_core::{
    dataset, AlertsEngine, AlertsError, EntityStore, MedicalRecord, Resident, ResidentView,
};

use crate::cli::{Command, MappingAction, MedicalRecordAction, PersonAction};
use crate::config::Config;
use crate::render;

/// Run `command` against the configured dataset.
///
/// Returns `None` when the command succeeded without output (a delete, or a
/// child alert with no children).
pub fn run(config: &Config, command: Command) -> Result<Option<Value>> {
    let data = dataset::load(&config.data_path)
        .with_context(|| format!("failed to load dataset `{}`", config.data_path.display()))?;
    let store = EntityStore::from_dataset(data);

    let mutation = command.is_mutation();
    let output = execute(&store, config.reference_date, command)?;

    if mutation && config.write_back {
        store
            .to_dataset()
            .save(&config.data_path)
            .with_context(|| format!("failed to save dataset `{}`", config.data_path.display()))?;
        info!("event=dataset_saved module=cli status=ok");
    }
    Ok(output)
}

/// Run `command` against an already populated store.
pub fn execute(
    store: &EntityStore,
    reference_date: NaiveDate,
    command: Command,
) -> Result<Option<Value>> {
    let engine = AlertsEngine::new(store, reference_date);

    let output = match command {
        Command::Firestation { station } => {
            let roster = engine.station_roster(station)?;
            report_degraded("firestation", &roster.residents);
            Some(render::station_roster(&roster)?)
        }
        Command::PhoneAlert { station } => Some(json!(engine.phone_alert(station)?)),
        Command::ChildAlert { address } => render::child_alert(&engine.child_alert(address.trim()))?,
        Command::Fire { address } => {
            let incident = engine.fire(address.trim())?;
            report_degraded("fire", &incident.residents);
            Some(render::fire(&incident)?)
        }
        Command::Flood { stations } => {
            let homes = engine.flood(&stations);
            for home in &homes {
                report_degraded("flood", &home.residents);
            }
            Some(render::flood(&homes)?)
        }
        Command::PersonInfo { first_name, last_name } => {
            let views = engine.person_info(first_name.trim(), last_name.trim());
            report_degraded("person_info", &views);
            Some(render::person_info(&views)?)
        }
        Command::CommunityEmail { city } => Some(json!(engine.community_email(city.trim()))),
        Command::Person { action } => person(store, action)?,
        Command::FirestationMapping { action } => mapping(store, action)?,
        Command::MedicalRecord { action } => medical_record(store, action)?,
    };
    Ok(output)
}

fn person(store: &EntityStore, action: PersonAction) -> Result<Option<Value>> {
    let repo = store.residents();
    let changed = match action {
        PersonAction::Add(args) => repo.create(&Resident::from(args)).map_err(AlertsError::from)?,
        PersonAction::Update(args) => repo.update(&Resident::from(args)).map_err(AlertsError::from)?,
        PersonAction::Delete { first_name, last_name } => {
            repo.delete(first_name.trim(), last_name.trim())
                .map_err(AlertsError::from)?;
            return Ok(None);
        }
    };
    Ok(Some(serde_json::to_value(changed)?))
}

fn mapping(store: &EntityStore, action: MappingAction) -> Result<Option<Value>> {
    let repo = store.stations();
    let changed = match action {
        MappingAction::Add { address, station } => repo
            .create(&MappingAction::mapping(&address, station))
            .map_err(AlertsError::from)?,
        MappingAction::Update { address, station } => repo
            .update(&MappingAction::mapping(&address, station))
            .map_err(AlertsError::from)?,
        MappingAction::Delete { address } => {
            repo.delete(address.trim()).map_err(AlertsError::from)?;
            return Ok(None);
        }
    };
    Ok(Some(serde_json::to_value(changed)?))
}

fn medical_record(store: &EntityStore, action: MedicalRecordAction) -> Result<Option<Value>> {
    let repo = store.medical_records();
    let changed = match action {
        MedicalRecordAction::Add(args) => repo
            .create(&MedicalRecord::from(args))
            .map_err(AlertsError::from)?,
        MedicalRecordAction::Update(args) => repo
            .update(&MedicalRecord::from(args))
            .map_err(AlertsError::from)?,
        MedicalRecordAction::Delete { first_name, last_name } => {
            repo.delete(first_name.trim(), last_name.trim())
                .map_err(AlertsError::from)?;
            return Ok(None);
        }
    };
    Ok(Some(serde_json::to_value(changed)?))
}

/// Warn about residents projected without a medical record or a usable age.
fn report_degraded(query: &str, views: &[ResidentView]) {
    let missing = views.iter().filter(|v| !v.has_medical_record()).count();
    if missing > 0 {
        warn!("event=medical_record_missing module=cli status=degraded query={query} count={missing}");
    }
    let unknown_age = views
        .iter()
        .filter(|v| v.has_medical_record() && v.age.is_none())
        .count();
    if unknown_age > 0 {
        warn!("event=age_unknown module=cli status=degraded query={query} count={unknown_age}");
    }
}

/// HTTP-style status of a failed command: the core's category when the
/// failure came from it, 500 otherwise.
pub fn status_of(err: &anyhow::Error) -> u16 {
    err.downcast_ref::<AlertsError>()
        .map(AlertsError::status_code)
        .unwrap_or(500)
}
