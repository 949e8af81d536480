//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use safetynet_core::models::birthdate_format;
use safetynet_core::{MedicalRecord, Resident, StationMapping};

#[derive(Parser, Debug)]
#[command(name = "safetynet")]
#[command(version, about = "Emergency alert queries over a SafetyNet dataset", long_about = None)]
pub struct Cli {
    /// Dataset file (JSON with persons, firestations and medicalrecords)
    #[arg(long, env = "SAFETYNET_DATA", default_value = "data.json", global = true)]
    pub data: PathBuf,

    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long, env = "SAFETYNET_AS_OF", global = true)]
    pub as_of: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "SAFETYNET_LOG", global = true)]
    pub log_level: Option<String>,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Save the dataset back to --data after a successful change
    #[arg(long, global = true)]
    pub write: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Residents covered by a fire station, with adult and child counts
    Firestation { station: u32 },

    /// Phone numbers of residents covered by a fire station
    PhoneAlert { station: u32 },

    /// Children living at an address, with the adults living with them
    ChildAlert { address: String },

    /// Residents of an address with their medical detail and covering station
    Fire { address: String },

    /// Households covered by one or more fire stations
    Flood {
        #[arg(required = true, value_delimiter = ',')]
        stations: Vec<u32>,
    },

    /// Full information about every resident with the given name
    PersonInfo { first_name: String, last_name: String },

    /// E-mail addresses of everyone living in a city
    CommunityEmail { city: String },

    /// Create, update or delete a resident
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Create, update or delete an address-to-station mapping
    FirestationMapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Create, update or delete a medical record
    MedicalRecord {
        #[command(subcommand)]
        action: MedicalRecordAction,
    },
}

impl Command {
    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Firestation { .. } => "firestation",
            Command::PhoneAlert { .. } => "phone_alert",
            Command::ChildAlert { .. } => "child_alert",
            Command::Fire { .. } => "fire",
            Command::Flood { .. } => "flood",
            Command::PersonInfo { .. } => "person_info",
            Command::CommunityEmail { .. } => "community_email",
            Command::Person { .. } => "person",
            Command::FirestationMapping { .. } => "firestation_mapping",
            Command::MedicalRecord { .. } => "medical_record",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Person { .. } | Command::FirestationMapping { .. } | Command::MedicalRecord { .. }
        )
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PersonAction {
    Add(PersonArgs),
    Update(PersonArgs),
    Delete { first_name: String, last_name: String },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PersonArgs {
    pub first_name: String,
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub zip: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<PersonArgs> for Resident {
    fn from(args: PersonArgs) -> Self {
        Resident {
            first_name: args.first_name.trim().to_string(),
            last_name: args.last_name.trim().to_string(),
            address: args.address.trim().to_string(),
            city: args.city.trim().to_string(),
            zip: args.zip.trim().to_string(),
            phone: args.phone.trim().to_string(),
            email: args.email.trim().to_string(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum MappingAction {
    Add { address: String, station: u32 },
    Update { address: String, station: u32 },
    Delete { address: String },
}

impl MappingAction {
    pub fn mapping(address: &str, station: u32) -> StationMapping {
        StationMapping::new(address.trim(), station)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum MedicalRecordAction {
    Add(MedicalRecordArgs),
    Update(MedicalRecordArgs),
    Delete { first_name: String, last_name: String },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct MedicalRecordArgs {
    pub first_name: String,
    pub last_name: String,
    /// Birthdate as MM/dd/yyyy
    #[arg(long, value_parser = parse_birthdate)]
    pub birthdate: NaiveDate,
    /// Medication (repeatable)
    #[arg(long = "medication")]
    pub medications: Vec<String>,
    /// Allergy (repeatable)
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,
}

impl From<MedicalRecordArgs> for MedicalRecord {
    fn from(args: MedicalRecordArgs) -> Self {
        MedicalRecord {
            first_name: args.first_name.trim().to_string(),
            last_name: args.last_name.trim().to_string(),
            birthdate: args.birthdate,
            medications: args.medications,
            allergies: args.allergies,
        }
    }
}

fn parse_birthdate(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), birthdate_format::FORMAT)
        .map_err(|e| format!("expected MM/dd/yyyy: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("safetynet").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_query() {
        let cli = parse(&["--data", "data.json", "firestation", "3"]);
        assert_eq!(cli.command, Command::Firestation { station: 3 });
        assert!(!cli.write);
    }

    #[test]
    fn test_parse_flood_lists() {
        let spaced = parse(&["flood", "1", "2"]);
        let comma = parse(&["flood", "1,2"]);
        assert_eq!(spaced.command, Command::Flood { stations: vec![1, 2] });
        assert_eq!(comma.command, spaced.command);
    }

    #[test]
    fn test_flood_requires_stations() {
        assert!(Cli::try_parse_from(["safetynet", "flood"]).is_err());
    }

    #[test]
    fn test_parse_as_of() {
        let cli = parse(&["--as-of", "2024-10-18", "child-alert", "1509 Culver St"]);
        assert_eq!(cli.as_of, NaiveDate::from_ymd_opt(2024, 10, 18));
        assert_eq!(cli.command.name(), "child_alert");
    }

    #[test]
    fn test_parse_medical_record_add() {
        let cli = parse(&[
            "medical-record", "add", "Tenley", "Boyd",
            "--birthdate", "02/18/2012",
            "--allergy", "peanut",
            "--write",
        ]);
        assert!(cli.write);
        assert!(cli.command.is_mutation());

        let Command::MedicalRecord { action: MedicalRecordAction::Add(args) } = cli.command else {
            panic!("unexpected command");
        };
        let record = MedicalRecord::from(args);
        assert_eq!(record.birthdate, NaiveDate::from_ymd_opt(2012, 2, 18).unwrap());
        assert_eq!(record.allergies, vec!["peanut".to_string()]);
        assert!(record.medications.is_empty());
    }

    #[test]
    fn test_rejects_iso_birthdate() {
        let result = Cli::try_parse_from([
            "safetynet", "medical-record", "add", "A", "B", "--birthdate", "2012-02-18",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_person_args_are_trimmed() {
        let cli = parse(&["person", "add", " John ", "Boyd", "--address", " 1509 Culver St "]);
        let Command::Person { action: PersonAction::Add(args) } = cli.command else {
            panic!("unexpected command");
        };
        let resident = Resident::from(args);
        assert_eq!(resident.first_name, "John");
        assert_eq!(resident.address, "1509 Culver St");
    }
}
