//! Dataset loading and saving.
//!
//! The on-disk shape is a single JSON object with three named lists:
//!
//! ```json
//! {
//!   "persons": [{ "firstName": "John", "lastName": "Boyd", "address": "1509 Culver St",
//!                 "city": "Culver", "zip": "97451", "phone": "841-874-6512",
//!                 "email": "jaboyd@email.com" }],
//!   "firestations": [{ "address": "1509 Culver St", "station": "3" }],
//!   "medicalrecords": [{ "firstName": "John", "lastName": "Boyd", "birthdate": "03/06/1984",
//!                       "medications": ["aznol:350mg"], "allergies": ["nillacilan"] }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{MedicalRecord, Resident, StationMapping};

/// Dataset errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// The three collections as they are stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub persons: Vec<Resident>,
    #[serde(default)]
    pub firestations: Vec<StationMapping>,
    #[serde(default)]
    pub medicalrecords: Vec<MedicalRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the dataset as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DatasetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the dataset to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> DatasetResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Read a dataset from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Dataset> {
    let text = fs::read_to_string(path)?;
    Dataset::from_json(&text)
}
