//! Medical record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::name::{eq_ignore_case, PersonName};

/// Medical record of a person, keyed by first and last name.
///
/// Shares the key space of [`super::Resident`] but is an independent
/// collection: either may exist without the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, day precision (`MM/dd/yyyy` on disk)
    #[serde(with = "birthdate_format")]
    pub birthdate: NaiveDate,
    /// Medications in recorded order, duplicates allowed
    #[serde(default)]
    pub medications: Vec<String>,
    /// Allergies in recorded order, duplicates allowed
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl MedicalRecord {
    /// Create a record with no medications or allergies.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            medications: Vec::new(),
            allergies: Vec::new(),
        }
    }

    pub fn name(&self) -> PersonName {
        PersonName::new(self.first_name.clone(), self.last_name.clone())
    }

    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        eq_ignore_case(&self.first_name, first_name) && eq_ignore_case(&self.last_name, last_name)
    }

    pub(crate) fn apply_update(&mut self, other: &MedicalRecord) {
        self.birthdate = other.birthdate;
        self.medications.clone_from(&other.medications);
        self.allergies.clone_from(&other.allergies);
    }
}

/// `MM/dd/yyyy` birthdates.
pub mod birthdate_format {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid birthdate {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_record() {
        let json = r#"{
            "firstName": "John",
            "lastName": "Boyd",
            "birthdate": "03/06/1984",
            "medications": ["aznol:350mg", "hydrapermazol:100mg"],
            "allergies": ["nillacilan"]
        }"#;

        let record: MedicalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.birthdate, NaiveDate::from_ymd_opt(1984, 3, 6).unwrap());
        assert_eq!(record.medications.len(), 2);
        assert_eq!(record.allergies, vec!["nillacilan".to_string()]);
    }

    #[test]
    fn test_birthdate_written_back_padded() {
        let record = MedicalRecord::new("Tenley", "Boyd", NaiveDate::from_ymd_opt(2012, 2, 8).unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["birthdate"], "02/08/2012");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{"firstName":"Roger","lastName":"Boyd","birthdate":"09/06/2017"}"#;
        let record: MedicalRecord = serde_json::from_str(json).unwrap();
        assert!(record.medications.is_empty());
        assert!(record.allergies.is_empty());
    }

    #[test]
    fn test_rejects_iso_birthdate() {
        let json = r#"{"firstName":"Roger","lastName":"Boyd","birthdate":"2017-09-06"}"#;
        assert!(serde_json::from_str::<MedicalRecord>(json).is_err());
    }

    #[test]
    fn test_apply_update_keeps_duplicates_and_order() {
        let mut record = MedicalRecord::new("Jacob", "Boyd", NaiveDate::from_ymd_opt(1989, 3, 6).unwrap());
        let mut changed = record.clone();
        changed.medications = vec!["pharmacol:5000mg".into(), "terazine:10mg".into(), "terazine:10mg".into()];

        record.apply_update(&changed);
        assert_eq!(record.medications, changed.medications);
    }
}
