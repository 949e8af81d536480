//! Read-time composite of a resident and their medical record.

use chrono::NaiveDate;
use serde::Serialize;

use super::medical_record::{birthdate_format, MedicalRecord};
use super::name::PersonName;
use super::resident::Resident;
use crate::age;

/// Medical fields attached to a [`ResidentView`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDetail {
    #[serde(with = "birthdate_format")]
    pub birthdate: NaiveDate,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl From<&MedicalRecord> for MedicalDetail {
    fn from(record: &MedicalRecord) -> Self {
        Self {
            birthdate: record.birthdate,
            medications: record.medications.clone(),
            allergies: record.allergies.clone(),
        }
    }
}

/// A resident joined with their optional medical record and computed age.
///
/// Every field stays populated; which of them reach the caller is decided
/// by the boundary, per query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResidentView {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    /// Age in whole years; `None` without a usable birthdate
    pub age: Option<u32>,
    pub medical_record: Option<MedicalDetail>,
}

impl ResidentView {
    pub(crate) fn new(resident: &Resident, age: Option<u32>, medical_record: Option<MedicalDetail>) -> Self {
        Self {
            first_name: resident.first_name.clone(),
            last_name: resident.last_name.clone(),
            address: resident.address.clone(),
            city: resident.city.clone(),
            zip: resident.zip.clone(),
            phone: resident.phone.clone(),
            email: resident.email.clone(),
            age,
            medical_record,
        }
    }

    pub fn name(&self) -> PersonName {
        PersonName::new(self.first_name.clone(), self.last_name.clone())
    }

    /// `Some(true)` for adults, `Some(false)` for children, `None` when the
    /// age is unknown.
    pub fn is_adult(&self) -> Option<bool> {
        self.age.map(age::is_adult)
    }

    pub fn has_medical_record(&self) -> bool {
        self.medical_record.is_some()
    }
}
