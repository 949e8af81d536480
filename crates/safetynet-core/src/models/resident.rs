//! Resident models.

use serde::{Deserialize, Serialize};

use super::name::{eq_ignore_case, PersonName};

/// A person living at an address, keyed by first and last name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl Resident {
    /// Create a resident with empty contact fields.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Natural key of this resident.
    pub fn name(&self) -> PersonName {
        PersonName::new(self.first_name.clone(), self.last_name.clone())
    }

    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        eq_ignore_case(&self.first_name, first_name) && eq_ignore_case(&self.last_name, last_name)
    }

    pub fn lives_at(&self, address: &str) -> bool {
        eq_ignore_case(&self.address, address)
    }

    pub fn lives_in(&self, city: &str) -> bool {
        eq_ignore_case(&self.city, city)
    }

    /// Overwrite every non-key field with the values from `other`.
    pub(crate) fn apply_update(&mut self, other: &Resident) {
        self.address.clone_from(&other.address);
        self.city.clone_from(&other.city);
        self.zip.clone_from(&other.zip);
        self.phone.clone_from(&other.phone);
        self.email.clone_from(&other.email);
    }
}
