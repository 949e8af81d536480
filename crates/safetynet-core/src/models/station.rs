//! Fire station coverage models.

use serde::{Deserialize, Serialize};

use super::name::eq_ignore_case;

/// Maps one address to the fire station covering it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationMapping {
    /// Covered address (natural key, case-insensitive)
    pub address: String,
    /// Station number
    #[serde(with = "station_number")]
    pub station: u32,
}

impl StationMapping {
    pub fn new(address: impl Into<String>, station: u32) -> Self {
        Self {
            address: address.into(),
            station,
        }
    }

    pub fn covers(&self, address: &str) -> bool {
        eq_ignore_case(&self.address, address)
    }
}

/// Station numbers are strings in the dataset file (`"3"`); numbers are
/// accepted as well. Always written back as strings.
pub mod station_number {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(station: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&station.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid station number: {s:?}"))),
        }
    }
}
