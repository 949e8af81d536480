//! Natural keys and case-insensitive matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compare two strings ignoring case (Unicode lowercase folding).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The (first name, last name) key shared by residents and medical records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Case-insensitive match against a first/last name pair.
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        eq_ignore_case(&self.first_name, first_name) && eq_ignore_case(&self.last_name, last_name)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
