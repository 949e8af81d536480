//! Age classification from birthdates.
//!
//! Ages use calendar-year arithmetic: a person gains a year exactly on the
//! month/day of their birthdate (a 29 February birthday is reached on
//! 1 March in common years). The reference date is always supplied by the
//! caller so that results never depend on the wall clock.

use chrono::NaiveDate;
use thiserror::Error;

/// Oldest age still classified as a child.
pub const CHILD_AGE_LIMIT: u32 = 18;

/// Age computation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("Birthdate {birthdate} is after reference date {reference}")]
    IllegalValue {
        birthdate: NaiveDate,
        reference: NaiveDate,
    },
}

/// Whole years elapsed between `birthdate` and `reference_date`.
///
/// A birthdate equal to the reference date is age 0; a birthdate after it
/// is rejected.
pub fn age_in_years(birthdate: NaiveDate, reference_date: NaiveDate) -> Result<u32, AgeError> {
    reference_date
        .years_since(birthdate)
        .ok_or(AgeError::IllegalValue {
            birthdate,
            reference: reference_date,
        })
}

/// Adults are strictly older than [`CHILD_AGE_LIMIT`]; exactly 18 is a child.
pub fn is_adult(age: u32) -> bool {
    age > CHILD_AGE_LIMIT
}
