//! Joins residents with their medical records.

use chrono::NaiveDate;

use crate::age;
use crate::models::{MedicalDetail, Resident, ResidentView};
use crate::store::Tables;

/// Builds [`ResidentView`]s from one consistent store snapshot.
pub struct PersonProjector<'a> {
    tables: &'a Tables,
    reference_date: NaiveDate,
}

impl<'a> PersonProjector<'a> {
    pub fn new(tables: &'a Tables, reference_date: NaiveDate) -> Self {
        Self {
            tables,
            reference_date,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Project one resident. Never fails.
    ///
    /// Without a medical record both the age and the medical detail stay
    /// unset. A birthdate after the reference date leaves the age unset but
    /// keeps the medical detail, so one bad record cannot break a roster.
    /// Neither case is logged here; callers inspect the view.
    pub fn project(&self, resident: &Resident) -> ResidentView {
        match self
            .tables
            .medical_record(&resident.first_name, &resident.last_name)
        {
            Some(record) => {
                let age = age::age_in_years(record.birthdate, self.reference_date).ok();
                ResidentView::new(resident, age, Some(MedicalDetail::from(record)))
            }
            None => ResidentView::new(resident, None, None),
        }
    }

    /// Project every resident yielded by `residents`, preserving order.
    pub fn project_all<'r, I>(&self, residents: I) -> Vec<ResidentView>
    where
        I: IntoIterator<Item = &'r Resident>,
    {
        residents.into_iter().map(|r| self.project(r)).collect()
    }
}
