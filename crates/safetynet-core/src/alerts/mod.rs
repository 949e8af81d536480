//! Cross-entity alert queries.
//!
//! Every query runs against one store snapshot and never mutates state. The
//! reference date used for ages is fixed when the engine is built.
//!
//! Missing coverage is handled per query: station and phone rosters and the
//! fire view fail with `NotFound`, while the flood view silently skips
//! unknown stations and the child alert returns empty lists.

mod address;
mod community;
mod station;

pub use address::*;
pub use station::*;

use chrono::NaiveDate;

use crate::projector::PersonProjector;
use crate::store::{EntityStore, Snapshot};

/// Query engine over an [`EntityStore`].
#[derive(Debug, Clone, Copy)]
pub struct AlertsEngine<'a> {
    store: &'a EntityStore,
    reference_date: NaiveDate,
}

impl<'a> AlertsEngine<'a> {
    /// Create an engine computing ages as of `reference_date`.
    pub fn new(store: &'a EntityStore, reference_date: NaiveDate) -> Self {
        Self {
            store,
            reference_date,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    fn snapshot(&self) -> Snapshot<'a> {
        self.store.snapshot()
    }

    fn projector<'t>(&self, tables: &'t Snapshot<'_>) -> PersonProjector<'t> {
        PersonProjector::new(tables, self.reference_date)
    }
}

/// Keep the first occurrence of every value.
fn dedup_first_seen<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
