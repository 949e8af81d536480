//! Domain models for the SafetyNet alerts system.

mod medical_record;
mod name;
mod resident;
mod station;
mod view;

pub use medical_record::*;
pub use name::*;
pub use resident::*;
pub use station::*;
pub use view::*;
