//! SafetyNet Alerts Core Library
//!
//! In-memory engine answering the questions emergency responders ask about a
//! community: who lives where, which station covers them, who is a child and
//! which medications and allergies apply.
//!
//! # Architecture
//!
//! ```text
//!             Dataset (persons, firestations, medicalrecords)
//!                                 │
//!                                 ▼
//!          ┌──────────────── EntityStore ────────────────┐
//!          │   residents │ station mappings │ medical    │
//!          │          one RwLock, insertion order         │
//!          └──────┬──────────────┬──────────────┬────────┘
//!                 │              │              │
//!        ResidentRepository StationRepository MedicalRecordRepository
//!                 │                             │
//!                 └─────── PersonProjector ─────┘
//!                       (resident + record + age)
//!                                 │
//!                                 ▼
//!                           AlertsEngine
//!     station roster · phone alert · child alert · fire · flood ·
//!                  person info · community e-mail
//! ```
//!
//! # Core Principle
//!
//! **Nothing is cached.** Every query re-derives its answer from the current
//! store contents, so a write is visible to the very next read.
//!
//! # Modules
//!
//! - [`store`]: Entity store and the three repositories
//! - [`models`]: Domain types (Resident, StationMapping, MedicalRecord, ResidentView)
//! - [`age`]: Age computation and child/adult classification
//! - [`projector`]: Resident + medical record join
//! - [`alerts`]: Cross-entity queries
//! - [`dataset`]: JSON dataset loading and saving

pub mod age;
pub mod alerts;
pub mod dataset;
pub mod models;
pub mod projector;
pub mod store;

// Re-export commonly used types
pub use age::{age_in_years, is_adult, AgeError};
pub use alerts::{AlertsEngine, ChildAlert, FireIncident, FloodHome, StationRoster};
pub use dataset::{Dataset, DatasetError};
pub use models::{MedicalDetail, MedicalRecord, PersonName, Resident, ResidentView, StationMapping};
pub use projector::PersonProjector;
pub use store::{
    EntityStore, MedicalRecordRepository, ResidentRepository, StationRepository, StoreError,
};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum AlertsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Illegal value: {0}")]
    IllegalValue(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

pub type AlertsResult<T> = Result<T, AlertsError>;

impl AlertsError {
    /// HTTP-like status category for the boundary layer.
    pub fn status_code(&self) -> u16 {
        match self {
            AlertsError::NotFound(_) => 404,
            AlertsError::AlreadyExists(_) => 409,
            AlertsError::IllegalValue(_) => 400,
            AlertsError::Dataset(_) => 500,
        }
    }
}

impl From<StoreError> for AlertsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(what) => AlertsError::NotFound(what),
            StoreError::AlreadyExists(what) => AlertsError::AlreadyExists(what),
        }
    }
}

impl From<AgeError> for AlertsError {
    fn from(e: AgeError) -> Self {
        AlertsError::IllegalValue(e.to_string())
    }
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
