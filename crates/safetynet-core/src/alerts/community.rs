//! Person lookups and community e-mail lists.

use super::{dedup_first_seen, AlertsEngine};
use crate::models::ResidentView;

impl AlertsEngine<'_> {
    /// Every resident named `first_name last_name`, each projected.
    ///
    /// Usually zero or one, but name uniqueness is only enforced on writes,
    /// so a loaded dataset may hold several residents sharing a name.
    pub fn person_info(&self, first_name: &str, last_name: &str) -> Vec<ResidentView> {
        let tables = self.snapshot();
        let projector = self.projector(&tables);
        projector.project_all(tables.residents_named(first_name, last_name))
    }

    /// E-mail addresses of everyone living in `city`, first-seen order.
    pub fn community_email(&self, city: &str) -> Vec<String> {
        let tables = self.snapshot();
        let emails = tables.residents_in(city).map(|r| r.email.clone());
        dedup_first_seen(emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{MedicalRecord, Resident};
    use crate::store::EntityStore;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    fn resident(first: &str, last: &str, address: &str, city: &str, email: &str) -> Resident {
        let mut r = Resident::new(first, last);
        r.address = address.into();
        r.city = city.into();
        r.email = email.into();
        r
    }

    fn setup_store() -> EntityStore {
        EntityStore::from_dataset(Dataset {
            persons: vec![
                resident("John", "Boyd", "1509 Culver St", "Culver", "jaboyd@email.com"),
                resident("Jacob", "Boyd", "1509 Culver St", "Culver", "drk@email.com"),
                resident("Tenley", "Boyd", "1509 Culver St", "Culver", "tenz@email.com"),
                resident("Sam", "Lee", "1 Main St", "Springfield", "sam@email.com"),
                resident("Sam", "Lee", "2 Main St", "Springfield", "sam@email.com"),
                resident("Jonanathan", "Marrack", "29 15th St", "culver", "drk@email.com"),
            ],
            firestations: vec![],
            medicalrecords: vec![MedicalRecord::new(
                "Sam",
                "Lee",
                NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            )],
        })
    }

    #[test]
    fn test_person_info() {
        let store = setup_store();
        let views = AlertsEngine::new(&store, today()).person_info("john", "boyd");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].email, "jaboyd@email.com");
        assert!(views[0].age.is_none());
    }

    #[test]
    fn test_person_info_returns_every_namesake() {
        let store = setup_store();
        let views = AlertsEngine::new(&store, today()).person_info("Sam", "Lee");

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].address, "1 Main St");
        assert_eq!(views[1].address, "2 Main St");
        assert!(views.iter().all(|v| v.age == Some(54)));
    }

    #[test]
    fn test_person_info_unknown() {
        let store = setup_store();
        assert!(AlertsEngine::new(&store, today()).person_info("No", "One").is_empty());
    }

    #[test]
    fn test_community_email() {
        let store = setup_store();
        let emails = AlertsEngine::new(&store, today()).community_email("CULVER");
        assert_eq!(emails, vec!["jaboyd@email.com", "drk@email.com", "tenz@email.com"]);
    }

    #[test]
    fn test_community_email_unknown_city() {
        let store = setup_store();
        assert!(AlertsEngine::new(&store, today()).community_email("Atlantis").is_empty());
    }
}
