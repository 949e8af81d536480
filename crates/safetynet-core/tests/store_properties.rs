//! Property-based tests for the entity store and age classifier.
//!
//! # Invariants tested
//!
//! - **Create/find:** a created resident is found again unchanged.
//! - **Uniqueness:** creating an existing key fails and changes nothing.
//! - **Existence:** update/delete of a missing key fails and changes nothing.
//! - **Partition:** residents grouped by address come back exactly as created.
//! - **Age arithmetic:** N anniversaries give age N; future birthdates fail.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use safetynet_core::{age_in_years, is_adult, AgeError, EntityStore, Resident, StoreError};

const ADDRESSES: [&str; 4] = ["1509 Culver St", "29 15th St", "834 Binoc Ave", "644 Gershwin Cir"];

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["John", "jacob", "Tenley", "ROGER", "Felicia", "Zach", "Lily"])
        .prop_map(String::from)
}

fn resident_strategy() -> impl Strategy<Value = Resident> {
    (
        name_strategy(),
        name_strategy(),
        prop::sample::select(ADDRESSES.to_vec()),
        "[0-9]{3}-[0-9]{3}-[0-9]{4}",
    )
        .prop_map(|(first, last, address, phone)| {
            let mut resident = Resident::new(first, last);
            resident.address = address.to_string();
            resident.city = "Culver".into();
            resident.phone = phone;
            resident
        })
}

/// Residents with pairwise distinct (case-insensitive) names.
fn unique_residents() -> impl Strategy<Value = Vec<Resident>> {
    prop::collection::vec(resident_strategy(), 0..20).prop_map(|residents| {
        let mut seen = HashSet::new();
        residents
            .into_iter()
            .filter(|r| seen.insert((r.first_name.to_lowercase(), r.last_name.to_lowercase())))
            .collect()
    })
}

fn store_with(residents: &[Resident]) -> EntityStore {
    let store = EntityStore::new();
    for resident in residents {
        store.residents().create(resident).unwrap();
    }
    store
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900_i32..2100, 1_u32..=12, 1_u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn created_resident_is_found(residents in unique_residents(), candidate in resident_strategy()) {
        let store = store_with(&residents);
        let taken = store.residents().find(&candidate.first_name, &candidate.last_name).is_some();

        let result = store.residents().create(&candidate);

        if taken {
            prop_assert!(matches!(result, Err(StoreError::AlreadyExists(_))));
        } else {
            prop_assert_eq!(result.unwrap(), candidate.clone());
            let found = store.residents().find(
                &candidate.first_name.to_uppercase(),
                &candidate.last_name.to_lowercase(),
            );
            prop_assert_eq!(found, Some(candidate));
        }
    }

    #[test]
    fn duplicate_create_leaves_store_unchanged(residents in unique_residents(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!residents.is_empty());
        let store = store_with(&residents);
        let before = store.to_dataset();

        let mut duplicate = pick.get(&residents).clone();
        duplicate.first_name = duplicate.first_name.to_uppercase();
        duplicate.phone = "000-000-0000".into();

        prop_assert!(matches!(store.residents().create(&duplicate), Err(StoreError::AlreadyExists(_))));
        prop_assert_eq!(store.to_dataset(), before);
    }

    #[test]
    fn missing_key_update_and_delete_fail(residents in unique_residents(), candidate in resident_strategy()) {
        let store = store_with(&residents);
        prop_assume!(store.residents().find(&candidate.first_name, &candidate.last_name).is_none());
        let before = store.to_dataset();

        prop_assert!(matches!(store.residents().update(&candidate), Err(StoreError::NotFound(_))));
        prop_assert!(matches!(
            store.residents().delete(&candidate.first_name, &candidate.last_name),
            Err(StoreError::NotFound(_))
        ));
        prop_assert_eq!(store.to_dataset(), before);
    }

    #[test]
    fn address_partition_round_trips(residents in unique_residents()) {
        let store = store_with(&residents);

        for address in ADDRESSES {
            let expected: Vec<Resident> = residents
                .iter()
                .filter(|r| r.address == address)
                .cloned()
                .collect();
            prop_assert_eq!(store.residents().find_all_by_address(address), expected);
        }
    }

    #[test]
    fn age_counts_anniversaries(birthdate in date_strategy(), years in 0_i32..120) {
        let reference = birthdate.with_year(birthdate.year() + years).unwrap();

        let age = age_in_years(birthdate, reference);
        prop_assert_eq!(age.clone(), Ok(years as u32));
        prop_assert_eq!(age_in_years(birthdate, reference), age);

        if let Some(eve) = reference.pred_opt() {
            if years > 0 {
                prop_assert_eq!(age_in_years(birthdate, eve), Ok(years as u32 - 1));
            }
        }
    }

    #[test]
    fn future_birthdate_is_illegal(reference in date_strategy()) {
        let birthdate = reference.succ_opt().unwrap();
        prop_assert_eq!(
            age_in_years(birthdate, reference),
            Err(AgeError::IllegalValue { birthdate, reference })
        );
    }

    #[test]
    fn adulthood_starts_after_eighteen(age in 0_u32..150) {
        prop_assert_eq!(is_adult(age), age >= 19);
    }
}
