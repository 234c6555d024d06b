//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use corehr_core::status::Motive;
use corehr_core::types::{PersonId, UserId};
use corehr_db::models::{NewContract, NewProposal, PrivateInfo, User, PROFILE_HUMAN_RESOURCES};
use corehr_db::store::HrStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A twelve-month contract draft with the fixture salary of 1000.
pub fn contract(person: PersonId, start: NaiveDate, months: u32) -> NewContract {
    NewContract {
        person,
        start,
        months_duration: months,
        days_duration: 0,
        salary: dec!(1000.00),
        description: "Research fellowship".to_string(),
        fellowship_type: None,
        position: None,
        supervisor: None,
    }
}

/// A proposal draft matching the fixture contract shape.
pub fn proposal(
    person: Option<PersonId>,
    responsible: UserId,
    supervisor: PersonId,
    start: NaiveDate,
    months: u32,
) -> NewProposal {
    NewProposal {
        motive: Motive::New,
        start,
        months_duration: months,
        days_duration: 0,
        salary: dec!(1000.00),
        description: "Research fellowship".to_string(),
        person,
        person_name: None,
        person_email: None,
        fellowship_type: None,
        position: None,
        responsible,
        supervisor,
    }
}

/// An otherwise-empty private-info record for a person.
pub fn private_info(person: PersonId) -> PrivateInfo {
    PrivateInfo {
        id: 0,
        person,
        id_document_type: None,
        id_document_number: None,
        id_document_expiration: None,
        address: String::new(),
        bank_info: String::new(),
        iban: None,
        nif: None,
        social_security_number: None,
        has_health_insurance: None,
        health_insurance_start: None,
        citizenship: None,
        birth_city: None,
        birth_country: None,
    }
}

/// Re-fetch a user after fixture mutations such as auth-group changes.
pub fn user(store: &HrStore, id: UserId) -> User {
    store.get_user(id).unwrap().clone()
}

/// Seed the HR profile group with one staff account so proposal
/// notifications have a recipient. Returns the staff user id.
pub fn seed_hr_profile(store: &mut HrStore) -> UserId {
    let profile = store.create_auth_group(PROFILE_HUMAN_RESOURCES);
    let staff = store.create_user("hr.staff", Some("hr@example.org"), None, false);
    store.add_user_to_auth_group(staff, profile).unwrap();
    staff
}
