//! Integration tests for the date-window queries backing the expiry
//! dashboards and the renewal warning report.

mod common;

use rust_decimal_macros::dec;

use corehr_db::models::NewPayout;
use corehr_db::queries;
use corehr_db::store::HrStore;

use common::{contract, date, proposal};

#[test]
fn active_expired_and_expiring_windows() {
    let mut store = HrStore::new();
    let ana = store.create_person("Ana Martins", None);
    let running = store.create_contract(contract(ana, date(2024, 1, 1), 12));
    let finished = store.create_contract(contract(ana, date(2022, 1, 1), 12));
    let upcoming = store.create_contract(contract(ana, date(2025, 2, 1), 12));

    let today = date(2024, 12, 10);

    let active: Vec<_> = queries::active_contracts(&store, today)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(active, vec![running]);

    let expired: Vec<_> = queries::expired_contracts(&store, today)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(expired, vec![finished]);

    // The running contract ends 2024-12-31, 21 days out.
    let soon: Vec<_> = queries::contracts_expiring_soon(&store, today, 30)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(soon, vec![running]);
    assert!(queries::contracts_expiring_soon(&store, today, 14).is_empty());

    // Contracts that have not started yet are neither active nor expired.
    assert!(!active.contains(&upcoming));
    assert!(!expired.contains(&upcoming));
}

#[test]
fn expiring_payouts_mean_funding_ends_before_the_contract() {
    let mut store = HrStore::new();
    let ana = store.create_person("Ana Martins", None);

    // Funded only until the end of the year, contract runs to June.
    let underfunded = store.create_contract(contract(ana, date(2024, 7, 1), 12));
    store
        .create_payout(NewPayout {
            contract: underfunded,
            project: 7,
            start: date(2024, 7, 1),
            end: date(2024, 12, 31),
            amount: dec!(1000.00),
        })
        .unwrap();

    // Fully funded to the contract end.
    let funded = store.create_contract(contract(ana, date(2024, 7, 1), 12));
    store
        .create_payout(NewPayout {
            contract: funded,
            project: 7,
            start: date(2024, 7, 1),
            end: date(2025, 6, 30),
            amount: dec!(1000.00),
        })
        .unwrap();

    // No payouts at all: nothing to warn about.
    let _unfunded = store.create_contract(contract(ana, date(2024, 7, 1), 12));

    let today = date(2024, 12, 10);
    let flagged: Vec<_> = queries::contracts_with_expiring_payouts(&store, today, 30)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(flagged, vec![underfunded]);

    // Outside the warning window nothing is flagged yet.
    assert!(queries::contracts_with_expiring_payouts(&store, date(2024, 10, 1), 30).is_empty());
}

#[test]
fn contracts_without_active_proposals_checks_the_person() {
    let mut store = HrStore::new();
    let ana = store.create_person("Ana Martins", None);
    let bruno = store.create_person("Bruno Dias", None);
    let rui = store.create_person("Rui Costa", None);
    let rui_user = store.create_user("rui", None, Some(rui), false);

    let ana_contract = store.create_contract(contract(ana, date(2024, 1, 1), 12));
    let bruno_contract = store.create_contract(contract(bruno, date(2024, 1, 1), 12));

    // Ana already has a proposal running over today.
    store.create_proposal(
        proposal(Some(ana), rui_user, rui, date(2024, 6, 1), 12),
        date(2024, 5, 1),
    )
    .unwrap();
    // Bruno's proposal is long finished.
    store.create_proposal(
        proposal(Some(bruno), rui_user, rui, date(2022, 1, 1), 6),
        date(2021, 12, 1),
    )
    .unwrap();

    let today = date(2024, 12, 10);
    let uncovered: Vec<_> = queries::contracts_without_active_proposals(&store, today)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(uncovered, vec![bruno_contract]);
    assert!(!uncovered.contains(&ana_contract));
}

#[test]
fn renewal_warnings_filter_group_flag_and_follow_up() {
    let mut store = HrStore::new();
    let alpha = store.create_research_group("Alpha");
    let beta = store.create_research_group("Beta");

    let zulmira = store.create_person("Zulmira Reis", None);
    let ana = store.create_person("Ana Martins", None);
    let bruno = store.create_person("Bruno Dias", None);
    let carla = store.create_person("Carla Nunes", None);
    let rui = store.create_person("Rui Costa", None);
    let rui_user = store.create_user("rui", None, Some(rui), false);
    for person in [zulmira, ana, bruno] {
        store.add_membership(person, alpha, None, None);
    }
    store.add_membership(carla, beta, None, None);

    // All four contracts end 2024-12-31, inside the 30-day window.
    let zulmira_contract = store.create_contract(contract(zulmira, date(2024, 1, 1), 12));
    let ana_contract = store.create_contract(contract(ana, date(2024, 1, 1), 12));
    let bruno_contract = store.create_contract(contract(bruno, date(2024, 1, 1), 12));
    let _carla_contract = store.create_contract(contract(carla, date(2024, 1, 1), 12));

    // Bruno opted out of warning mails.
    let mut opted_out = store.get_contract(bruno_contract).unwrap().clone();
    opted_out.warning_email = false;
    store.save_contract(opted_out).unwrap();

    // Ana already has a follow-up proposal starting the day after.
    store.create_proposal(
        proposal(Some(ana), rui_user, rui, date(2025, 1, 1), 12),
        date(2024, 12, 1),
    )
    .unwrap();

    let today = date(2024, 12, 10);
    let warned: Vec<_> = queries::contracts_needing_renewal_warning(&store, today, 30, &[alpha])
        .iter()
        .map(|c| c.id)
        .collect();
    // Carla is in another group, Bruno opted out, Ana is covered.
    assert_eq!(warned, vec![zulmira_contract]);
    assert!(!warned.contains(&ana_contract));
}

#[test]
fn renewal_warnings_are_sorted_by_person_name() {
    let mut store = HrStore::new();
    let alpha = store.create_research_group("Alpha");
    let zulmira = store.create_person("Zulmira Reis", None);
    let ana = store.create_person("Ana Martins", None);
    store.add_membership(zulmira, alpha, None, None);
    store.add_membership(ana, alpha, None, None);

    // Insertion order is by id: Zulmira's contract first.
    store.create_contract(contract(zulmira, date(2024, 1, 1), 12));
    store.create_contract(contract(ana, date(2024, 1, 1), 12));

    let warned = queries::contracts_needing_renewal_warning(&store, date(2024, 12, 10), 30, &[alpha]);
    let people: Vec<_> = warned.iter().map(|c| c.person).collect();
    assert_eq!(people, vec![ana, zulmira]);
}
