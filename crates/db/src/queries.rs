//! Date-window queries over contracts and proposals.
//!
//! These back the expiry dashboards and the periodic warning report.
//! `today` is always an argument so the windows are deterministic.

use chrono::{Days, NaiveDate};

use corehr_core::types::GroupId;

use crate::models::{Contract, ContractProposal};
use crate::store::HrStore;

/// Contracts whose `[start, end]` window contains `today`.
pub fn active_contracts(store: &HrStore, today: NaiveDate) -> Vec<&Contract> {
    store.contracts().filter(|c| c.is_active(today)).collect()
}

/// Contracts already past their end date.
pub fn expired_contracts(store: &HrStore, today: NaiveDate) -> Vec<&Contract> {
    store.contracts().filter(|c| c.end < today).collect()
}

/// Contracts ending within the next `warn_days` days.
pub fn contracts_expiring_soon(
    store: &HrStore,
    today: NaiveDate,
    warn_days: u32,
) -> Vec<&Contract> {
    let limit = today + Days::new(u64::from(warn_days));
    store
        .contracts()
        .filter(|c| today <= c.end && c.end <= limit)
        .collect()
}

/// Contracts whose funding runs out before the contract does: no
/// payout reaches the contract end, and at least one payout ends
/// within the warning window.
pub fn contracts_with_expiring_payouts(
    store: &HrStore,
    today: NaiveDate,
    warn_days: u32,
) -> Vec<&Contract> {
    let limit = today + Days::new(u64::from(warn_days));
    store
        .contracts()
        .filter(|c| {
            let mut payouts = store.payouts_of_contract(c.id).peekable();
            if payouts.peek().is_none() {
                return false;
            }
            let mut covered = false;
            let mut expiring = false;
            for payout in payouts {
                if payout.end >= c.end {
                    covered = true;
                }
                if payout.end <= limit {
                    expiring = true;
                }
            }
            !covered && expiring
        })
        .collect()
}

/// Proposals whose derived term contains `today`.
pub fn active_proposals(store: &HrStore, today: NaiveDate) -> Vec<&ContractProposal> {
    store.proposals().filter(|p| p.is_active(today)).collect()
}

/// Contracts of people without an active proposal on `today`.
pub fn contracts_without_active_proposals(store: &HrStore, today: NaiveDate) -> Vec<&Contract> {
    let covered: Vec<_> = active_proposals(store, today)
        .iter()
        .filter_map(|p| p.person)
        .collect();
    store
        .contracts()
        .filter(|c| !covered.contains(&c.person))
        .collect()
}

/// Contracts that should trigger a renewal warning for the given
/// research groups: ending within the window, flagged for warnings,
/// and with no follow-up proposal starting the day after they end.
/// Sorted by person name for the report.
pub fn contracts_needing_renewal_warning<'a>(
    store: &'a HrStore,
    today: NaiveDate,
    warn_days: u32,
    groups: &[GroupId],
) -> Vec<&'a Contract> {
    let limit = today + Days::new(u64::from(warn_days));
    let mut expiring: Vec<&Contract> = store
        .contracts()
        .filter(|c| c.warning_email && today <= c.end && c.end <= limit)
        .filter(|c| {
            store
                .memberships_of(c.person)
                .any(|m| groups.contains(&m.group))
        })
        .filter(|c| {
            let follow_up_start = c.end + Days::new(1);
            !store
                .proposals()
                .any(|p| p.person == Some(c.person) && p.start == follow_up_start)
        })
        .collect();

    expiring.sort_by_key(|c| {
        store
            .get_person(c.person)
            .map(|p| p.full_name.clone())
            .unwrap_or_default()
    });
    expiring
}
