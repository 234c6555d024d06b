//! Contract visibility and permission checks.
//!
//! Ownership means the contract is the user's own or the user is its
//! supervisor. Group-scoped grants additionally expose contracts of
//! candidate persons whose membership interval covers the whole
//! contract window `[start, end]`.

use corehr_core::capability::{Capability, ModelKind, LIST_CAPABILITIES};
use corehr_core::types::DbId;

use crate::models::{Contract, User};
use crate::scope::grants;
use crate::store::HrStore;

fn is_own(user: &User, contract: &Contract) -> bool {
    user.person.is_some()
        && (user.person == Some(contract.person) || user.person == contract.supervisor)
}

/// Contracts the user owns or supervises. The no-grant default.
pub fn owned_by<'a>(store: &'a HrStore, user: &User) -> Vec<&'a Contract> {
    store.contracts().filter(|c| is_own(user, c)).collect()
}

/// Contracts the user may manage given the required capabilities,
/// falling back to `default` (usually empty) when no grant applies.
pub fn managed_by<'a>(
    store: &'a HrStore,
    user: &User,
    required: &[Capability],
    default: Option<Vec<&'a Contract>>,
) -> Vec<&'a Contract> {
    if user.is_superuser {
        return store.contracts().collect();
    }

    let grants = grants::grants_for(store, user, ModelKind::Contract, required);
    if grants.is_empty() {
        return default.unwrap_or_default();
    }
    if grants::has_global_grant(&grants) {
        return store.contracts().collect();
    }

    let groups = grants::granted_groups(&grants);
    let candidates = grants::candidate_persons(store, user, &grants);

    store
        .contracts()
        .filter(|c| {
            is_own(user, c)
                || (candidates.contains(&c.person)
                    && store.memberships_of(c.person).any(|m| {
                        groups.contains(&m.group)
                            && grants::membership_covers(m, c.start, c.end)
                    }))
        })
        .collect()
}

/// What the list view shows: managed records, or owned ones when no
/// grant applies.
pub fn list_permissions<'a>(store: &'a HrStore, user: &User) -> Vec<&'a Contract> {
    let default = owned_by(store, user);
    managed_by(store, user, LIST_CAPABILITIES, Some(default))
}

pub fn has_add_permissions(store: &HrStore, user: &User) -> bool {
    user.is_superuser
        || !grants::grants_for(store, user, ModelKind::Contract, &[Capability::Add]).is_empty()
}

pub fn has_view_permissions(store: &HrStore, user: &User, contract: DbId) -> bool {
    list_permissions(store, user).iter().any(|c| c.id == contract)
}

/// Ownership alone never grants contract edits; a change grant must
/// cover the record.
pub fn has_update_permissions(store: &HrStore, user: &User, contract: DbId) -> bool {
    managed_by(store, user, &[Capability::Change], None)
        .iter()
        .any(|c| c.id == contract)
}

pub fn has_remove_permissions(store: &HrStore, user: &User, contract: DbId) -> bool {
    managed_by(store, user, &[Capability::Delete], None)
        .iter()
        .any(|c| c.id == contract)
}
