//! Proposal visibility and permission checks.
//!
//! Two rules set proposals apart from contracts:
//!
//! - the *self-submitted-only* exclusion: the subject of a proposal
//!   does not see it unless they are also the submitter, however the
//!   scope was reached;
//! - the *locked* veto: once a proposal is submitted, approved or
//!   rejected, update and remove evaluate to `false` for everyone.
//!
//! Print and approve are pure capability checks with no ownership
//! fallback -- neither the submitter nor the subject can print or
//! approve by default.

use corehr_core::capability::{Capability, ModelKind, LIST_CAPABILITIES};
use corehr_core::types::DbId;

use crate::models::{ContractProposal, User};
use crate::scope::grants;
use crate::store::HrStore;

fn is_subject(user: &User, proposal: &ContractProposal) -> bool {
    user.person.is_some() && user.person == proposal.person
}

fn is_supervisor(user: &User, proposal: &ContractProposal) -> bool {
    user.person == Some(proposal.supervisor)
}

fn is_responsible(user: &User, proposal: &ContractProposal) -> bool {
    proposal.responsible == user.id
}

/// A subject who did not submit the proposal does not get to see it.
fn self_submitted_only(user: &User, proposal: &ContractProposal) -> bool {
    is_subject(user, proposal) && !is_responsible(user, proposal)
}

/// Proposals the user submitted, supervises, or is the subject of --
/// minus the subject-but-not-submitter ones.
pub fn owned_by<'a>(store: &'a HrStore, user: &User) -> Vec<&'a ContractProposal> {
    if user.is_superuser {
        return store.proposals().collect();
    }
    store
        .proposals()
        .filter(|p| is_subject(user, p) || is_supervisor(user, p) || is_responsible(user, p))
        .filter(|p| !self_submitted_only(user, p))
        .collect()
}

/// Proposals the user may manage given the required capabilities.
pub fn managed_by<'a>(
    store: &'a HrStore,
    user: &User,
    required: &[Capability],
    default: Option<Vec<&'a ContractProposal>>,
) -> Vec<&'a ContractProposal> {
    if user.is_superuser {
        return store.proposals().collect();
    }

    let grants = grants::grants_for(store, user, ModelKind::ContractProposal, required);
    if grants.is_empty() {
        return default.unwrap_or_default();
    }
    if grants::has_global_grant(&grants) {
        return store.proposals().collect();
    }

    let groups = grants::granted_groups(&grants);
    let shadowing = grants::shadowing_auth_groups(store, &grants);
    let candidates = grants::candidate_persons(store, user, &grants);

    // A proposal supervisor belonging to a managed group is visible
    // unless their own account is shadowed by a peer grant.
    let supervisor_in_scope = |p: &ContractProposal| {
        let member = store
            .memberships_of(p.supervisor)
            .any(|m| groups.contains(&m.group));
        if !member {
            return false;
        }
        let shadowed = store
            .user_of_person(p.supervisor)
            .is_some_and(|u| u.auth_groups.iter().any(|g| shadowing.contains(g)));
        !shadowed
    };

    store
        .proposals()
        .filter(|p| {
            is_subject(user, p)
                || is_responsible(user, p)
                || is_supervisor(user, p)
                || supervisor_in_scope(p)
                || p.person.is_some_and(|person| {
                    candidates.contains(&person)
                        && store.memberships_of(person).any(|m| {
                            groups.contains(&m.group)
                                // Proposals are matched on their start
                                // date only; the end is still tentative.
                                && grants::membership_covers(m, p.start, p.start)
                        })
                })
        })
        .filter(|p| !self_submitted_only(user, p))
        .collect()
}

/// What the list view shows: managed records, or owned ones when no
/// grant applies.
pub fn list_permissions<'a>(store: &'a HrStore, user: &User) -> Vec<&'a ContractProposal> {
    let default = owned_by(store, user);
    managed_by(store, user, LIST_CAPABILITIES, Some(default))
}

pub fn has_add_permissions(store: &HrStore, user: &User) -> bool {
    user.is_superuser
        || !grants::grants_for(store, user, ModelKind::ContractProposal, &[Capability::Add])
            .is_empty()
}

pub fn has_view_permissions(store: &HrStore, user: &User, proposal: DbId) -> bool {
    list_permissions(store, user).iter().any(|p| p.id == proposal)
}

/// Update requires the proposal in scope *and* unlocked. The lock wins
/// over ownership, rank, and superuser alike.
pub fn has_update_permissions(store: &HrStore, user: &User, proposal: DbId) -> bool {
    let default = owned_by(store, user);
    let scope = managed_by(store, user, &[Capability::Change], Some(default));
    scope
        .iter()
        .any(|p| p.id == proposal && !p.is_locked())
}

pub fn has_remove_permissions(store: &HrStore, user: &User, proposal: DbId) -> bool {
    let default = owned_by(store, user);
    let scope = managed_by(store, user, &[Capability::Delete], Some(default));
    scope
        .iter()
        .any(|p| p.id == proposal && !p.is_locked())
}

/// Printing is an explicit capability; ownership gives no fallback.
pub fn has_print_permissions(store: &HrStore, user: &User, proposal: DbId) -> bool {
    managed_by(store, user, &[Capability::PrintProposal], None)
        .iter()
        .any(|p| p.id == proposal)
}

/// Approving (or rejecting) is an explicit capability; ownership gives
/// no fallback.
pub fn has_approve_permissions(store: &HrStore, user: &User, proposal: DbId) -> bool {
    managed_by(store, user, &[Capability::ApproveProposal], None)
        .iter()
        .any(|p| p.id == proposal)
}
