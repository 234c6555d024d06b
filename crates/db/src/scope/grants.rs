//! Shared grant lookup and the peer-shadowing computation.
//!
//! Shadowing is computed in two explicit steps rather than one nested
//! filter: first the set of authorization groups holding an
//! equal-or-higher-ranked grant over any of the granted research
//! groups, then the set of persons whose own account belongs to one of
//! those groups. Records of shadowed persons stay visible only to the
//! shadowed user themself.

use std::collections::HashSet;

use chrono::NaiveDate;

use corehr_core::capability::{Capability, ModelKind};
use corehr_core::types::{AuthGroupId, GroupId, PersonId};

use crate::models::{GroupMembership, RankedPermission, User};
use crate::store::HrStore;

/// Ranked permissions granted to any of `user`'s authorization groups
/// for `model`, restricted to grants carrying at least one of the
/// required capabilities.
pub fn grants_for<'a>(
    store: &'a HrStore,
    user: &User,
    model: ModelKind,
    required: &[Capability],
) -> Vec<&'a RankedPermission> {
    store
        .permissions()
        .filter(|p| {
            p.model == model && user.auth_groups.contains(&p.auth_group) && p.covers(required)
        })
        .collect()
}

/// A grant with no research-group scope opens the full record set.
pub fn has_global_grant(grants: &[&RankedPermission]) -> bool {
    grants.iter().any(|g| g.research_group.is_none())
}

/// Distinct research groups referenced by the grants.
pub fn granted_groups(grants: &[&RankedPermission]) -> HashSet<GroupId> {
    grants.iter().filter_map(|g| g.research_group).collect()
}

/// Step 1: authorization groups holding a grant over one of the
/// granted research groups at a ranking equal or above the granting
/// ranking. Grants on *any* model count; seniority over a group is
/// not per-model.
pub fn shadowing_auth_groups(
    store: &HrStore,
    grants: &[&RankedPermission],
) -> HashSet<AuthGroupId> {
    let rankings: Vec<(GroupId, i32)> = grants
        .iter()
        .filter_map(|g| g.research_group.map(|rg| (rg, g.ranking)))
        .collect();

    store
        .permissions()
        .filter(|p| match p.research_group {
            Some(rg) => rankings
                .iter()
                .any(|(group, ranking)| *group == rg && p.ranking >= *ranking),
            None => false,
        })
        .map(|p| p.auth_group)
        .collect()
}

/// Step 2: persons other than `user` themself whose account belongs to
/// a shadowing authorization group.
pub fn shadowed_persons(
    store: &HrStore,
    user: &User,
    shadowing: &HashSet<AuthGroupId>,
) -> HashSet<PersonId> {
    store
        .users()
        .filter(|u| u.id != user.id)
        .filter(|u| u.auth_groups.iter().any(|g| shadowing.contains(g)))
        .filter_map(|u| u.person)
        .collect()
}

/// Persons reachable through the group-scoped grants: members (past or
/// present) of any granted research group, minus shadowed subjects.
pub fn candidate_persons(
    store: &HrStore,
    user: &User,
    grants: &[&RankedPermission],
) -> HashSet<PersonId> {
    let groups = granted_groups(grants);
    let shadowing = shadowing_auth_groups(store, grants);
    let shadowed = shadowed_persons(store, user, &shadowing);

    store
        .memberships()
        .filter(|m| groups.contains(&m.group))
        .map(|m| m.person)
        .filter(|p| !shadowed.contains(p))
        .collect()
}

/// Whether a membership interval covers `[start, end]`. Open edges:
/// a missing leave date covers any end, a fully unset interval covers
/// everything, and a leave date without a join date covers nothing.
pub fn membership_covers(m: &GroupMembership, start: NaiveDate, end: NaiveDate) -> bool {
    match (m.date_joined, m.date_left) {
        (Some(joined), Some(left)) => joined <= start && left >= end,
        (Some(joined), None) => joined <= start,
        (None, None) => true,
        (None, Some(_)) => false,
    }
}
