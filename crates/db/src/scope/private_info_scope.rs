//! Private-info visibility and permission checks.
//!
//! The most restrictive scope: by default a user sees only their own
//! record. Group-scoped grants expose records of group members
//! (membership dates are not consulted -- private info has no
//! effective period), minus shadowed subjects. The no-grant fallback
//! of `managed_by` is `owned_by`, never the empty set.

use corehr_core::capability::{Capability, ModelKind, LIST_CAPABILITIES};
use corehr_core::types::DbId;

use crate::models::{PrivateInfo, User};
use crate::scope::grants;
use crate::store::HrStore;

fn is_own(user: &User, info: &PrivateInfo) -> bool {
    user.person == Some(info.person)
}

/// The user's own record, nothing else.
pub fn owned_by<'a>(store: &'a HrStore, user: &User) -> Vec<&'a PrivateInfo> {
    store.private_infos().filter(|i| is_own(user, i)).collect()
}

pub fn managed_by<'a>(
    store: &'a HrStore,
    user: &User,
    required: &[Capability],
) -> Vec<&'a PrivateInfo> {
    if user.is_superuser {
        return store.private_infos().collect();
    }

    let grants = grants::grants_for(store, user, ModelKind::PrivateInfo, required);
    if grants.is_empty() {
        return owned_by(store, user);
    }
    if grants::has_global_grant(&grants) {
        return store.private_infos().collect();
    }

    let groups = grants::granted_groups(&grants);
    let shadowing = grants::shadowing_auth_groups(store, &grants);
    let shadowed = grants::shadowed_persons(store, user, &shadowing);

    store
        .private_infos()
        .filter(|i| {
            store
                .memberships_of(i.person)
                .any(|m| groups.contains(&m.group))
        })
        .filter(|i| !shadowed.contains(&i.person))
        .collect()
}

pub fn list_permissions<'a>(store: &'a HrStore, user: &User) -> Vec<&'a PrivateInfo> {
    managed_by(store, user, LIST_CAPABILITIES)
}

pub fn has_add_permissions(store: &HrStore, user: &User) -> bool {
    user.is_superuser
        || !grants::grants_for(store, user, ModelKind::PrivateInfo, &[Capability::Add]).is_empty()
}

pub fn has_view_permissions(store: &HrStore, user: &User, info: DbId) -> bool {
    list_permissions(store, user).iter().any(|i| i.id == info)
}

pub fn has_update_permissions(store: &HrStore, user: &User, info: DbId) -> bool {
    managed_by(store, user, &[Capability::Change])
        .iter()
        .any(|i| i.id == info)
}

pub fn has_remove_permissions(store: &HrStore, user: &User, info: DbId) -> bool {
    managed_by(store, user, &[Capability::Delete])
        .iter()
        .any(|i| i.id == info)
}
