//! People, research groups, and authorization groups.
//!
//! `Person` is the identity anchor owned by the people module; only
//! the fields this core reads are mirrored here. `User` is the system
//! account, linked to at most one person. Research-group membership
//! carries join/leave dates because the access-scope resolver matches
//! record date ranges against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use corehr_core::types::{AuthGroupId, GroupId, PersonId, UserId};

/// Name of the authorization group whose members handle HR and receive
/// proposal notifications.
pub const PROFILE_HUMAN_RESOURCES: &str = "PROFILE: Human resources";

/// A person tracked by the institute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub full_name: String,
    pub email: Option<String>,
    pub active: bool,
}

/// An authenticated system account. Pure admin accounts may have no
/// linked person; ownership checks then simply never match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub person: Option<PersonId>,
    pub is_superuser: bool,
    /// Authorization groups (profiles) this account belongs to.
    pub auth_groups: Vec<AuthGroupId>,
}

/// A research group (lab).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchGroup {
    pub id: GroupId,
    pub name: String,
}

/// Membership interval of a person in a research group. `None` on
/// either edge means the interval is open on that side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembership {
    pub person: PersonId,
    pub group: GroupId,
    pub date_joined: Option<NaiveDate>,
    pub date_left: Option<NaiveDate>,
}

/// An authorization group (profile) granting capabilities to its
/// member users through [`RankedPermission`](super::RankedPermission)
/// rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthGroup {
    pub id: AuthGroupId,
    pub name: String,
}
