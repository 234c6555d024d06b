//! Ranked permission grants.

use serde::{Deserialize, Serialize};

use corehr_core::capability::{Capability, ModelKind};
use corehr_core::types::{AuthGroupId, DbId, GroupId};

/// A capability grant from an authorization group over one model,
/// optionally scoped to a research group.
///
/// `research_group = None` is a global grant: the holder sees every
/// record of the target model. Scoped grants carry a `ranking`; among
/// users granted over the same research group, a peer whose grant
/// ranks equal or higher *shadows* their records from lower-ranked
/// managers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPermission {
    pub id: DbId,
    pub auth_group: AuthGroupId,
    pub model: ModelKind,
    pub research_group: Option<GroupId>,
    pub ranking: i32,
    pub capabilities: Vec<Capability>,
}

impl RankedPermission {
    /// Whether this grant carries at least one of the `required`
    /// capabilities. Callers pass the full set of capabilities that
    /// open a record set (view or change both do), so one match is
    /// enough.
    pub fn covers(&self, required: &[Capability]) -> bool {
        required.iter().any(|c| self.capabilities.contains(c))
    }
}
