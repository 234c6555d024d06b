//! Capability and model identifiers used by ranked-permission grants.
//!
//! A grant row pairs an authorization group with a target model, an
//! optional research-group scope, a ranking, and a set of capabilities.
//! The constants and enums here are the vocabulary of those rows.

use serde::{Deserialize, Serialize};

/// Actions a ranked permission can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    View,
    Change,
    Add,
    Delete,
    /// Print a proposal to PDF. Never implied by ownership.
    PrintProposal,
    /// Approve or reject proposals. Never implied by ownership.
    ApproveProposal,
}

/// Models the access-scope resolver can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Contract,
    ContractProposal,
    PrivateInfo,
}

/// Capability set required to list records (view or edit them).
pub const LIST_CAPABILITIES: &[Capability] = &[Capability::View, Capability::Change];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_capabilities_are_view_and_change() {
        assert_eq!(
            LIST_CAPABILITIES,
            &[Capability::View, Capability::Change]
        );
    }
}
