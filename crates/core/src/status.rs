//! Contract-proposal status state machine and hire motives.
//!
//! A proposal starts `pending`, may be marked `printed`, is handed to
//! the approvers as `submitted` and terminates at `approved` or
//! `rejected`. Terminal states have no exits; once a proposal leaves
//! the open states it is also *locked* and rejects field edits
//! regardless of who asks (the scope resolvers enforce that part).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Printed,
    Submitted,
    Approved,
    Rejected,
}

impl ProposalStatus {
    /// Returns the set of statuses reachable from `self`.
    ///
    /// Terminal states (`Approved`, `Rejected`) return an empty slice
    /// because no further transitions are allowed.
    pub fn valid_transitions(self) -> &'static [ProposalStatus] {
        use ProposalStatus::*;
        match self {
            Pending => &[Printed, Submitted, Approved, Rejected],
            Printed => &[Submitted, Approved, Rejected],
            Submitted => &[Approved, Rejected],
            Approved | Rejected => &[],
        }
    }

    /// Check whether a transition from `self` to `to` is valid.
    pub fn can_transition(self, to: ProposalStatus) -> bool {
        self.valid_transitions().contains(&to)
    }

    /// Validate a transition, returning a conflict error for invalid ones.
    pub fn validate_transition(self, to: ProposalStatus) -> CoreResult<()> {
        if self.can_transition(to) {
            Ok(())
        } else {
            Err(CoreError::Conflict(format!(
                "Invalid proposal status transition: {self:?} -> {to:?}"
            )))
        }
    }

    /// A locked proposal rejects field edits regardless of ownership.
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            ProposalStatus::Submitted | ProposalStatus::Approved | ProposalStatus::Rejected
        )
    }

    /// Terminal statuses permit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProposalStatus::Approved | ProposalStatus::Rejected)
    }
}

/// Why a proposal was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motive {
    /// First hire of a person.
    New,
    /// Renew a contract that is expiring or expired.
    Renewal,
    /// Renegotiate the terms of an active contract.
    Update,
}
