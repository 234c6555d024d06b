//! Contract proposals: the approval envelope around prospective terms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corehr_core::dates::contract_end_date;
use corehr_core::status::{Motive, ProposalStatus};
use corehr_core::types::{DbId, PersonId, UserId};

/// A request to hire, renew, or update an employment contract.
///
/// The subject is identified either by a linked `person` or by the
/// free-text `person_name`/`person_email` pair -- exactly one path.
/// `end_date` is derived like a contract's end and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractProposal {
    pub id: DbId,
    pub motive: Motive,
    pub status: ProposalStatus,
    /// Set at creation, immutable afterwards.
    pub created_on: NaiveDate,
    pub start: NaiveDate,
    pub months_duration: u32,
    pub days_duration: u32,
    pub salary: Decimal,
    pub description: String,
    pub person: Option<PersonId>,
    pub person_name: Option<String>,
    /// Admin uses this to contact a newcomer not yet in the system.
    pub person_email: Option<String>,
    pub fellowship_type: Option<DbId>,
    pub position: Option<DbId>,
    /// The account that submitted the proposal. Mandatory.
    pub responsible: UserId,
    /// A person with the group-responsible profile.
    pub supervisor: PersonId,
    pub closed_on: Option<NaiveDate>,
    pub closed_by: Option<UserId>,
    /// Back-reference set when approval generates the contract.
    pub contract: Option<DbId>,
}

impl ContractProposal {
    /// Derived end date, same rule as a contract's.
    pub fn end_date(&self) -> NaiveDate {
        contract_end_date(self.start, self.months_duration, self.days_duration)
    }

    /// Locked proposals reject field edits regardless of ownership.
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.start <= today && today <= self.end_date()
    }
}

/// Input for opening a proposal. Status starts at `pending`.
#[derive(Debug, Clone)]
pub struct NewProposal {
    pub motive: Motive,
    pub start: NaiveDate,
    pub months_duration: u32,
    pub days_duration: u32,
    pub salary: Decimal,
    pub description: String,
    pub person: Option<PersonId>,
    pub person_name: Option<String>,
    pub person_email: Option<String>,
    pub fellowship_type: Option<DbId>,
    pub position: Option<DbId>,
    pub responsible: UserId,
    pub supervisor: PersonId,
}
