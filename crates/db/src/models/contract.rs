//! Employment contracts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corehr_core::dates;
use corehr_core::types::{DbId, PersonId};

/// How social security is covered for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialSecurity {
    Grants,
    Cf,
    CfRunningCosts,
}

/// An employment agreement. In the intended workflow contracts are
/// only created by approving a proposal; the store recomputes `end`
/// on every save, so it is derived state, never an input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: DbId,
    pub person: PersonId,
    pub start: NaiveDate,
    /// Duration in calendar months.
    pub months_duration: u32,
    /// Additional days on top of the month duration.
    pub days_duration: u32,
    /// Derived: `start + months + days - 1 day`. Overwritten on save.
    pub end: NaiveDate,
    /// Monthly gross salary or stipend.
    pub salary: Decimal,
    /// Scientific work description.
    pub description: String,
    pub social_security: Option<SocialSecurity>,
    pub social_security_paid: Option<bool>,
    pub social_security_start: Option<NaiveDate>,
    pub social_security_end: Option<NaiveDate>,
    pub fellowship_ref: Option<String>,
    pub contract_ref: Option<String>,
    pub fellowship_type: Option<DbId>,
    pub position: Option<DbId>,
    pub financing: Option<DbId>,
    pub supervisor: Option<PersonId>,
    pub notes: String,
    /// Send an alert warning when the contract is ending.
    pub warning_email: bool,
}

impl Contract {
    pub fn is_active(&self, today: NaiveDate) -> bool {
        dates::is_active(self.start, self.end, today)
    }

    pub fn is_expiring_soon(&self, today: NaiveDate, warn_days: u32) -> bool {
        dates::is_expiring_soon(self.end, today, warn_days)
    }

    /// Renewal is offered once the contract is expiring soon or over.
    pub fn can_be_renewed(&self, today: NaiveDate, warn_days: u32) -> bool {
        dates::can_be_renewed(self.end, today, warn_days)
    }
}

/// Input for creating a contract. `end` is absent on purpose.
#[derive(Debug, Clone)]
pub struct NewContract {
    pub person: PersonId,
    pub start: NaiveDate,
    pub months_duration: u32,
    pub days_duration: u32,
    pub salary: Decimal,
    pub description: String,
    pub fellowship_type: Option<DbId>,
    pub position: Option<DbId>,
    pub supervisor: Option<PersonId>,
}
