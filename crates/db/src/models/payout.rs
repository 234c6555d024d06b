//! Funded slices of a contract's salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corehr_core::payout::payout_total;
use corehr_core::types::{DbId, ProjectId};

/// A payout covers `[start, end]` of a contract from one finance
/// project. Unlike contract dates, both edges are set directly.
/// `total` is a persisted cache of the prorated amount, recomputed by
/// the store on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub id: DbId,
    pub contract: DbId,
    pub project: ProjectId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Monthly amount.
    pub amount: Decimal,
    /// Derived: prorated total over `[start, end]`. Overwritten on save.
    pub total: Decimal,
}

impl Payout {
    /// Prorated total over the payout's date range.
    pub fn total_amount(&self) -> Decimal {
        payout_total(self.start, self.end, self.amount)
    }
}

/// Input for creating a payout. `total` is absent on purpose.
#[derive(Debug, Clone)]
pub struct NewPayout {
    pub contract: DbId,
    pub project: ProjectId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub amount: Decimal,
}
