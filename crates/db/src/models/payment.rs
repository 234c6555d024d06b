//! Proposal-stage funding commitments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corehr_core::types::{DbId, ProjectId};

/// A funding commitment attached to an open proposal: one finance
/// project paying `amount` per month, optionally capped to a number
/// of months. Copied into [`Payout`](super::Payout) rows when the
/// proposal is approved; the month cap is informational for finance
/// and is not carried over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: DbId,
    pub proposal: DbId,
    pub project: ProjectId,
    /// Monthly amount.
    pub amount: Decimal,
    /// Use this finance project for at most this many months.
    pub n_months: Option<u8>,
}

impl Payment {
    /// Human label for the month cap, `-` when unset.
    pub fn months_label(&self) -> String {
        match self.n_months {
            Some(1) => "1 month".to_string(),
            Some(n) => format!("{n} months"),
            None => "-".to_string(),
        }
    }
}

/// Input for attaching a payment to a proposal.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub project: ProjectId,
    pub amount: Decimal,
    pub n_months: Option<u8>,
}
