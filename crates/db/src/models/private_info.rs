//! Sensitive per-person records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use corehr_core::types::{DbId, PersonId};

/// One-to-one sensitive record per person: identity documents, bank
/// details, health insurance, birthplace. Visibility is restricted to
/// HR staff, superusers, and the person themself through the
/// private-info scope resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateInfo {
    pub id: DbId,
    pub person: PersonId,
    pub id_document_type: Option<DbId>,
    pub id_document_number: Option<String>,
    pub id_document_expiration: Option<NaiveDate>,
    pub address: String,
    pub bank_info: String,
    pub iban: Option<String>,
    /// Portuguese taxpayer number, nine digits. Validated on save.
    pub nif: Option<String>,
    pub social_security_number: Option<String>,
    pub has_health_insurance: Option<bool>,
    pub health_insurance_start: Option<NaiveDate>,
    pub citizenship: Option<DbId>,
    pub birth_city: Option<DbId>,
    pub birth_country: Option<DbId>,
}
