//! Field validation helpers shared by the proposal save/approve paths.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::types::PersonId;

/// Maximum month cap selectable on a proposal payment.
pub const MAX_PAYMENT_MONTHS: u8 = 12;

/// A proposal must identify its subject either by a linked person or by
/// a free-text name (with optional contact email). Exactly one path:
/// neither populated means nobody to hire, both populated is ambiguous.
pub fn validate_person_identification(
    person: Option<PersonId>,
    person_name: Option<&str>,
) -> CoreResult<()> {
    let has_name = person_name.is_some_and(|name| !name.trim().is_empty());
    match (person.is_some(), has_name) {
        (false, false) => Err(CoreError::Validation(
            "Please enter information about the person to hire".to_string(),
        )),
        (true, true) => Err(CoreError::Validation(
            "Identify the person either by selecting them or by name, not both".to_string(),
        )),
        _ => Ok(()),
    }
}

/// The proposal's payments must cover its salary exactly.
///
/// Raised as a field-level error on `salary`, matching where the form
/// surfaces it.
pub fn validate_payments_cover_salary(
    payment_amounts: &[Decimal],
    salary: Decimal,
) -> CoreResult<()> {
    let total: Decimal = payment_amounts.iter().copied().sum();
    if total != salary {
        return Err(CoreError::FieldValidation {
            field: "salary",
            message: "The payouts specified do not cover this value".to_string(),
        });
    }
    Ok(())
}

/// A payment's month cap, when set, must be between 1 and 12.
pub fn validate_payment_months(n_months: Option<u8>) -> CoreResult<()> {
    match n_months {
        Some(n) if n == 0 || n > MAX_PAYMENT_MONTHS => Err(CoreError::FieldValidation {
            field: "n_months",
            message: format!("Must be between 1 and {MAX_PAYMENT_MONTHS} months"),
        }),
        _ => Ok(()),
    }
}

/// Portuguese taxpayer number: exactly nine digits. Empty is allowed,
/// the field is optional.
pub fn validate_nif(nif: &str) -> CoreResult<()> {
    if nif.is_empty() {
        return Ok(());
    }
    if nif.len() != 9 || !nif.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::FieldValidation {
            field: "nif",
            message: "Invalid number".to_string(),
        });
    }
    Ok(())
}
