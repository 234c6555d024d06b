//! Proposal approval workflow.
//!
//! Every status change goes through one of the transition operations
//! here; `update_proposal` refuses status edits so the state machine
//! in `corehr_core::status` stays the single gate. Authorization is
//! checked before any write. The only multi-write operation,
//! [`generate_contract`], runs inside a store transaction so a failure
//! can never leave a contract without its payouts.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde_json::json;

use corehr_core::error::{CoreError, CoreResult};
use corehr_core::status::{Motive, ProposalStatus};
use corehr_core::types::DbId;
use corehr_core::validation::{
    validate_payment_months, validate_payments_cover_salary, validate_person_identification,
};

use crate::models::{ContractProposal, NewContract, NewPayment, NewPayout, NewProposal, User};
use crate::notify::{Notifier, NEW_PROPOSAL_TEMPLATE};
use crate::scope::proposal_scope;
use crate::store::HrStore;

/// Create a proposal with its payments and notify the HR profile.
///
/// The creation notification fires exactly once, here. Later saves of
/// the same proposal (including the contract back-reference written by
/// approval) never re-notify.
pub fn save_proposal(
    store: &mut HrStore,
    notifier: &dyn Notifier,
    new: NewProposal,
    payments: Vec<NewPayment>,
    today: NaiveDate,
) -> CoreResult<DbId> {
    validate_person_identification(new.person, new.person_name.as_deref())?;
    for payment in &payments {
        validate_payment_months(payment.n_months)?;
    }
    let amounts: Vec<Decimal> = payments.iter().map(|p| p.amount).collect();
    validate_payments_cover_salary(&amounts, new.salary)?;

    let id = store.transaction(move |tx| {
        let id = tx.create_proposal(new, today)?;
        for payment in payments {
            tx.create_payment(id, payment)?;
        }
        Ok(id)
    })?;

    tracing::info!(proposal_id = id, "contract proposal created");
    notify_hr(store, notifier, id);
    Ok(id)
}

/// Save edited proposal fields.
///
/// Rejected when the user has no update permission over the proposal
/// (which includes every locked proposal) or when the edit tries to
/// change the status, the contract link, or the closing stamp --
/// those go through the dedicated operations. Re-notification is
/// opt-in via `send_email`.
pub fn update_proposal(
    store: &mut HrStore,
    notifier: &dyn Notifier,
    user: &User,
    updated: ContractProposal,
    send_email: bool,
) -> CoreResult<()> {
    if !proposal_scope::has_update_permissions(store, user, updated.id) {
        return Err(CoreError::Forbidden(
            "You cannot edit this proposal".to_string(),
        ));
    }

    let existing = store.get_proposal(updated.id)?;
    if updated.status != existing.status {
        return Err(CoreError::Conflict(
            "Proposal status changes must use the workflow operations".to_string(),
        ));
    }
    // The back-reference and the closing stamp are written by approval
    // and rejection only.
    if updated.contract != existing.contract
        || updated.closed_on != existing.closed_on
        || updated.closed_by != existing.closed_by
    {
        return Err(CoreError::Conflict(
            "The proposal's contract link and closing fields cannot be edited".to_string(),
        ));
    }

    validate_person_identification(updated.person, updated.person_name.as_deref())?;
    let amounts: Vec<Decimal> = store
        .payments_of_proposal(updated.id)
        .map(|p| p.amount)
        .collect();
    validate_payments_cover_salary(&amounts, updated.salary)?;

    let id = updated.id;
    store.save_proposal(updated)?;
    if send_email {
        notify_hr(store, notifier, id);
    }
    Ok(())
}

/// Mark a pending proposal as printed.
pub fn print_proposal(store: &mut HrStore, user: &User, proposal: DbId) -> CoreResult<()> {
    if !proposal_scope::has_print_permissions(store, user, proposal) {
        return Err(CoreError::Forbidden(
            "You do not have permissions to print this proposal".to_string(),
        ));
    }
    transition(store, user, proposal, ProposalStatus::Printed, None)
}

/// Hand a proposal over for approval review.
pub fn submit_proposal(store: &mut HrStore, user: &User, proposal: DbId) -> CoreResult<()> {
    if !proposal_scope::has_update_permissions(store, user, proposal) {
        return Err(CoreError::Forbidden(
            "You cannot edit this proposal".to_string(),
        ));
    }
    transition(store, user, proposal, ProposalStatus::Submitted, None)
}

/// Approve a proposal and generate its contract.
///
/// Requires the approve capability, a linked person (a proposal still
/// identified by free text cannot be approved), and no previously
/// generated contract. The status change, the contract, the payouts,
/// and the back-reference are written in one transaction.
pub fn approve_proposal(
    store: &mut HrStore,
    user: &User,
    proposal: DbId,
    today: NaiveDate,
) -> CoreResult<DbId> {
    if !proposal_scope::has_approve_permissions(store, user, proposal) {
        return Err(CoreError::Forbidden(
            "You do not have permissions to approve proposals".to_string(),
        ));
    }

    let current = store.get_proposal(proposal)?;
    current.status.validate_transition(ProposalStatus::Approved)?;
    if current.person.is_none() {
        return Err(CoreError::Validation(
            "Select a person from the list to approve this proposal".to_string(),
        ));
    }
    if current.contract.is_some() {
        return Err(CoreError::Conflict(
            "A contract for this proposal already exists".to_string(),
        ));
    }

    let user_id = user.id;
    let contract = store.transaction(|tx| {
        let mut updated = tx.get_proposal(proposal)?.clone();
        updated.status = ProposalStatus::Approved;
        updated.closed_on = Some(today);
        updated.closed_by = Some(user_id);
        tx.save_proposal(updated)?;
        generate_contract(tx, proposal)
    })?;

    tracing::info!(proposal_id = proposal, contract_id = contract, "proposal approved");
    Ok(contract)
}

/// Reject a proposal. No contract, no further edits.
pub fn reject_proposal(
    store: &mut HrStore,
    user: &User,
    proposal: DbId,
    today: NaiveDate,
) -> CoreResult<()> {
    if !proposal_scope::has_approve_permissions(store, user, proposal) {
        return Err(CoreError::Forbidden(
            "You do not have permissions to reject proposals".to_string(),
        ));
    }
    transition(store, user, proposal, ProposalStatus::Rejected, Some(today))
}

/// Create the contract and payouts for an approved proposal.
///
/// Hard idempotence guard: a proposal with a contract back-reference
/// can never originate a second one. Each payment row becomes one
/// payout covering the proposal's term, clamped to December 31 of the
/// start year when the derived end crosses into the next calendar year
/// (funding-year boundary rule).
pub fn generate_contract(store: &mut HrStore, proposal: DbId) -> CoreResult<DbId> {
    let current = store.get_proposal(proposal)?.clone();

    if current.status != ProposalStatus::Approved {
        return Err(CoreError::Conflict(
            "Proposal needs to be approved in order to originate a contract".to_string(),
        ));
    }
    if current.contract.is_some() {
        return Err(CoreError::Conflict(
            "A contract for this proposal already exists".to_string(),
        ));
    }
    let person = current.person.ok_or_else(|| {
        CoreError::Validation(
            "Select a person from the list to approve this proposal".to_string(),
        )
    })?;

    store.transaction(|tx| {
        let contract = tx.create_contract(NewContract {
            person,
            start: current.start,
            months_duration: current.months_duration,
            days_duration: current.days_duration,
            salary: current.salary,
            description: current.description.clone(),
            fellowship_type: current.fellowship_type,
            position: current.position,
            supervisor: None,
        });

        let start = current.start;
        let end = payout_window_end(&current);
        let payments: Vec<NewPayout> = tx
            .payments_of_proposal(proposal)
            .map(|payment| NewPayout {
                contract,
                project: payment.project,
                start,
                end,
                amount: payment.amount,
            })
            .collect();
        for payout in payments {
            tx.create_payout(payout)?;
        }

        let mut updated = tx.get_proposal(proposal)?.clone();
        updated.contract = Some(contract);
        tx.save_proposal(updated)?;

        tracing::info!(proposal_id = proposal, contract_id = contract, "contract generated");
        Ok(contract)
    })
}

/// Build a proposal mirroring an existing contract, for renewal or
/// term renegotiation. Each payout becomes a payment (amount and
/// project only). Sends the usual creation notification.
pub fn renewal_proposal(
    store: &mut HrStore,
    notifier: &dyn Notifier,
    contract: DbId,
    motive: Motive,
    responsible: &User,
    today: NaiveDate,
) -> CoreResult<DbId> {
    if motive == Motive::New {
        return Err(CoreError::Validation(
            "A proposal based on an existing contract must be a renewal or an update".to_string(),
        ));
    }

    let source = store.get_contract(contract)?.clone();
    let supervisor = source.supervisor.ok_or_else(|| {
        CoreError::Validation("The contract has no supervisor to carry over".to_string())
    })?;

    let payments: Vec<NewPayment> = store
        .payouts_of_contract(contract)
        .map(|payout| NewPayment {
            project: payout.project,
            amount: payout.amount,
            n_months: None,
        })
        .collect();

    let responsible_id = responsible.id;
    let id = store.transaction(move |tx| {
        let id = tx.create_proposal(
            NewProposal {
                motive,
                start: source.start,
                months_duration: source.months_duration,
                days_duration: source.days_duration,
                salary: source.salary,
                description: source.description.clone(),
                person: Some(source.person),
                person_name: None,
                person_email: None,
                fellowship_type: source.fellowship_type,
                position: source.position,
                responsible: responsible_id,
                supervisor,
            },
            today,
        )?;
        for payment in payments {
            tx.create_payment(id, payment)?;
        }
        Ok(id)
    })?;

    tracing::info!(proposal_id = id, contract_id = contract, motive = ?motive, "renewal proposal created");
    notify_hr(store, notifier, id);
    Ok(id)
}

/// Payout window for a generated contract: the proposal's term, capped
/// at the end of the start year.
fn payout_window_end(proposal: &ContractProposal) -> NaiveDate {
    let end = proposal.end_date();
    if end.year() > proposal.start.year() {
        NaiveDate::from_ymd_opt(proposal.start.year(), 12, 31)
            .expect("December 31 exists in every year")
    } else {
        end
    }
}

fn transition(
    store: &mut HrStore,
    user: &User,
    proposal: DbId,
    to: ProposalStatus,
    closed_on: Option<NaiveDate>,
) -> CoreResult<()> {
    let mut updated = store.get_proposal(proposal)?.clone();
    updated.status.validate_transition(to)?;
    let from = updated.status;
    updated.status = to;
    if closed_on.is_some() {
        updated.closed_on = closed_on;
        updated.closed_by = Some(user.id);
    }
    store.save_proposal(updated)?;
    tracing::info!(proposal_id = proposal, from = ?from, to = ?to, "proposal status changed");
    Ok(())
}

/// Notify the HR profile about a proposal. Failures are logged and
/// swallowed; notification never blocks the save.
fn notify_hr(store: &HrStore, notifier: &dyn Notifier, proposal: DbId) {
    let recipients = store.hr_staff_emails();
    if recipients.is_empty() {
        tracing::warn!(proposal_id = proposal, "notification skipped, no recipients");
        return;
    }

    let responsible = store
        .get_proposal(proposal)
        .ok()
        .and_then(|p| store.get_user(p.responsible).ok())
        .map(|u| u.username.clone())
        .unwrap_or_default();
    let context = json!({
        "proposal_id": proposal,
        "responsible": responsible,
    });

    if let Err(err) = notifier.send(NEW_PROPOSAL_TEMPLATE, &recipients, &context) {
        tracing::warn!(proposal_id = proposal, error = %err, "proposal notification failed");
    }
}
