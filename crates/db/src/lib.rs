//! HR data model and engines.
//!
//! Layers on top of `corehr-core`:
//!
//! - [`models`] -- the entity structs (people, groups, grants,
//!   contracts, proposals, payments, payouts, private info).
//! - [`store`] -- an in-process relational store with cascade deletes
//!   and all-or-nothing transactions. The execution model is
//!   single-threaded and request-scoped; callers hold `&mut HrStore`
//!   for the duration of an operation.
//! - [`scope`] -- the access-scope resolver: per-model `owned_by` /
//!   `managed_by` queries and the `has_*_permissions` helpers.
//! - [`workflow`] -- the proposal approval workflow and contract and
//!   payout generation.
//! - [`queries`] -- date-window queries over contracts and proposals,
//!   with `today` always passed in.
//! - [`notify`] -- the outbound notification seam.

pub mod models;
pub mod notify;
pub mod queries;
pub mod scope;
pub mod store;
pub mod workflow;
