//! Access-scope resolver.
//!
//! For each model the resolver answers two questions: which records a
//! user may see (`owned_by` / `managed_by` / `list_permissions`) and
//! whether a specific action is allowed (`has_*_permissions`). "No
//! access" is never an error; scope queries return empty sets and the
//! boolean helpers return `false`.
//!
//! The visibility rules compose three sources:
//!
//! 1. direct ownership (the record references the user's own person,
//!    or the user submitted / supervises it),
//! 2. a global ranked grant (`research_group = None`) which opens the
//!    full set,
//! 3. group-scoped ranked grants, which expose records of people who
//!    were members of the granted research groups during the record's
//!    effective dates -- minus subjects *shadowed* by a peer holding
//!    an equal-or-higher-ranked grant over the same group.

pub mod contract_scope;
pub mod grants;
pub mod private_info_scope;
pub mod proposal_scope;
