//! Pure HR domain logic with zero internal deps.
//!
//! Everything here is deterministic and side-effect free: the proposal
//! status state machine, capability/model identifiers, contract date
//! arithmetic, payout proration, and field validation helpers. "Today"
//! is always an explicit parameter so the date-window logic stays
//! testable. The `corehr-db` crate layers the data model and the
//! access-scope / workflow engines on top of this.

pub mod capability;
pub mod dates;
pub mod error;
pub mod payout;
pub mod status;
pub mod types;
pub mod validation;
