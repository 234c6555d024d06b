//! Entity structs for the HR data model.
//!
//! Ids referencing records owned by collaborating modules (finance
//! projects, positions, fellowship types, ID-document types, places)
//! stay opaque `DbId`s without a table of their own.

pub mod contract;
pub mod payment;
pub mod payout;
pub mod permission;
pub mod person;
pub mod private_info;
pub mod proposal;

pub use contract::{Contract, NewContract, SocialSecurity};
pub use payment::{NewPayment, Payment};
pub use payout::{NewPayout, Payout};
pub use permission::RankedPermission;
pub use person::{AuthGroup, GroupMembership, Person, ResearchGroup, User, PROFILE_HUMAN_RESOURCES};
pub use private_info::PrivateInfo;
pub use proposal::{ContractProposal, NewProposal};
