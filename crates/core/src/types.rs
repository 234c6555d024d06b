//! Shared identifier aliases.

/// All record primary keys are store-assigned 64-bit integers.
pub type DbId = i64;

/// Id of a person record held by the people module.
pub type PersonId = DbId;

/// Id of a system account (authenticated user).
pub type UserId = DbId;

/// Id of a research group.
pub type GroupId = DbId;

/// Id of an authorization group (profile).
pub type AuthGroupId = DbId;

/// Id of a finance project funding a payout.
pub type ProjectId = DbId;
