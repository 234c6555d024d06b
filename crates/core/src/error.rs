//! Domain error taxonomy.
//!
//! Three families of failure, kept in one enum so callers can match on
//! them: user-correctable validation errors (`Validation`,
//! `FieldValidation`), workflow precondition violations (`Conflict`),
//! and authorization rejections (`Forbidden`). "No access" on a scope
//! query is never an error -- the resolvers return empty sets instead.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// User-correctable input error.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// User-correctable input error attributable to a single field.
    #[error("Validation failed on '{field}': {message}")]
    FieldValidation {
        field: &'static str,
        message: String,
    },

    /// The caller violated a workflow precondition (e.g. generating a
    /// contract twice, or editing a locked proposal).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The action is outside the caller's resolved capability set.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// Convenience alias used throughout both crates.
pub type CoreResult<T> = Result<T, CoreError>;
