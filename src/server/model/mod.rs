//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request bodies when they are constructed, so a value of
//! `CreateClientParam` always carries every required field.

pub mod client;
pub mod formation;
pub mod pdf;
pub mod user;

use crate::server::error::AppError;

/// Returns the trimmed value of a required text field.
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - Field absent or blank
pub(crate) fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// Validates a required text field on partial updates.
///
/// Absent is fine (field untouched); present but blank is rejected.
pub(crate) fn optional_required_field(
    value: Option<String>,
    field: &str,
) -> Result<Option<String>, AppError> {
    value.map(|v| require_field(Some(v), field)).transpose()
}

/// Normalizes an optional free-text field, mapping blank input to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
