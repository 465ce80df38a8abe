//! The fair split engine.
//!
//! Validation runs first and produces a [`ValidatedSplit`] holding whole
//! units; the allocation itself cannot fail.

mod allocation;
mod validation;

pub use validation::{validate, ValidatedSplit, MAX_SAFE_UNITS};

use crate::error::ValidationError;
use crate::request::SplitRequest;
use crate::result::SplitResult;

/// Validate `request` and compute the split.
pub fn compute(request: &SplitRequest) -> Result<SplitResult, ValidationError> {
    let validated = validate(request).inspect_err(|e| {
        tracing::debug!(kind = ?e.kind(), field = ?e.field(), "Split request rejected");
    })?;

    Ok(validated.split())
}
