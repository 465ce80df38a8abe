//! Input validation.
//!
//! Checks run in a fixed priority order:
//! 1. every field is finite
//! 2. `people > 0`
//! 3. `0 <= drinkers <= people`
//! 4. `total`, `cups` and `cupPrice` are not negative
//! 5. every field is an integer
//! 6. every field is at most [`MAX_SAFE_UNITS`]
//! 7. the per-drinker cost `cups * cupPrice` is at most [`MAX_SAFE_UNITS`]
//! 8. the aggregate surcharge `drinkers * cups * cupPrice` is at most
//!    [`MAX_SAFE_UNITS`]
//!
//! Scans over all fields (1, 5, 6) report the first offending field in
//! enumeration order.

use crate::error::ValidationError;
use crate::request::{Field, SplitRequest};

/// Largest integer an `f64` represents exactly (2^53 - 1).
///
/// Bounding every input, the per-drinker cost and the aggregate surcharge
/// by this keeps all allocation arithmetic inside `i64`.
pub const MAX_SAFE_UNITS: i64 = (1 << 53) - 1;

/// A request that passed validation, in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatedSplit {
    pub(super) total: i64,
    pub(super) people: i64,
    pub(super) drinkers: i64,
    pub(super) cups: i64,
    pub(super) cup_price: i64,
}

/// Validate a request.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in priority order.
pub fn validate(request: &SplitRequest) -> Result<ValidatedSplit, ValidationError> {
    if let Some((field, _)) = request.fields().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationError::NonFiniteValue(field));
    }

    if request.people <= 0.0 {
        return Err(ValidationError::InvalidPeopleCount);
    }

    if request.drinkers < 0.0 || request.drinkers > request.people {
        return Err(ValidationError::DrinkersOutOfRange);
    }

    for field in [Field::Total, Field::Cups, Field::CupPrice] {
        if request.get(field) < 0.0 {
            return Err(ValidationError::NegativeAmount(field));
        }
    }

    if let Some((field, _)) = request.fields().find(|(_, v)| v.fract() != 0.0) {
        return Err(ValidationError::NonIntegerValue(field));
    }

    if let Some((field, _)) = request.fields().find(|(_, v)| *v > MAX_SAFE_UNITS as f64) {
        return Err(ValidationError::ExceedsSafeRange(field));
    }

    // Every value is now a whole number in [0, MAX_SAFE_UNITS]; the casts are exact.
    let validated = ValidatedSplit {
        total: request.total as i64,
        people: request.people as i64,
        drinkers: request.drinkers as i64,
        cups: request.cups as i64,
        cup_price: request.cup_price as i64,
    };

    // drinker_pay includes cups * cup_price even when nobody drinks.
    let per_drinker = validated
        .cups
        .checked_mul(validated.cup_price)
        .filter(|p| *p <= MAX_SAFE_UNITS)
        .ok_or(ValidationError::CupCostTooLarge)?;

    per_drinker
        .checked_mul(validated.drinkers)
        .filter(|s| *s <= MAX_SAFE_UNITS)
        .ok_or(ValidationError::SurchargeTooLarge)?;

    Ok(validated)
}
