//! Validation errors.

use thiserror::Error;

use crate::request::Field;

/// Why a [`crate::SplitRequest`] was rejected.
///
/// Variants are listed in the order their checks run; the first failing
/// check is the one reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be a finite number.")]
    NonFiniteValue(Field),

    #[error("people must be greater than 0.")]
    InvalidPeopleCount,

    #[error("drinkers must be between 0 and people.")]
    DrinkersOutOfRange,

    #[error("{0} must be 0 or greater.")]
    NegativeAmount(Field),

    #[error("{0} must be an integer.")]
    NonIntegerValue(Field),

    #[error("{0} is too large to be represented exactly.")]
    ExceedsSafeRange(Field),

    #[error("cups × cupPrice is too large to be represented exactly.")]
    CupCostTooLarge,

    #[error("drinkers × cups × cupPrice is too large to be represented exactly.")]
    SurchargeTooLarge,
}

/// The constraint a [`ValidationError`] reports, without its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    NonFinite,
    InvalidPeopleCount,
    DrinkersOutOfRange,
    NegativeAmount,
    NonInteger,
    ExceedsSafeRange,
    CupCostTooLarge,
    SurchargeTooLarge,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::NonFiniteValue(_) => ValidationKind::NonFinite,
            ValidationError::InvalidPeopleCount => ValidationKind::InvalidPeopleCount,
            ValidationError::DrinkersOutOfRange => ValidationKind::DrinkersOutOfRange,
            ValidationError::NegativeAmount(_) => ValidationKind::NegativeAmount,
            ValidationError::NonIntegerValue(_) => ValidationKind::NonInteger,
            ValidationError::ExceedsSafeRange(_) => ValidationKind::ExceedsSafeRange,
            ValidationError::CupCostTooLarge => ValidationKind::CupCostTooLarge,
            ValidationError::SurchargeTooLarge => ValidationKind::SurchargeTooLarge,
        }
    }

    /// The offending field.
    ///
    /// Range checks on `people` and `drinkers` name their field implicitly;
    /// the surcharge checks span several fields and name none.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::NonFiniteValue(f)
            | ValidationError::NegativeAmount(f)
            | ValidationError::NonIntegerValue(f)
            | ValidationError::ExceedsSafeRange(f) => Some(*f),
            ValidationError::InvalidPeopleCount => Some(Field::People),
            ValidationError::DrinkersOutOfRange => Some(Field::Drinkers),
            ValidationError::CupCostTooLarge | ValidationError::SurchargeTooLarge => None,
        }
    }
}
