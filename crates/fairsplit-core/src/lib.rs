//! # fairsplit-core
//!
//! Exact integer bill splitting with a drinker surcharge.
//!
//! Given a bill, a headcount and a number of "drinkers" who had extra
//! drinks at a known per-cup price, this crate computes what each person
//! pays so that drinkers cover their own extras and the payments add up
//! to the bill, down to the last currency unit.
//!
//! ## Key Guarantees
//!
//! 1. **Whole units**: every payment is an integer amount
//! 2. **Conservation**: with at least one drinker, payments sum to the bill
//! 3. **Drinkers first**: rounding leftovers are absorbed by drinkers, one
//!    unit each, never by non-drinkers
//! 4. **Pure**: no I/O, no shared state; same input, same output
//!
//! ## Example
//!
//! ```rust
//! use fairsplit_core::{compute, SplitRequest};
//!
//! let request = SplitRequest::from_units(10001, 4, 2, 1, 500);
//! let result = compute(&request).unwrap();
//!
//! assert_eq!(result.non_drinker_pay, 2250);
//! assert_eq!(result.drinker_pay, 2750);
//! assert_eq!(result.drinker_pay_plus_one_count, 1);
//! assert_eq!(result.total_check, 10001);
//! ```

pub mod engine;
pub mod error;
pub mod request;
pub mod result;

// Re-export main types at crate root
pub use engine::{compute, validate, ValidatedSplit, MAX_SAFE_UNITS};
pub use error::{ValidationError, ValidationKind};
pub use request::{Field, SplitRequest};
pub use result::SplitResult;
