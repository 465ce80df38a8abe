//! Exact integer allocation with a drinker surcharge.
//!
//! Everybody shares `total - drinkers * cups * cup_price` evenly; drinkers
//! additionally pay their own `cups * cup_price`. Payments are floored to
//! whole units and the shortfall goes to drinkers first, one unit each.

use super::validation::ValidatedSplit;
use crate::result::SplitResult;

impl ValidatedSplit {
    /// Allocate the bill. Infallible for any validated input.
    pub fn split(&self) -> SplitResult {
        let non_drinker_count = self.people - self.drinkers;
        let per_drinker = self.cups * self.cup_price;
        let extra = self.drinkers * per_drinker;
        let base_pool = self.total - extra;

        if base_pool < 0 {
            tracing::warn!(
                total = self.total,
                extra,
                base_pool,
                "Drink surcharge exceeds the bill; non-drinkers get a negative share"
            );
        }

        // people > 0, so Euclidean division is floor division.
        let non_drinker_floor = base_pool.div_euclid(self.people);
        let drinker_floor = non_drinker_floor + per_drinker;

        let floor_sum = non_drinker_floor * non_drinker_count + drinker_floor * self.drinkers;
        let mut remainder = self.total - floor_sum;

        let mut non_drinker_pay = non_drinker_floor;
        let mut drinker_pay = drinker_floor;
        let mut drinker_pay_plus_one_count = 0;

        if remainder > 0 {
            if self.drinkers > 0 {
                drinker_pay += remainder / self.drinkers;
                drinker_pay_plus_one_count = remainder % self.drinkers;
                remainder = 0;
            } else {
                let add_per_non_drinker = remainder / non_drinker_count;
                non_drinker_pay += add_per_non_drinker;
                remainder -= add_per_non_drinker * non_drinker_count;
            }
        }

        if remainder > 0 {
            tracing::warn!(
                leftover = remainder,
                non_drinker_count,
                "Remainder left unassigned; folded into total check"
            );
        }

        let total_check = non_drinker_pay * non_drinker_count
            + drinker_pay * self.drinkers
            + drinker_pay_plus_one_count
            + remainder;

        tracing::debug!(
            total = self.total,
            people = self.people,
            drinkers = self.drinkers,
            non_drinker_pay,
            drinker_pay,
            drinker_pay_plus_one_count,
            total_check,
            "Computed split"
        );

        SplitResult {
            non_drinker_pay,
            drinker_pay,
            drinker_pay_plus_one_count,
            non_drinker_count,
            drinker_count: self.drinkers,
            total_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::engine::{compute, validate};
    use crate::error::ValidationError;
    use crate::request::{Field, SplitRequest};

    fn split(
        total: i64,
        people: i64,
        drinkers: i64,
        cups: i64,
        cup_price: i64,
    ) -> crate::SplitResult {
        compute(&SplitRequest::from_units(total, people, drinkers, cups, cup_price)).unwrap()
    }

    #[test]
    fn test_even_split_with_surcharge() {
        let result = split(30000, 6, 3, 6, 500);
        assert_eq!(result.non_drinker_pay, 3500);
        assert_eq!(result.drinker_pay, 6500);
        assert_eq!(result.drinker_pay_plus_one_count, 0);
        assert_eq!(result.non_drinker_count, 3);
        assert_eq!(result.total_check, 30000);
    }

    #[test]
    fn test_remainder_goes_to_drinkers() {
        let result = split(10001, 4, 2, 1, 500);
        assert_eq!(result.non_drinker_pay, 2250);
        assert_eq!(result.drinker_pay, 2750);
        assert_eq!(result.drinker_pay_plus_one_count, 1);
        assert_eq!(result.total_check, 10001);
    }

    #[test]
    fn test_zero_drinkers_leftover_is_folded_into_check() {
        let result = split(10000, 3, 0, 0, 500);
        assert_eq!(result.non_drinker_pay, 3333);
        assert_eq!(result.non_drinker_count, 3);
        assert_eq!(result.drinker_pay_plus_one_count, 0);
        assert_eq!(result.total_check, 10000);
        assert_eq!(result.attributed(), 9999);
        assert_eq!(result.unassigned(), 1);
    }

    #[test]
    fn test_zero_drinkers_reports_surcharged_drinker_pay() {
        // Nobody drinks, but the per-drinker figure still includes the surcharge.
        let result = split(9000, 3, 0, 2, 500);
        assert_eq!(result.non_drinker_pay, 3000);
        assert_eq!(result.drinker_pay, 4000);
        assert_eq!(result.total_check, 9000);
    }

    #[test]
    fn test_everyone_drinks() {
        let result = split(10000, 3, 3, 2, 300);
        assert_eq!(result.non_drinker_count, 0);
        assert_eq!(result.drinker_pay, 3333);
        assert_eq!(result.drinker_pay_plus_one_count, 1);
        assert_eq!(result.total_check, 10000);
    }

    #[test]
    fn test_negative_base_pool_is_not_clamped() {
        // base pool = 1000 - 5000 = -4000, floor(-4000 / 3) = -1334
        let result = split(1000, 3, 1, 1, 5000);
        assert_eq!(result.non_drinker_pay, -1334);
        assert_eq!(result.drinker_pay, 3668);
        assert_eq!(result.drinker_pay_plus_one_count, 0);
        assert_eq!(result.total_check, 1000);
    }

    #[test]
    fn test_zero_total() {
        let result = split(0, 4, 0, 0, 0);
        assert_eq!(result.non_drinker_pay, 0);
        assert_eq!(result.total_check, 0);
    }

    #[test]
    fn test_rejected_scenarios() {
        let err = compute(&SplitRequest::from_units(1000, 3, 4, 1, 500)).unwrap_err();
        assert_eq!(err, ValidationError::DrinkersOutOfRange);

        let err = compute(&SplitRequest::from_units(-5, 3, 1, 1, 500)).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAmount(Field::Total));
    }

    /// Inputs that pass validation, with enough spread to hit every branch.
    fn valid_inputs() -> impl Strategy<Value = (i64, i64, i64, i64, i64)> {
        (1i64..=50).prop_flat_map(|people| {
            (
                0i64..=1_000_000,
                Just(people),
                0..=people,
                0i64..=20,
                0i64..=5_000,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_total_is_conserved_with_drinkers((total, people, drinkers, cups, price) in valid_inputs()) {
            prop_assume!(drinkers > 0);
            let result = split(total, people, drinkers, cups, price);
            prop_assert_eq!(result.attributed(), total);
            prop_assert_eq!(result.total_check, total);
        }

        #[test]
        fn prop_total_check_matches_bill((total, people, drinkers, cups, price) in valid_inputs()) {
            let result = split(total, people, drinkers, cups, price);
            prop_assert_eq!(result.total_check, total);
            prop_assert!(result.unassigned() >= 0);
            prop_assert!(result.unassigned() < people);
            if drinkers > 0 {
                prop_assert_eq!(result.unassigned(), 0);
            }
        }

        #[test]
        fn prop_plus_one_count_is_bounded((total, people, drinkers, cups, price) in valid_inputs()) {
            let result = split(total, people, drinkers, cups, price);
            prop_assert!(result.drinker_pay_plus_one_count >= 0);
            if drinkers > 0 {
                prop_assert!(result.drinker_pay_plus_one_count < drinkers);
            } else {
                prop_assert_eq!(result.drinker_pay_plus_one_count, 0);
            }
        }

        #[test]
        fn prop_drinkers_pay_their_surcharge((total, people, drinkers, cups, price) in valid_inputs()) {
            prop_assume!(drinkers > 0 && drinkers < people);
            let result = split(total, people, drinkers, cups, price);
            let gap = result.drinker_pay - result.non_drinker_pay;
            prop_assert!(gap >= cups * price);
        }

        #[test]
        fn prop_negative_base_pool_follows_floor_formula(
            people in 1i64..=20,
            total in 0i64..=10_000,
            price in 10_001i64..=50_000,
        ) {
            let result = split(total, people, 1, 1, price);
            let base_pool = total - price;
            prop_assert!(base_pool < 0);
            prop_assert_eq!(result.non_drinker_pay, base_pool.div_euclid(people));
            prop_assert_eq!(result.attributed(), total);
        }

        #[test]
        fn prop_compute_is_idempotent((total, people, drinkers, cups, price) in valid_inputs()) {
            let request = SplitRequest::from_units(total, people, drinkers, cups, price);
            prop_assert_eq!(compute(&request), compute(&request));
        }

        #[test]
        fn prop_non_finite_reported_before_people_bound(
            people in -10i64..=0,
            bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        ) {
            let request = SplitRequest::new(1000.0, people as f64, 0.0, 1.0, bad);
            prop_assert_eq!(
                validate(&request),
                Err(ValidationError::NonFiniteValue(Field::CupPrice))
            );
        }
    }
}
