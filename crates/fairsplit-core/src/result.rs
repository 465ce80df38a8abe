//! The computed split.

use serde::Serialize;

/// Per-person payments produced by [`crate::compute`].
///
/// Every drinker pays `drinker_pay`, except `drinker_pay_plus_one_count`
/// of them who pay `drinker_pay + 1`. Every non-drinker pays
/// `non_drinker_pay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    /// Amount each non-drinker pays
    pub non_drinker_pay: i64,

    /// Base amount each drinker pays
    pub drinker_pay: i64,

    /// Drinkers paying one extra unit to absorb rounding
    pub drinker_pay_plus_one_count: i64,

    /// `people - drinkers`
    pub non_drinker_count: i64,

    /// Number of drinkers, echoed from the request
    pub drinker_count: i64,

    /// Sum of all payments plus any unassigned leftover
    pub total_check: i64,
}

impl SplitResult {
    /// Sum of what individuals actually pay.
    pub fn attributed(&self) -> i64 {
        self.non_drinker_pay * self.non_drinker_count
            + self.drinker_pay * self.drinker_count
            + self.drinker_pay_plus_one_count
    }

    /// Units counted in `total_check` but not assigned to anyone.
    ///
    /// Only the zero-drinker branch can leave a leftover.
    pub fn unassigned(&self) -> i64 {
        self.total_check - self.attributed()
    }

    /// Drinkers paying exactly `drinker_pay`.
    pub fn drinkers_paying_base(&self) -> i64 {
        self.drinker_count - self.drinker_pay_plus_one_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SplitResult {
        SplitResult {
            non_drinker_pay: 2250,
            drinker_pay: 2750,
            drinker_pay_plus_one_count: 1,
            non_drinker_count: 2,
            drinker_count: 2,
            total_check: 10001,
        }
    }

    #[test]
    fn test_attributed_counts_plus_one() {
        let result = sample();
        assert_eq!(result.attributed(), 10001);
        assert_eq!(result.unassigned(), 0);
        assert_eq!(result.drinkers_paying_base(), 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nonDrinkerPay"], 2250);
        assert_eq!(json["drinkerPayPlusOneCount"], 1);
        assert_eq!(json["totalCheck"], 10001);
    }
}
