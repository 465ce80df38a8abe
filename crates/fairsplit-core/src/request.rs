//! Split requests as handed over by callers.
//!
//! Callers supply raw numbers (deserialized JSON, form input, CLI flags).
//! Nothing here is validated; see [`crate::engine::validate`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five input fields of a [`SplitRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Total,
    People,
    Drinkers,
    Cups,
    CupPrice,
}

impl Field {
    /// All fields in enumeration order. Validation scans follow this order.
    pub const ALL: [Field; 5] = [
        Field::Total,
        Field::People,
        Field::Drinkers,
        Field::Cups,
        Field::CupPrice,
    ];

    /// Wire name of the field, as used in JSON and query strings.
    pub fn name(self) -> &'static str {
        match self {
            Field::Total => "total",
            Field::People => "people",
            Field::Drinkers => "drinkers",
            Field::Cups => "cups",
            Field::CupPrice => "cupPrice",
        }
    }

    /// Look a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to the split calculation.
///
/// Amounts are in minor currency units (e.g. yen). Values are kept as `f64`
/// so that NaN, infinities and fractional values survive until validation
/// rejects them with a precise error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    /// Total bill amount
    pub total: f64,

    /// Number of participants
    pub people: f64,

    /// Participants who had extra drinks
    pub drinkers: f64,

    /// Extra drinks per drinker
    pub cups: f64,

    /// Price of one extra drink
    pub cup_price: f64,
}

impl SplitRequest {
    pub fn new(total: f64, people: f64, drinkers: f64, cups: f64, cup_price: f64) -> Self {
        Self {
            total,
            people,
            drinkers,
            cups,
            cup_price,
        }
    }

    /// Build a request from whole units.
    pub fn from_units(total: i64, people: i64, drinkers: i64, cups: i64, cup_price: i64) -> Self {
        Self::new(
            total as f64,
            people as f64,
            drinkers as f64,
            cups as f64,
            cup_price as f64,
        )
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Total => self.total,
            Field::People => self.people,
            Field::Drinkers => self.drinkers,
            Field::Cups => self.cups,
            Field::CupPrice => self.cup_price,
        }
    }

    /// `(field, value)` pairs in enumeration order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("cup_price"), None);
    }

    #[test]
    fn test_fields_in_enumeration_order() {
        let request = SplitRequest::from_units(30000, 6, 3, 6, 500);
        let values: Vec<_> = request.fields().collect();

        assert_eq!(
            values,
            vec![
                (Field::Total, 30000.0),
                (Field::People, 6.0),
                (Field::Drinkers, 3.0),
                (Field::Cups, 6.0),
                (Field::CupPrice, 500.0),
            ]
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let request: SplitRequest = serde_json::from_str(
            r#"{"total": 10001, "people": 4, "drinkers": 2, "cups": 1, "cupPrice": 500}"#,
        )
        .unwrap();

        assert_eq!(request, SplitRequest::from_units(10001, 4, 2, 1, 500));
    }
}
