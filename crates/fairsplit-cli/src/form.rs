//! Text input handling for the five split fields.
//!
//! Fields are kept as text, the way a user typed them, so that empty
//! fields can be told apart from explicit zeros when sharing a query.

use fairsplit_core::{Field, SplitRequest};

/// Keep ASCII digits only.
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Sanitize and parse a whole amount. Empty or overflowing input is 0.
pub fn parse_units(text: &str) -> i64 {
    sanitize_digits(text).parse().unwrap_or(0)
}

/// The five split fields as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitForm {
    pub total: String,
    pub people: String,
    pub drinkers: String,
    pub cups: String,
    pub cup_price: String,
}

impl SplitForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Total => &self.total,
            Field::People => &self.people,
            Field::Drinkers => &self.drinkers,
            Field::Cups => &self.cups,
            Field::CupPrice => &self.cup_price,
        }
    }

    /// Store a field, sanitized to digits.
    pub fn set(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Total => &mut self.total,
            Field::People => &mut self.people,
            Field::Drinkers => &mut self.drinkers,
            Field::Cups => &mut self.cups,
            Field::CupPrice => &mut self.cup_price,
        };
        *slot = sanitize_digits(text);
    }

    /// Convert to an engine request, treating empty fields as 0.
    pub fn to_request(&self) -> SplitRequest {
        SplitRequest::from_units(
            parse_units(&self.total),
            parse_units(&self.people),
            parse_units(&self.drinkers),
            parse_units(&self.cups),
            parse_units(&self.cup_price),
        )
    }
}
