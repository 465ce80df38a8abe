//! Query-string persistence of the split form.
//!
//! `total=30000&people=6&drinkers=3&cups=6&cupPrice=500`. Values are
//! digits only, so no percent-encoding is needed on the way out; on the
//! way in, anything that is not a digit is dropped.

use fairsplit_core::Field;

use crate::form::SplitForm;

impl SplitForm {
    /// Serialize non-empty fields in enumeration order.
    pub fn to_query(&self) -> String {
        Field::ALL
            .into_iter()
            .filter(|f| !self.get(*f).is_empty())
            .map(|f| format!("{}={}", f.name(), self.get(f)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Restore a form from a query string.
    ///
    /// A leading `?` is allowed, unknown keys are ignored and the last
    /// occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> Self {
        let mut form = SplitForm::default();
        form.merge_query(query);
        form
    }

    /// Overlay the fields present in `query` onto this form.
    pub fn merge_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match Field::from_name(key) {
                Some(field) => self.set(field, value),
                None => tracing::debug!(key, "Ignoring unknown query key"),
            }
        }
    }
}
