//! Field-level validation of request bodies.
//!
//! Handlers validate before any service logic runs; failures surface as a
//! per-field error map in the response envelope.

use std::collections::BTreeMap;

/// Field name to message, ordered for stable response bodies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Record a failed field.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    /// Whether any field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_are_ok() {
        assert_eq!(ValidationErrors::default().into_result(), Ok(()));
    }

    #[test]
    fn recorded_fields_fail_the_result() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "must not be blank");
        let err = errors.into_result().expect_err("should fail");
        assert_eq!(
            err.into_map().get("name").map(String::as_str),
            Some("must not be blank")
        );
    }
}
