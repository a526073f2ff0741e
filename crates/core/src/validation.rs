//! Field-level validation collector.
//!
//! Rules are checked one after another and every violated field is recorded,
//! so a single failure reports all problems at once. Only the first reason per
//! field is kept.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Mapping of field name to a human-readable reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reason recorded for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

/// Accumulates rule violations for one candidate record.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `reason` against `field` unless `ok` holds or the field
    /// already failed an earlier rule.
    pub fn check(&mut self, ok: bool, field: &str, reason: &str) {
        if !ok {
            self.errors
                .0
                .entry(field.to_string())
                .or_insert_with(|| reason.to_string());
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the validator, yielding the collected errors if any rule failed.
    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
