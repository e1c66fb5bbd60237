//! # Encoded Request Bodies
//!
//! Flat URL-form-encoded bodies in the field-path notation payment APIs use
//! (`line_items[0][price_data][unit_amount]`, `metadata[reference_id]`).
//!
//! A body is assembled deterministically from caller [`Params`]: fixed fields
//! are `set`, optional fields are `copy_from`-filled only when the caller
//! supplied them. Insertion order is preserved; setting an existing key
//! overwrites it in place, so a default can be declared first and replaced by
//! a caller override without emitting duplicate fields.

use crate::params::Params;

/// A flat key-value request body ready for form encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody(Vec<(String, String)>);

impl FormBody {
    /// Create an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting an existing value for the same key in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Copy a caller parameter into a provider field path, only if present.
    ///
    /// Absent parameters leave the body untouched: the target key is omitted
    /// entirely rather than sent with a null or empty value.
    pub fn copy_from(&mut self, params: &Params, source: &str, target: &str) {
        if let Some(value) = params.get(source) {
            self.set(target, value);
        }
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a field is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the body is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the fields for form encoding
    pub fn fields(&self) -> &Vec<(String, String)> {
        &self.0
    }
}
