//! # Request Parameters
//!
//! Caller-facing request input for payment operations.
//!
//! Callers describe what they want with semantic field names (`amount`,
//! `currency`, `product_name`, `ref_id`, ...); each operation validates the
//! required subset up front and then maps the fields onto the provider's own
//! field paths. Parameters live only for the duration of a single call.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar parameter value: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// String value (currency codes, URLs, descriptions)
    Str(String),
    /// Integer value (minor-unit amounts, quantities, interval counts)
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

/// Caller-supplied parameters for a single payment operation.
///
/// Keys are semantic field names, values are scalars. Optional fields are
/// expressed by absence: a key that is not set is omitted from the outgoing
/// request entirely, never sent as null or empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder: set a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Get a parameter as a string slice, if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ParamValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check whether a parameter is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate that every listed key is present.
    ///
    /// Collects ALL missing keys, in the order given, into a single
    /// [`PaymentError::MissingParameters`] so the caller sees the complete
    /// list at once. Must be called before any request is issued.
    pub fn require(&self, keys: &[&str]) -> PaymentResult<()> {
        let missing: Vec<String> = keys
            .iter()
            .filter(|key| !self.contains(key))
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::MissingParameters(missing))
        }
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, ParamValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut params = Params::new();
        params.set("currency", "usd");
        params.set("amount", 1000i64);

        assert_eq!(params.get_str("currency"), Some("usd"));
        assert_eq!(params.get("amount"), Some(&ParamValue::Int(1000)));
        assert_eq!(params.len(), 2);
        assert!(!params.contains("success_url"));
    }

    #[test]
    fn test_builder_chain() {
        let params = Params::new()
            .with("product_name", "Widget")
            .with("quantity", 3i64);

        assert_eq!(params.get_str("product_name"), Some("Widget"));
        assert_eq!(params.get("quantity").map(ToString::to_string).as_deref(), Some("3"));
    }

    #[test]
    fn test_require_all_present() {
        let params = Params::new()
            .with("currency", "usd")
            .with("amount", 1000i64);

        assert!(params.require(&["currency", "amount"]).is_ok());
    }

    #[test]
    fn test_require_collects_every_missing_key_in_order() {
        let params = Params::new().with("amount", 1000i64);

        let err = params
            .require(&["currency", "amount", "product_name", "success_url"])
            .unwrap_err();

        match err {
            PaymentError::MissingParameters(missing) => {
                assert_eq!(missing, vec!["currency", "product_name", "success_url"]);
            }
            other => panic!("expected MissingParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Str("usd".into()).to_string(), "usd");
        assert_eq!(ParamValue::Int(1500).to_string(), "1500");
    }
}
