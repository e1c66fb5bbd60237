//! # Payment Error Types
//!
//! Typed error handling for the paykit payment client.
//! All payment operations return `Result<T, PaymentError>`.
//!
//! Note that a remote-side business failure (a declined payment intent, an
//! unknown customer) is NOT a `PaymentError`: providers report those inside
//! the JSON body, which the client hands back verbatim for the caller to
//! inspect. Only local validation and transport problems surface here.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (empty resource id, malformed input)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// One or more required request parameters are absent.
    /// Every missing key is listed, not just the first.
    #[error("{} parameters are required", .0.join(", "))]
    MissingParameters(Vec<String>),

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if this error is retryable.
    ///
    /// The client itself never retries; this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Network(_))
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_message_lists_every_key() {
        let err = PaymentError::MissingParameters(vec![
            "currency".to_string(),
            "amount".to_string(),
            "success_url".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "currency, amount, success_url parameters are required"
        );
    }

    #[test]
    fn test_missing_parameters_single_key() {
        let err = PaymentError::MissingParameters(vec!["interval".to_string()]);
        assert_eq!(err.to_string(), "interval parameters are required");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(PaymentError::Network("timeout".into()).is_retryable());
        assert!(!PaymentError::MissingParameters(vec!["amount".into()]).is_retryable());
        assert!(!PaymentError::InvalidRequest("bad id".into()).is_retryable());
    }
}
