//! # Stripe Configuration
//!
//! Configuration management for the Stripe gateway.
//! Secrets are loaded from environment variables and fixed for the client's
//! lifetime.

use paykit_core::PaymentError;
use std::env;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub api_key: String,

    /// Whether card payments must request a 3-D Secure challenge
    pub enable_3d: bool,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl StripeConfig {
    /// Create config with explicit values
    pub fn new(api_key: impl Into<String>, enable_3d: bool) -> Self {
        Self {
            api_key: api_key.into(),
            enable_3d,
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional:
    /// - `STRIPE_ENABLE_3D` (`true`/`1`, defaults to false)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            PaymentError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        if !api_key.starts_with("sk_test_") && !api_key.starts_with("sk_live_") {
            return Err(PaymentError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_ or sk_live_".to_string(),
            ));
        }

        let enable_3d = env::var("STRIPE_ENABLE_3D")
            .map(|v| matches!(v.trim(), "true" | "1"))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            enable_3d,
            api_base_url: "https://api.stripe.com".to_string(),
        })
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with("sk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.api_key.starts_with("sk_live_")
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_modes() {
        let config = StripeConfig::new("sk_test_abc123", false);
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
        assert!(!config.enable_3d);

        let config = StripeConfig::new("sk_live_abc123", true);
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
        assert!(config.enable_3d);
    }

    #[test]
    fn test_default_base_url() {
        let config = StripeConfig::new("sk_test_abc123", false);
        assert_eq!(config.api_base_url, "https://api.stripe.com");
    }

    #[test]
    fn test_with_api_base_url() {
        let config =
            StripeConfig::new("sk_test_abc123", false).with_api_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }
}
