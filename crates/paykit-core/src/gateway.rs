//! # Payment Gateway Trait
//!
//! The single stable interface a payment provider implements.
//!
//! Every operation takes validated caller input and returns the provider's
//! decoded JSON response verbatim. Business failures (a declined intent, an
//! unknown invoice) come back inside that JSON, not as `Err`: callers inspect
//! the returned value for an error indicator. `Err` is reserved for local
//! validation failures and transport problems.

use crate::error::PaymentResult;
use crate::params::Params;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Core trait for payment provider implementations.
///
/// Implementations hold immutable credentials and configuration only; every
/// call is stateless, so a single instance is safe to share across tasks.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session for a one-time payment.
    ///
    /// Required: `currency`, `amount`, `product_name`, `success_url`.
    /// Optional: `ref_id`, `quantity`, `product_description`, `cancel_url`.
    async fn create_checkout_session(&self, params: &Params) -> PaymentResult<Value>;

    /// Create a recurring-payment checkout session.
    ///
    /// Required: checkout fields plus `interval`. Optional: `interval_count`.
    async fn create_subscription(&self, params: &Params) -> PaymentResult<Value>;

    /// Create a session that stores a payment method without charging.
    ///
    /// Required: `success_url`. Optional: `cancel_url`, `ref_id`.
    async fn create_setup_intent(&self, params: &Params) -> PaymentResult<Value>;

    /// Create, populate, and finalize an invoice for an existing customer.
    ///
    /// Required: `customer_id`, `amount`, `currency`, `description`.
    /// Optional: `ref_id`.
    async fn create_invoice(&self, params: &Params) -> PaymentResult<Value>;

    /// Charge a finalized invoice off-session with a stored payment method.
    async fn charge_invoice(
        &self,
        invoice_id: &str,
        payment_method_id: &str,
    ) -> PaymentResult<Value>;

    /// Fetch a checkout session by id
    async fn get_checkout_session(&self, session_id: &str) -> PaymentResult<Value>;

    /// Fetch a subscription by id
    async fn get_subscription(&self, subscription_id: &str) -> PaymentResult<Value>;

    /// Fetch a setup intent by id
    async fn get_setup_intent(&self, intent_id: &str) -> PaymentResult<Value>;

    /// Fetch an invoice by id
    async fn get_invoice(&self, invoice_id: &str) -> PaymentResult<Value>;

    /// Refund a payment intent.
    ///
    /// Required: `payment_intent`. Optional: `reason`, `amount`.
    async fn create_refund(&self, params: &Params) -> PaymentResult<Value>;

    /// Fetch a refund by id
    async fn get_refund(&self, refund_id: &str) -> PaymentResult<Value>;

    /// Cancel a refund by id
    async fn cancel_refund(&self, refund_id: &str) -> PaymentResult<Value>;

    /// Get the provider name (for logging and routing)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
