//! # Stripe Gateway Client
//!
//! Implementation of the `PaymentGateway` trait against Stripe's HTTP API.
//!
//! Each operation validates its required parameters, assembles a flat
//! form-encoded body in Stripe's bracketed field-path notation, issues the
//! request with Basic Auth (API key as username, empty password), and returns
//! the decoded JSON body verbatim. Stripe reports business failures inside
//! that body, so the client does no status-based branching; callers inspect
//! the returned value. `create_invoice` is the one multi-step operation: it
//! chains invoice creation, line-item creation, and finalization, stopping at
//! the first response that carries no `id`.

use crate::config::StripeConfig;
use async_trait::async_trait;
use paykit_core::{FormBody, Params, PaymentError, PaymentGateway, PaymentResult};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Stripe payment gateway
///
/// Holds immutable credentials and the 3-D Secure toggle; stateless per call,
/// safe to share across tasks without locking.
pub struct StripeClient {
    config: StripeConfig,
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// POST a form-encoded body and decode the JSON response.
    ///
    /// The body is returned whatever the HTTP status: Stripe encodes business
    /// errors in the JSON itself and callers inspect it.
    async fn post_form(&self, endpoint: &str, body: &FormBody) -> PaymentResult<Value> {
        let url = format!("{}/v1{}", self.config.api_base_url, endpoint);
        debug!("POST {} ({} fields)", endpoint, body.len());

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.api_key, None::<&str>)
            .form(body.fields())
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| PaymentError::Serialization(e.to_string()))
    }

    /// GET a resource and decode the JSON response
    async fn get(&self, endpoint: &str) -> PaymentResult<Value> {
        let url = format!("{}/v1{}", self.config.api_base_url, endpoint);
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_key, None::<&str>)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| PaymentError::Serialization(e.to_string()))
    }

    /// Build the shared Checkout Session body for the given mode.
    ///
    /// `payment` and `subscription` sessions carry a single card line item
    /// with a quantity defaulting to 1; optional caller fields are filled
    /// only when present. The 3-D Secure directive applies to every
    /// session-creation request when enabled, regardless of mode.
    fn session_body(&self, params: &Params, mode: &str) -> FormBody {
        let mut body = FormBody::new();
        body.set("payment_method_types[]", "card");
        body.set("mode", mode);
        body.copy_from(params, "amount", "line_items[0][price_data][unit_amount]");
        body.copy_from(params, "currency", "line_items[0][price_data][currency]");
        body.copy_from(
            params,
            "product_name",
            "line_items[0][price_data][product_data][name]",
        );
        body.set("line_items[0][quantity]", 1);
        body.copy_from(params, "success_url", "success_url");

        body.copy_from(params, "ref_id", "metadata[reference_id]");
        body.copy_from(params, "quantity", "line_items[0][quantity]");
        body.copy_from(
            params,
            "product_description",
            "line_items[0][price_data][product_data][description]",
        );
        body.copy_from(params, "cancel_url", "cancel_url");

        self.apply_three_d_secure(&mut body);
        body
    }

    /// Append the 3-D Secure challenge directive when the client is
    /// configured for it.
    fn apply_three_d_secure(&self, body: &mut FormBody) {
        if self.config.enable_3d {
            body.set(
                "payment_method_options[card][request_three_d_secure]",
                "challenge",
            );
        }
    }
}

/// Extract the `id` field of a decoded response, if any.
///
/// Its absence is the invoice flow's only error signal: Stripe error bodies
/// carry an `error` object and no top-level `id`.
fn object_id(response: &Value) -> Option<&str> {
    response.get("id").and_then(|v| v.as_str())
}

/// Reject empty resource ids before any request goes out
fn require_id(name: &str, id: &str) -> PaymentResult<()> {
    if id.trim().is_empty() {
        return Err(PaymentError::InvalidRequest(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}

#[async_trait]
impl PaymentGateway for StripeClient {
    #[instrument(skip(self, params))]
    async fn create_checkout_session(&self, params: &Params) -> PaymentResult<Value> {
        params.require(&["currency", "amount", "product_name", "success_url"])?;

        let body = self.session_body(params, "payment");
        let response = self.post_form("/checkout/sessions", &body).await?;

        if let Some(id) = object_id(&response) {
            info!("Created checkout session: id={}", id);
        }
        Ok(response)
    }

    #[instrument(skip(self, params))]
    async fn create_subscription(&self, params: &Params) -> PaymentResult<Value> {
        params.require(&["currency", "amount", "product_name", "success_url", "interval"])?;

        let mut body = self.session_body(params, "subscription");
        body.copy_from(
            params,
            "interval",
            "line_items[0][price_data][recurring][interval]",
        );
        body.copy_from(
            params,
            "interval_count",
            "line_items[0][price_data][recurring][interval_count]",
        );

        let response = self.post_form("/checkout/sessions", &body).await?;

        if let Some(id) = object_id(&response) {
            info!("Created subscription session: id={}", id);
        }
        Ok(response)
    }

    #[instrument(skip(self, params))]
    async fn create_setup_intent(&self, params: &Params) -> PaymentResult<Value> {
        params.require(&["success_url"])?;

        // Setup sessions save a card without charging: no line items
        let mut body = FormBody::new();
        body.set("payment_method_types[]", "card");
        body.set("mode", "setup");
        body.copy_from(params, "success_url", "success_url");
        body.copy_from(params, "cancel_url", "cancel_url");
        body.copy_from(params, "ref_id", "metadata[reference_id]");
        self.apply_three_d_secure(&mut body);

        let response = self.post_form("/checkout/sessions", &body).await?;

        if let Some(id) = object_id(&response) {
            info!("Created setup session: id={}", id);
        }
        Ok(response)
    }

    #[instrument(skip(self, params))]
    async fn create_invoice(&self, params: &Params) -> PaymentResult<Value> {
        params.require(&["customer_id", "amount", "currency", "description"])?;

        let mut invoice_body = FormBody::new();
        invoice_body.copy_from(params, "customer_id", "customer");
        invoice_body.copy_from(params, "currency", "currency");

        let invoice = self.post_form("/invoices", &invoice_body).await?;

        // A response without an id is Stripe's error body; hand it back
        // unchanged and stop the chain.
        let Some(invoice_id) = object_id(&invoice).map(String::from) else {
            return Ok(invoice);
        };
        debug!("Created invoice: id={}", invoice_id);

        let mut item_body = FormBody::new();
        item_body.copy_from(params, "customer_id", "customer");
        item_body.set("invoice", &invoice_id);
        item_body.copy_from(params, "amount", "amount");
        item_body.copy_from(params, "currency", "currency");
        item_body.copy_from(params, "description", "description");
        item_body.copy_from(params, "ref_id", "metadata[reference_id]");

        let line_item = self.post_form("/invoiceitems", &item_body).await?;

        if object_id(&line_item).is_none() {
            return Ok(line_item);
        }

        let finalized = self
            .post_form(&format!("/invoices/{}/finalize", invoice_id), &FormBody::new())
            .await?;

        info!("Finalized invoice: id={}", invoice_id);
        Ok(finalized)
    }

    #[instrument(skip(self))]
    async fn charge_invoice(
        &self,
        invoice_id: &str,
        payment_method_id: &str,
    ) -> PaymentResult<Value> {
        require_id("invoice_id", invoice_id)?;
        require_id("payment_method_id", payment_method_id)?;

        let mut body = FormBody::new();
        body.set("payment_method", payment_method_id);
        body.set("off_session", "true");

        self.post_form(&format!("/invoices/{}/pay", invoice_id), &body)
            .await
    }

    async fn get_checkout_session(&self, session_id: &str) -> PaymentResult<Value> {
        require_id("session_id", session_id)?;
        self.get(&format!("/checkout/sessions/{}", session_id)).await
    }

    async fn get_subscription(&self, subscription_id: &str) -> PaymentResult<Value> {
        require_id("subscription_id", subscription_id)?;
        self.get(&format!("/subscriptions/{}", subscription_id)).await
    }

    async fn get_setup_intent(&self, intent_id: &str) -> PaymentResult<Value> {
        require_id("intent_id", intent_id)?;
        self.get(&format!("/setup_intents/{}", intent_id)).await
    }

    async fn get_invoice(&self, invoice_id: &str) -> PaymentResult<Value> {
        require_id("invoice_id", invoice_id)?;
        self.get(&format!("/invoices/{}", invoice_id)).await
    }

    #[instrument(skip(self, params))]
    async fn create_refund(&self, params: &Params) -> PaymentResult<Value> {
        params.require(&["payment_intent"])?;

        let mut body = FormBody::new();
        body.copy_from(params, "payment_intent", "payment_intent");
        body.copy_from(params, "reason", "reason");
        body.copy_from(params, "amount", "amount");

        let response = self.post_form("/refunds", &body).await?;

        if let Some(id) = object_id(&response) {
            info!("Created refund: id={}", id);
        }
        Ok(response)
    }

    async fn get_refund(&self, refund_id: &str) -> PaymentResult<Value> {
        require_id("refund_id", refund_id)?;
        self.get(&format!("/refunds/{}", refund_id)).await
    }

    async fn cancel_refund(&self, refund_id: &str) -> PaymentResult<Value> {
        require_id("refund_id", refund_id)?;
        // Posts to the refund resource itself with an empty body, not the
        // /cancel sub-path. Kept as deployed; see DESIGN.md.
        self.post_form(&format!("/refunds/{}", refund_id), &FormBody::new())
            .await
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(enable_3d: bool) -> StripeClient {
        StripeClient::new(StripeConfig::new("sk_test_abc123", enable_3d))
    }

    fn checkout_params() -> Params {
        Params::new()
            .with("currency", "usd")
            .with("amount", 1000i64)
            .with("product_name", "Widget")
            .with("success_url", "https://example.com/success")
    }

    #[test]
    fn test_session_body_minimal_payment() {
        let body = client(false).session_body(&checkout_params(), "payment");

        assert_eq!(body.get("mode"), Some("payment"));
        assert_eq!(body.get("payment_method_types[]"), Some("card"));
        assert_eq!(body.get("line_items[0][price_data][unit_amount]"), Some("1000"));
        assert_eq!(body.get("line_items[0][price_data][currency]"), Some("usd"));
        assert_eq!(
            body.get("line_items[0][price_data][product_data][name]"),
            Some("Widget")
        );
        assert_eq!(body.get("line_items[0][quantity]"), Some("1"));
        assert_eq!(body.get("success_url"), Some("https://example.com/success"));

        // Optional fields absent from input stay absent from the body
        assert!(!body.contains_key("metadata[reference_id]"));
        assert!(!body.contains_key("cancel_url"));
        assert!(!body.contains_key("line_items[0][price_data][product_data][description]"));
        assert!(!body.contains_key("payment_method_options[card][request_three_d_secure]"));
    }

    #[test]
    fn test_session_body_with_optional_fields() {
        let params = checkout_params()
            .with("ref_id", "order-42")
            .with("quantity", 3i64)
            .with("product_description", "A fine widget")
            .with("cancel_url", "https://example.com/cancel");

        let body = client(false).session_body(&params, "payment");

        assert_eq!(body.get("metadata[reference_id]"), Some("order-42"));
        assert_eq!(body.get("line_items[0][quantity]"), Some("3"));
        assert_eq!(
            body.get("line_items[0][price_data][product_data][description]"),
            Some("A fine widget")
        );
        assert_eq!(body.get("cancel_url"), Some("https://example.com/cancel"));
        // Caller quantity replaces the default, no duplicate field
        let quantity_fields = body
            .fields()
            .iter()
            .filter(|(k, _)| k == "line_items[0][quantity]")
            .count();
        assert_eq!(quantity_fields, 1);
    }

    #[test]
    fn test_session_body_three_d_secure_toggle() {
        let body = client(true).session_body(&checkout_params(), "payment");
        assert_eq!(
            body.get("payment_method_options[card][request_three_d_secure]"),
            Some("challenge")
        );

        let body = client(true).session_body(&checkout_params(), "subscription");
        assert_eq!(
            body.get("payment_method_options[card][request_three_d_secure]"),
            Some("challenge")
        );
    }

    #[test]
    fn test_object_id() {
        let with_id = serde_json::json!({"id": "in_123", "status": "draft"});
        assert_eq!(object_id(&with_id), Some("in_123"));

        let error_body = serde_json::json!({"error": {"message": "No such customer"}});
        assert_eq!(object_id(&error_body), None);

        let numeric_id = serde_json::json!({"id": 42});
        assert_eq!(object_id(&numeric_id), None);
    }

    #[test]
    fn test_require_id_rejects_empty() {
        assert!(require_id("refund_id", "re_123").is_ok());
        assert!(matches!(
            require_id("refund_id", ""),
            Err(PaymentError::InvalidRequest(_))
        ));
        assert!(matches!(
            require_id("refund_id", "   "),
            Err(PaymentError::InvalidRequest(_))
        ));
    }
}
