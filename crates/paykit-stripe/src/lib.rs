//! # paykit-stripe
//!
//! Stripe payment gateway for paykit-rs.
//!
//! `StripeClient` implements the full `PaymentGateway` interface against
//! Stripe's form-encoded HTTP API: hosted checkout sessions (one-time,
//! subscription, and card-setup modes), the create/populate/finalize invoice
//! flow, off-session invoice charging, refunds, and status lookups.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paykit_core::{Params, PaymentGateway};
//! use paykit_stripe::StripeClient;
//!
//! // Construct once from STRIPE_SECRET_KEY / STRIPE_ENABLE_3D, share freely
//! let client = StripeClient::from_env()?;
//!
//! let session = client
//!     .create_checkout_session(
//!         &Params::new()
//!             .with("currency", "usd")
//!             .with("amount", 1999i64)
//!             .with("product_name", "Widget")
//!             .with("success_url", "https://example.com/success"),
//!     )
//!     .await?;
//!
//! // Redirect the customer to session["url"]
//! ```
//!
//! Responses are returned as decoded JSON exactly as Stripe sent them,
//! including error bodies; inspect the value for an `error` key.

pub mod client;
pub mod config;

// Re-exports
pub use client::StripeClient;
pub use config::StripeConfig;
