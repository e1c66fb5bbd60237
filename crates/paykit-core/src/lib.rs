//! # paykit-core
//!
//! Core types and traits for the paykit-rs payment client.
//!
//! This crate provides:
//! - `PaymentGateway` trait: the 12-operation provider interface
//! - `Params` for caller input and required-field validation
//! - `FormBody` for building flat form-encoded request bodies
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use paykit_core::{Params, PaymentGateway};
//!
//! let params = Params::new()
//!     .with("currency", "usd")
//!     .with("amount", 1999i64)
//!     .with("product_name", "Widget")
//!     .with("success_url", "https://example.com/success");
//!
//! let session = gateway.create_checkout_session(&params).await?;
//! println!("redirect to {}", session["url"]);
//! ```

pub mod error;
pub mod form;
pub mod gateway;
pub mod params;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use form::FormBody;
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use params::{ParamValue, Params};
