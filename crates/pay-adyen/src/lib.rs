//! # pay-adyen
//!
//! Adyen payment gateway for adyen-playground.
//!
//! Talks to two Adyen surfaces:
//!
//! 1. **Payment API** (`/pal/servlet/Payment/v30`) - JSON over Basic auth
//!    - `authorise` with CSE-encrypted or raw card data
//!    - `capture`, `cancel`, `refund` against a PSP reference
//!
//! 2. **Hosted Payment Pages** (`/hpp`) - HMAC-signed parameters
//!    - `directory.shtml` to list payment methods
//!    - `skipDetails.shtml` to send the shopper straight to a method
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_adyen::AdyenGateway;
//! use pay_core::PaymentGateway;
//!
//! // Create gateway from environment
//! let gateway = AdyenGateway::from_env()?;
//!
//! // Capture part of an authorisation
//! let request = ModificationRequest::new(account, "ORDER1", "8815161318854998")
//!     .with_amount(Amount::new(12.5, Currency::EUR));
//! let response = gateway.capture(&request).await?;
//! ```

pub mod config;
pub mod gateway;
pub mod signature;

// Re-exports
pub use config::{AdyenConfig, REQUIRED_ENV_VARS};
pub use gateway::{AdyenGateway, PROVIDER};
pub use signature::{merchant_signature, sign_params};
