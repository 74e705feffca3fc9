//! # pay-core
//!
//! Core types and traits for the adyen-playground payment demo.
//!
//! This crate provides:
//! - `PaymentGateway` trait implemented by processor clients
//! - `AuthoriseRequest` / `ModificationRequest` and their responses
//! - Hosted payment page requests (`DirectoryLookupRequest`, `SkipHppRequest`)
//! - `Amount` and `Currency`
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Amount, AuthoriseRequest, Currency, PaymentGateway, PaymentSource};
//!
//! let request = AuthoriseRequest::new(
//!     Amount::from_major_units(10.0, Currency::EUR)?,
//!     "MyMerchantAccount",
//!     "ORDER-1",
//!     PaymentSource::encrypted(blob),
//! );
//!
//! let response = gateway.authorise(&request).await?;
//! println!("{} {}", response.psp_reference, response.result_code);
//! ```

pub mod error;
pub mod gateway;
pub mod hpp;
pub mod modification;
pub mod money;
pub mod payment;
pub mod reference;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use hpp::{
    format_timestamp, DirectoryLookupRequest, DirectoryLookupResponse, Issuer, Logos,
    PaymentMethod, SkipHppRequest,
};
pub use modification::{ModificationKind, ModificationRequest, ModificationResponse};
pub use money::{Amount, Currency};
pub use payment::{
    AuthoriseRequest, AuthoriseResponse, Card, EncryptedCard, PaymentSource, Recurring,
    RecurringContract,
};
pub use reference::{merchant_reference, MERCHANT_REFERENCE_PREFIX};
