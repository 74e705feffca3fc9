//! # Payment Gateway Trait
//!
//! The seam between the HTTP layer and the processor client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentGateway (trait)                    │
//! │  ├── client_url()          CSE script for the form page     │
//! │  ├── authorise()                                            │
//! │  ├── capture() / cancel() / refund()                        │
//! │  ├── directory_lookup()    hosted payment page methods      │
//! │  └── hpp_redirect_url()    signed skip-details URL          │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                 ┌──────────┴──────────┐
//!                 │                     │
//!         ┌───────┴───────┐     ┌───────┴───────┐
//!         │ AdyenGateway  │     │  test doubles │
//!         └───────────────┘     └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::hpp::{DirectoryLookupRequest, DirectoryLookupResponse, SkipHppRequest};
use crate::modification::{ModificationKind, ModificationRequest, ModificationResponse};
use crate::payment::{AuthoriseRequest, AuthoriseResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Operations offered by a payment processor client.
///
/// Every method performs exactly one call to the processor; nothing is
/// retried.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// URL of the client-side encryption script for the payment form.
    fn client_url(&self) -> String;

    /// Authorise a card payment.
    async fn authorise(&self, request: &AuthoriseRequest) -> PaymentResult<AuthoriseResponse>;

    /// Apply a capture, cancel or refund to a prior authorisation.
    async fn modify(
        &self,
        kind: ModificationKind,
        request: &ModificationRequest,
    ) -> PaymentResult<ModificationResponse>;

    /// List payment methods available on the hosted payment page.
    async fn directory_lookup(
        &self,
        request: &DirectoryLookupRequest,
    ) -> PaymentResult<DirectoryLookupResponse>;

    /// Build the signed hosted payment page URL to redirect the shopper to.
    async fn hpp_redirect_url(&self, request: &SkipHppRequest) -> PaymentResult<String>;

    /// Get the provider name (for logging and error messages).
    fn provider_name(&self) -> &'static str;

    /// Capture a previously authorised payment.
    async fn capture(&self, request: &ModificationRequest) -> PaymentResult<ModificationResponse> {
        self.modify(ModificationKind::Capture, request).await
    }

    /// Cancel a previously authorised payment.
    async fn cancel(&self, request: &ModificationRequest) -> PaymentResult<ModificationResponse> {
        self.modify(ModificationKind::Cancel, request).await
    }

    /// Refund a captured payment.
    async fn refund(&self, request: &ModificationRequest) -> PaymentResult<ModificationResponse> {
        self.modify(ModificationKind::Refund, request).await
    }
}

/// Type alias for a shared gateway
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
