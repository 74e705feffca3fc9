//! # Authorisation Types
//!
//! Request and response objects for the card authorisation call.

use crate::money::Amount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw card details posted straight from the form.
///
/// Only used when the browser did not encrypt the card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub holder_name: String,
    pub cvc: String,
}

/// Card data encrypted in the browser by the processor's CSE script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedCard {
    #[serde(rename = "card.encrypted.json")]
    pub blob: String,
}

/// Where the card data for an authorisation comes from.
///
/// Decided once while parsing the form; the two shapes are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentSource {
    /// Sent as `additionalData["card.encrypted.json"]`
    #[serde(rename = "additionalData")]
    Encrypted(EncryptedCard),
    /// Sent as `card`
    #[serde(rename = "card")]
    Card(Card),
}

impl PaymentSource {
    /// Build the encrypted variant from a CSE blob
    pub fn encrypted(blob: impl Into<String>) -> Self {
        PaymentSource::Encrypted(EncryptedCard { blob: blob.into() })
    }

    /// Check whether card data stays encrypted end to end
    pub fn is_encrypted(&self) -> bool {
        matches!(self, PaymentSource::Encrypted(_))
    }
}

/// Recurring contract types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecurringContract {
    /// Shopper-not-present recurring payments
    Recurring,
}

/// Recurring settings attached to an authorisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    pub contract: RecurringContract,
}

/// Authorisation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseRequest {
    /// Amount in minor units
    pub amount: Amount,

    /// Merchant account the payment is booked on
    pub merchant_account: String,

    /// Order number or other business reference
    pub reference: String,

    /// Shopper identifier on the merchant side
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,

    /// Set when the shopper opted into storing the card for recurring use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,

    /// Card data, flattened into either `card` or `additionalData`
    #[serde(flatten)]
    pub source: PaymentSource,
}

impl AuthoriseRequest {
    /// Create a new authorisation request
    pub fn new(
        amount: Amount,
        merchant_account: impl Into<String>,
        reference: impl Into<String>,
        source: PaymentSource,
    ) -> Self {
        Self {
            amount,
            merchant_account: merchant_account.into(),
            reference: reference.into(),
            shopper_reference: String::new(),
            recurring: None,
            source,
        }
    }

    /// Set the shopper reference
    pub fn with_shopper_reference(mut self, shopper_reference: impl Into<String>) -> Self {
        self.shopper_reference = shopper_reference.into();
        self
    }

    /// Mark as a recurring-contract request
    pub fn with_recurring(mut self, contract: RecurringContract) -> Self {
        self.recurring = Some(Recurring { contract });
        self
    }
}

/// Authorisation result returned by the processor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseResponse {
    #[serde(default)]
    pub psp_reference: String,

    #[serde(default)]
    pub result_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<BTreeMap<String, String>>,
}

impl AuthoriseResponse {
    /// Check if the payment was authorised
    pub fn is_authorised(&self) -> bool {
        self.result_code == "Authorised"
    }
}
