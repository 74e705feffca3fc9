//! # Form-to-Request Mapping
//!
//! Turns submitted HTML forms into gateway requests. Each form is parsed once
//! into exactly one request value; validation failures never reach the
//! gateway.

use crate::error::ApiError;
use chrono::{DateTime, Duration, Utc};
use pay_adyen::AdyenConfig;
use pay_core::{
    merchant_reference, Amount, AuthoriseRequest, Card, DirectoryLookupRequest,
    ModificationRequest, PaymentSource, RecurringContract, SkipHppRequest,
};
use serde::de::{value::MapDeserializer, DeserializeOwned};
use serde::Deserialize;
use std::collections::HashSet;

/// Amount used for hosted payment page demos, in minor units
pub const HPP_PAYMENT_AMOUNT: i64 = 1000;

/// Shopper country for hosted payment page demos
pub const HPP_COUNTRY_CODE: &str = "NL";

/// Payment method the skip-details redirect goes to
pub const HPP_BRAND_CODE: &str = "ideal";

/// iDEAL test issuer
pub const HPP_ISSUER_ID: &str = "1121";

/// How long a hosted payment page session stays valid
pub fn session_validity(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(60)
}

/// Latest shipping date announced to the hosted payment page
pub fn ship_before_date(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(5)
}

/// Parse a submitted amount; anything but a finite float is rejected
pub fn parse_amount(raw: &str) -> Result<f64, ApiError> {
    raw.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(ApiError::InvalidAmount)
}

/// Decode submitted form pairs into `T`. A repeated key keeps its first value.
pub fn from_first_values<T: DeserializeOwned>(
    pairs: Vec<(String, String)>,
) -> Result<T, ApiError> {
    let mut seen = HashSet::new();
    let first = pairs.into_iter().filter(|(key, _)| seen.insert(key.clone()));

    T::deserialize(MapDeserializer::<_, serde::de::value::Error>::new(first))
        .map_err(|e| ApiError::Form(format!("Failed to deserialize form body: {}", e)))
}

// =============================================================================
// Authorisation
// =============================================================================

/// `POST /perform_payment` form
#[derive(Debug, Default, Deserialize)]
pub struct PaymentForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default, rename = "shopperReference")]
    pub shopper_reference: String,
    #[serde(default)]
    pub is_recurring: String,
    #[serde(default, rename = "adyen-encrypted-data")]
    pub encrypted_data: String,
    #[serde(default)]
    pub number: String,
    #[serde(default, rename = "expiryMonth")]
    pub expiry_month: String,
    #[serde(default, rename = "expiryYear")]
    pub expiry_year: String,
    #[serde(default, rename = "holderName")]
    pub holder_name: String,
    #[serde(default)]
    pub cvc: String,
}

impl PaymentForm {
    /// Encrypted data wins; raw card fields are only read when it is absent
    pub fn payment_source(&self) -> PaymentSource {
        if !self.encrypted_data.is_empty() {
            return PaymentSource::encrypted(self.encrypted_data.clone());
        }

        PaymentSource::Card(Card {
            number: self.number.clone(),
            expiry_month: self.expiry_month.clone(),
            expiry_year: self.expiry_year.clone(),
            holder_name: self.holder_name.clone(),
            cvc: self.cvc.clone(),
        })
    }

    /// Build the authorisation request, amount converted to minor units
    pub fn into_request(self, merchant: &AdyenConfig) -> Result<AuthoriseRequest, ApiError> {
        let amount = parse_amount(&self.amount)?;
        let source = self.payment_source();

        let mut request = AuthoriseRequest::new(
            Amount::from_major_units(amount, merchant.currency)
                .map_err(|_| ApiError::InvalidAmount)?,
            merchant.merchant_account.clone(),
            self.reference,
            source,
        )
        .with_shopper_reference(self.shopper_reference);

        if !self.is_recurring.is_empty() {
            request = request.with_recurring(RecurringContract::Recurring);
        }

        Ok(request)
    }
}

// =============================================================================
// Modifications
// =============================================================================

/// `POST /perform_capture`, `/perform_cancel` and `/perform_refund` form
#[derive(Debug, Default, Deserialize)]
pub struct ModificationForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default, rename = "original-reference")]
    pub original_reference: String,
}

impl ModificationForm {
    /// Capture/refund request; the amount is forwarded as submitted
    pub fn into_amount_request(
        self,
        merchant: &AdyenConfig,
    ) -> Result<ModificationRequest, ApiError> {
        let amount = parse_amount(&self.amount)?;

        Ok(self
            .into_cancel_request(merchant)
            .with_amount(Amount::new(amount, merchant.currency)))
    }

    /// Cancel request; any submitted amount is ignored
    pub fn into_cancel_request(self, merchant: &AdyenConfig) -> ModificationRequest {
        ModificationRequest::new(
            merchant.merchant_account.clone(),
            self.reference,
            self.original_reference,
        )
    }
}

// =============================================================================
// Hosted Payment Pages
// =============================================================================

/// Directory lookup for the demo amount
pub fn directory_lookup_request(
    merchant: &AdyenConfig,
    now: DateTime<Utc>,
) -> DirectoryLookupRequest {
    DirectoryLookupRequest {
        merchant_reference: merchant_reference(),
        payment_amount: HPP_PAYMENT_AMOUNT,
        currency_code: merchant.currency,
        skin_code: merchant.skin_code().to_string(),
        merchant_account: merchant.merchant_account.clone(),
        session_validity: session_validity(now),
        country_code: HPP_COUNTRY_CODE.to_string(),
    }
}

/// Skip-details request straight to the iDEAL test issuer
pub fn skip_hpp_request(merchant: &AdyenConfig, now: DateTime<Utc>) -> SkipHppRequest {
    SkipHppRequest {
        merchant_reference: merchant_reference(),
        payment_amount: HPP_PAYMENT_AMOUNT,
        currency_code: merchant.currency,
        ship_before_date: ship_before_date(now),
        skin_code: merchant.skin_code().to_string(),
        merchant_account: merchant.merchant_account.clone(),
        shopper_locale: merchant.shopper_locale.clone(),
        session_validity: session_validity(now),
        country_code: HPP_COUNTRY_CODE.to_string(),
        brand_code: HPP_BRAND_CODE.to_string(),
        issuer_id: HPP_ISSUER_ID.to_string(),
    }
}
