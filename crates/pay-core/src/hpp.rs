//! # Hosted Payment Page Types
//!
//! Requests for the processor's hosted payment pages. These are not JSON
//! bodies: they travel as signed key/value parameters, so each request knows
//! how to flatten itself with [`DirectoryLookupRequest::to_params`] and
//! [`SkipHppRequest::to_params`].

use crate::money::Currency;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Format a timestamp the way the HPP endpoints expect it
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Directory lookup: which payment methods can the shopper use?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLookupRequest {
    pub merchant_reference: String,
    /// Amount in minor units
    pub payment_amount: i64,
    pub currency_code: Currency,
    pub skin_code: String,
    pub merchant_account: String,
    pub session_validity: DateTime<Utc>,
    pub country_code: String,
}

impl DirectoryLookupRequest {
    /// Flatten into unsigned HPP parameters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currencyCode", self.currency_code.as_str().to_string()),
            ("merchantAccount", self.merchant_account.clone()),
            ("merchantReference", self.merchant_reference.clone()),
            ("paymentAmount", self.payment_amount.to_string()),
            ("sessionValidity", format_timestamp(self.session_validity)),
            ("skinCode", self.skin_code.clone()),
            ("countryCode", self.country_code.clone()),
        ]
    }
}

/// Skip-details request: send the shopper straight to a chosen payment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipHppRequest {
    pub merchant_reference: String,
    /// Amount in minor units
    pub payment_amount: i64,
    pub currency_code: Currency,
    pub ship_before_date: DateTime<Utc>,
    pub skin_code: String,
    pub merchant_account: String,
    pub shopper_locale: String,
    pub session_validity: DateTime<Utc>,
    pub country_code: String,
    pub brand_code: String,
    pub issuer_id: String,
}

impl SkipHppRequest {
    /// Flatten into unsigned HPP parameters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("merchantReference", self.merchant_reference.clone()),
            ("paymentAmount", self.payment_amount.to_string()),
            ("currencyCode", self.currency_code.as_str().to_string()),
            ("shipBeforeDate", format_timestamp(self.ship_before_date)),
            ("skinCode", self.skin_code.clone()),
            ("merchantAccount", self.merchant_account.clone()),
            ("shopperLocale", self.shopper_locale.clone()),
            ("sessionValidity", format_timestamp(self.session_validity)),
            ("countryCode", self.country_code.clone()),
            ("brandCode", self.brand_code.clone()),
            ("issuerId", self.issuer_id.clone()),
        ]
    }
}

/// Logo URLs for a payment method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logos {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiny: Option<String>,
}

/// Issuer (bank) offered by a payment method such as iDEAL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub issuer_id: String,
    pub name: String,
}

/// A payment method available on the hosted payment page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub brand_code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logos: Option<Logos>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issuers: Vec<Issuer>,
}

/// Directory lookup result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLookupResponse {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}
