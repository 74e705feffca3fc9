//! # Modification Types
//!
//! Capture, cancel and refund all act on a prior authorisation identified by
//! its PSP reference, and share one request/response shape.

use crate::money::Amount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which modification to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationKind {
    Capture,
    Cancel,
    Refund,
}

impl ModificationKind {
    /// Operation name as used in the processor's endpoint path
    pub fn as_str(&self) -> &'static str {
        match self {
            ModificationKind::Capture => "capture",
            ModificationKind::Cancel => "cancel",
            ModificationKind::Refund => "refund",
        }
    }
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modification request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationRequest {
    /// Merchant account the original payment was booked on
    pub merchant_account: String,

    /// Amount to capture or refund; absent for cancel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_amount: Option<Amount>,

    /// Order number or other business reference
    pub reference: String,

    /// PSP reference of the original authorisation
    pub original_reference: String,
}

impl ModificationRequest {
    /// Create a modification request without an amount (cancel)
    pub fn new(
        merchant_account: impl Into<String>,
        reference: impl Into<String>,
        original_reference: impl Into<String>,
    ) -> Self {
        Self {
            merchant_account: merchant_account.into(),
            modification_amount: None,
            reference: reference.into(),
            original_reference: original_reference.into(),
        }
    }

    /// Set the modification amount (capture, refund)
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.modification_amount = Some(amount);
        self
    }
}

/// Modification acknowledgement returned by the processor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationResponse {
    #[serde(default)]
    pub psp_reference: String,

    /// e.g. `[capture-received]`
    #[serde(default)]
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<BTreeMap<String, String>>,
}

impl ModificationResponse {
    /// Check if the processor accepted the modification for processing
    pub fn is_received(&self) -> bool {
        self.response.ends_with("-received]")
    }
}
