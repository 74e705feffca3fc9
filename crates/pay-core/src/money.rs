//! # Money Types
//!
//! Currencies and amounts as they travel on the wire to the processor.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Minor units per major unit for every currency this demo is configured with.
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount in a given currency.
///
/// `value` is kept as a float because modification amounts are forwarded
/// exactly as submitted. Whole values go out as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(serialize_with = "serialize_value")]
    pub value: f64,
    pub currency: Currency,
}

impl Amount {
    /// Create an amount with the value taken as-is
    pub fn new(value: f64, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Convert a major-unit decimal (e.g. `10.99`) to minor units (`1099`),
    /// rounding to the nearest unit.
    ///
    /// Fails when the input or the converted value is not finite.
    pub fn from_major_units(amount: f64, currency: Currency) -> PaymentResult<Self> {
        let value = (amount * MINOR_UNITS_PER_MAJOR).round();
        if !value.is_finite() {
            return Err(PaymentError::InvalidRequest(format!(
                "amount {} is out of range",
                amount
            )));
        }

        Ok(Self { value, currency })
    }
}

fn serialize_value<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
