//! # HPP Merchant Signature
//!
//! Hosted payment page parameters are signed with HMAC-SHA256 using the skin's
//! hex-encoded key and sent along as `merchantSig`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use pay_core::{PaymentError, PaymentResult};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the signature parameter
pub const MERCHANT_SIG: &str = "merchantSig";

/// Append `merchantSig` to a set of HPP parameters
pub fn sign_params(
    hmac_key: &str,
    mut params: Vec<(&'static str, String)>,
) -> PaymentResult<Vec<(&'static str, String)>> {
    let signature = merchant_signature(hmac_key, &params)?;
    params.push((MERCHANT_SIG, signature));
    Ok(params)
}

/// Base64 HMAC-SHA256 over the signing string of `params`
pub fn merchant_signature(hmac_key: &str, params: &[(&str, String)]) -> PaymentResult<String> {
    let key = hex::decode(hmac_key.trim()).map_err(|e| {
        PaymentError::Configuration(format!("ADYEN_HMAC is not a valid hex key: {}", e))
    })?;

    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| PaymentError::Configuration(format!("Invalid HMAC key: {}", e)))?;
    mac.update(signing_string(params).as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Sorted, escaped keys joined by `:`, followed by the values in the same order
fn signing_string(params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let keys = sorted.iter().map(|(key, _)| escape(key));
    let values = sorted.iter().map(|(_, value)| escape(value));

    keys.chain(values).collect::<Vec<_>>().join(":")
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace(':', "\\:")
}
