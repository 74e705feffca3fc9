//! # Merchant References
//!
//! Demo merchant references for hosted payment page requests.

use rand::Rng;

/// Prefix of every generated merchant reference
pub const MERCHANT_REFERENCE_PREFIX: &str = "DE-100";

/// Number of random letters after the prefix
pub const MERCHANT_REFERENCE_SUFFIX_LEN: usize = 6;

/// Generate a merchant reference such as `DE-100QHZKRA`
pub fn merchant_reference() -> String {
    merchant_reference_with(&mut rand::rng())
}

/// Generate a merchant reference from the given RNG
pub fn merchant_reference_with<R: Rng>(rng: &mut R) -> String {
    let mut reference = String::with_capacity(
        MERCHANT_REFERENCE_PREFIX.len() + MERCHANT_REFERENCE_SUFFIX_LEN,
    );
    reference.push_str(MERCHANT_REFERENCE_PREFIX);
    reference.push_str(&random_uppercase(rng, MERCHANT_REFERENCE_SUFFIX_LEN));
    reference
}

/// `len` letters drawn uniformly from `A..=Z`
fn random_uppercase<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.random_range('A'..='Z')).collect()
}
