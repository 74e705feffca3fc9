//! # Adyen Configuration
//!
//! Merchant credentials and settings for the Adyen integration.
//! All secrets are loaded from environment variables.

use pay_core::{Currency, PaymentError, PaymentResult};
use std::{env, fmt};

/// Classic Payment API endpoint of the test environment
pub const TEST_API_BASE_URL: &str = "https://pal-test.adyen.com/pal/servlet";

/// Hosted payment pages of the test environment
pub const TEST_HPP_BASE_URL: &str = "https://test.adyen.com/hpp";

/// Client-side encryption scripts of the test environment
pub const TEST_CSE_BASE_URL: &str = "https://test.adyen.com/hpp/cse/js";

/// Payment API version used for authorise and modifications
pub const PAYMENT_API_VERSION: &str = "v30";

/// Default shopper locale for hosted payment pages
pub const DEFAULT_SHOPPER_LOCALE: &str = "en_GB";

/// Variables that must be set (and non-empty) before the server starts
pub const REQUIRED_ENV_VARS: &[&str] = &[
    "ADYEN_USERNAME",
    "ADYEN_PASSWORD",
    "ADYEN_CLIENT_TOKEN",
    "ADYEN_ACCOUNT",
];

/// Adyen merchant configuration
#[derive(Clone)]
pub struct AdyenConfig {
    /// Web service user (`ws@Company.YourCompany`)
    pub username: String,

    /// Web service user password
    pub password: String,

    /// Client-side encryption token
    pub client_token: String,

    /// Merchant account all operations are booked on
    pub merchant_account: String,

    /// Currency for every amount sent by the playground
    pub currency: Currency,

    /// Hex-encoded HMAC key of the HPP skin
    pub hmac_key: Option<String>,

    /// HPP skin code
    pub skin_code: Option<String>,

    /// Locale shown on the hosted payment page
    pub shopper_locale: String,

    /// Payment API base URL (for testing/mocking)
    pub api_base_url: String,

    /// HPP base URL (for testing/mocking)
    pub hpp_base_url: String,

    /// CSE script base URL
    pub cse_base_url: String,
}

impl AdyenConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ADYEN_USERNAME`
    /// - `ADYEN_PASSWORD`
    /// - `ADYEN_CLIENT_TOKEN`
    /// - `ADYEN_ACCOUNT`
    ///
    /// Optional: `ADYEN_HMAC`, `ADYEN_SKINCODE`, `ADYEN_SHOPPER_LOCALE`.
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables are treated the same. All missing required
    /// variables are reported together.
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(PaymentError::Configuration(format!(
                "Some of the required variables are missing or empty: {}. \
                 Please make sure {} are set as environment variables",
                missing.join(", "),
                REQUIRED_ENV_VARS.join(", ")
            )));
        }

        let required = |key: &str| get(key).unwrap_or_default();

        Ok(Self {
            username: required("ADYEN_USERNAME"),
            password: required("ADYEN_PASSWORD"),
            client_token: required("ADYEN_CLIENT_TOKEN"),
            merchant_account: required("ADYEN_ACCOUNT"),
            currency: Currency::EUR,
            hmac_key: get("ADYEN_HMAC"),
            skin_code: get("ADYEN_SKINCODE"),
            shopper_locale: get("ADYEN_SHOPPER_LOCALE")
                .unwrap_or_else(|| DEFAULT_SHOPPER_LOCALE.to_string()),
            api_base_url: TEST_API_BASE_URL.to_string(),
            hpp_base_url: TEST_HPP_BASE_URL.to_string(),
            cse_base_url: TEST_CSE_BASE_URL.to_string(),
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        client_token: impl Into<String>,
        merchant_account: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            client_token: client_token.into(),
            merchant_account: merchant_account.into(),
            currency: Currency::EUR,
            hmac_key: None,
            skin_code: None,
            shopper_locale: DEFAULT_SHOPPER_LOCALE.to_string(),
            api_base_url: TEST_API_BASE_URL.to_string(),
            hpp_base_url: TEST_HPP_BASE_URL.to_string(),
            cse_base_url: TEST_CSE_BASE_URL.to_string(),
        }
    }

    /// Full URL of a Payment API operation (`authorise`, `capture`, ...)
    pub fn payment_url(&self, operation: &str) -> String {
        format!(
            "{}/Payment/{}/{}",
            self.api_base_url.trim_end_matches('/'),
            PAYMENT_API_VERSION,
            operation
        )
    }

    /// Full URL of an HPP page (`directory.shtml`, `skipDetails.shtml`)
    pub fn hpp_url(&self, page: &str) -> String {
        format!("{}/{}", self.hpp_base_url.trim_end_matches('/'), page)
    }

    /// URL of the CSE script matching the client token
    pub fn client_url(&self) -> String {
        format!(
            "{}/{}.shtml",
            self.cse_base_url.trim_end_matches('/'),
            self.client_token
        )
    }

    /// HMAC key required to sign HPP requests
    pub fn require_hmac_key(&self) -> PaymentResult<&str> {
        self.hmac_key.as_deref().ok_or_else(|| {
            PaymentError::Configuration(
                "ADYEN_HMAC is not set; hosted payment pages require it".to_string(),
            )
        })
    }

    /// Skin code, or an empty string when not configured
    pub fn skin_code(&self) -> &str {
        self.skin_code.as_deref().unwrap_or_default()
    }

    /// Builder: set custom Payment API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set custom HPP base URL (for testing)
    pub fn with_hpp_base_url(mut self, url: impl Into<String>) -> Self {
        self.hpp_base_url = url.into();
        self
    }

    /// Builder: set HPP signing settings
    pub fn with_hpp(mut self, hmac_key: impl Into<String>, skin_code: impl Into<String>) -> Self {
        self.hmac_key = Some(hmac_key.into());
        self.skin_code = Some(skin_code.into());
        self
    }
}

impl fmt::Debug for AdyenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdyenConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_token", &self.client_token)
            .field("merchant_account", &self.merchant_account)
            .field("currency", &self.currency)
            .field("hmac_key", &self.hmac_key.as_ref().map(|_| "***"))
            .field("skin_code", &self.skin_code)
            .field("shopper_locale", &self.shopper_locale)
            .field("api_base_url", &self.api_base_url)
            .field("hpp_base_url", &self.hpp_base_url)
            .finish()
    }
}
