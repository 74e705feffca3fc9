//! # Adyen Gateway
//!
//! `PaymentGateway` implementation over Adyen's classic Payment API and the
//! hosted payment pages.

use crate::config::AdyenConfig;
use crate::signature::sign_params;
use async_trait::async_trait;
use pay_core::{
    AuthoriseRequest, AuthoriseResponse, DirectoryLookupRequest, DirectoryLookupResponse,
    ModificationKind, ModificationRequest, ModificationResponse, PaymentError, PaymentGateway,
    PaymentResult, SkipHppRequest,
};
use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Provider name used in errors and logs
pub const PROVIDER: &str = "adyen";

/// Upper bound for a single processor call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Adyen payment gateway
pub struct AdyenGateway {
    config: AdyenConfig,
    client: Client,
}

impl AdyenGateway {
    /// Create a new gateway
    pub fn new(config: AdyenConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = AdyenConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration this gateway was built with
    pub fn config(&self) -> &AdyenConfig {
        &self.config
    }

    /// POST a JSON body to a Payment API operation with Basic auth
    async fn post_json<B, R>(&self, operation: &str, body: &B) -> PaymentResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.payment_url(operation);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(body)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        read_json(response).await
    }

    /// Sign HPP parameters, failing early when the skin is not configured
    fn signed_hpp_params(
        &self,
        skin_code: &str,
        params: Vec<(&'static str, String)>,
    ) -> PaymentResult<Vec<(&'static str, String)>> {
        if skin_code.is_empty() {
            return Err(PaymentError::Configuration(
                "ADYEN_SKINCODE is not set; hosted payment pages require it".to_string(),
            ));
        }

        sign_params(self.config.require_hmac_key()?, params)
    }
}

#[async_trait]
impl PaymentGateway for AdyenGateway {
    fn client_url(&self) -> String {
        self.config.client_url()
    }

    #[instrument(skip(self, request), fields(reference = %request.reference))]
    async fn authorise(&self, request: &AuthoriseRequest) -> PaymentResult<AuthoriseResponse> {
        if !request.source.is_encrypted() {
            warn!("Authorising with raw card fields; card data is not encrypted");
        }

        let response: AuthoriseResponse = self.post_json("authorise", request).await?;

        if response.is_authorised() {
            info!("Authorised: psp_reference={}", response.psp_reference);
        } else {
            warn!(
                "Not authorised: psp_reference={}, result_code={}, refusal_reason={:?}",
                response.psp_reference, response.result_code, response.refusal_reason
            );
        }

        Ok(response)
    }

    #[instrument(skip(self, request), fields(original_reference = %request.original_reference))]
    async fn modify(
        &self,
        kind: ModificationKind,
        request: &ModificationRequest,
    ) -> PaymentResult<ModificationResponse> {
        let response: ModificationResponse = self.post_json(kind.as_str(), request).await?;

        if response.is_received() {
            info!("{} received: psp_reference={}", kind, response.psp_reference);
        } else {
            warn!(
                "{} not received: psp_reference={}, response={}",
                kind, response.psp_reference, response.response
            );
        }

        Ok(response)
    }

    #[instrument(skip(self, request), fields(merchant_reference = %request.merchant_reference))]
    async fn directory_lookup(
        &self,
        request: &DirectoryLookupRequest,
    ) -> PaymentResult<DirectoryLookupResponse> {
        let params = self.signed_hpp_params(&request.skin_code, request.to_params())?;
        let url = self.config.hpp_url("directory.shtml");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let lookup: DirectoryLookupResponse = read_json(response).await?;

        info!(
            "Directory lookup returned {} payment methods",
            lookup.payment_methods.len()
        );

        Ok(lookup)
    }

    #[instrument(skip(self, request), fields(merchant_reference = %request.merchant_reference))]
    async fn hpp_redirect_url(&self, request: &SkipHppRequest) -> PaymentResult<String> {
        let params = self.signed_hpp_params(&request.skin_code, request.to_params())?;

        let url = Url::parse_with_params(&self.config.hpp_url("skipDetails.shtml"), &params)
            .map_err(|e| PaymentError::Configuration(format!("Invalid HPP URL: {}", e)))?;

        debug!("HPP redirect URL built for brand {}", request.brand_code);

        Ok(url.into())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Read a processor response, mapping non-2xx statuses to provider errors
async fn read_json<R: DeserializeOwned>(response: Response) -> PaymentResult<R> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    if !status.is_success() {
        error!("Adyen API error: status={}, body={}", status, body);

        if let Ok(error_response) = serde_json::from_str::<AdyenErrorResponse>(&body) {
            return Err(PaymentError::provider(PROVIDER, error_response.message));
        }

        return Err(PaymentError::provider(
            PROVIDER,
            format!("HTTP {}: {}", status, body),
        ));
    }

    serde_json::from_str(&body).map_err(|e| {
        PaymentError::Serialization(format!("Failed to parse Adyen response: {}", e))
    })
}

// =============================================================================
// Adyen API Types
// =============================================================================

/// Error body: `{"status", "errorCode", "message", "errorType", "pspReference"}`
#[derive(Debug, Deserialize)]
struct AdyenErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pay_core::{Amount, Card, Currency, PaymentSource, RecurringContract};
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HMAC_KEY: &str = "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48";

    fn test_config(server: &MockServer) -> AdyenConfig {
        AdyenConfig::new("ws@Company.Test", "secret", "10001|ABCDEF", "TestMerchant")
            .with_api_base_url(server.uri())
            .with_hpp_base_url(format!("{}/hpp", server.uri()))
    }

    fn lookup_request(skin_code: &str) -> DirectoryLookupRequest {
        DirectoryLookupRequest {
            merchant_reference: "DE-100ABCDEF".to_string(),
            payment_amount: 1000,
            currency_code: Currency::EUR,
            skin_code: skin_code.to_string(),
            merchant_account: "TestMerchant".to_string(),
            session_validity: Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap(),
            country_code: "NL".to_string(),
        }
    }

    fn skip_request() -> SkipHppRequest {
        SkipHppRequest {
            merchant_reference: "DE-100ABCDEF".to_string(),
            payment_amount: 1000,
            currency_code: Currency::EUR,
            ship_before_date: Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap(),
            skin_code: "X7hsNDWp".to_string(),
            merchant_account: "TestMerchant".to_string(),
            shopper_locale: "en_GB".to_string(),
            session_validity: Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap(),
            country_code: "NL".to_string(),
            brand_code: "ideal".to_string(),
            issuer_id: "1121".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authorise_encrypted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Payment/v30/authorise"))
            .and(basic_auth("ws@Company.Test", "secret"))
            .and(body_json(json!({
                "amount": {"value": 1000, "currency": "EUR"},
                "merchantAccount": "TestMerchant",
                "reference": "ORDER-1",
                "shopperReference": "shopper-1",
                "recurring": {"contract": "RECURRING"},
                "additionalData": {"card.encrypted.json": "adyenjs_blob"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pspReference": "8815161318854998",
                "resultCode": "Authorised",
                "authCode": "83152"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = AdyenGateway::new(test_config(&server)).unwrap();
        let request = AuthoriseRequest::new(
            Amount::from_major_units(10.0, Currency::EUR).unwrap(),
            "TestMerchant",
            "ORDER-1",
            PaymentSource::encrypted("adyenjs_blob"),
        )
        .with_shopper_reference("shopper-1")
        .with_recurring(RecurringContract::Recurring);

        let response = gateway.authorise(&request).await.unwrap();
        assert!(response.is_authorised());
        assert_eq!(response.psp_reference, "8815161318854998");
    }

    #[tokio::test]
    async fn test_authorise_refused_by_validation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Payment/v30/authorise"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "status": 422,
                "errorCode": "101",
                "message": "Invalid card number",
                "errorType": "validation"
            })))
            .mount(&server)
            .await;

        let gateway = AdyenGateway::new(test_config(&server)).unwrap();
        let request = AuthoriseRequest::new(
            Amount::from_major_units(10.0, Currency::EUR).unwrap(),
            "TestMerchant",
            "ORDER-2",
            PaymentSource::Card(Card {
                number: "1234".to_string(),
                expiry_month: "08".to_string(),
                expiry_year: "2028".to_string(),
                holder_name: "John Doe".to_string(),
                cvc: "737".to_string(),
            }),
        );

        let err = gateway.authorise(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider error [adyen]: Invalid card number");
    }

    #[tokio::test]
    async fn test_unstructured_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Payment/v30/cancel"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let gateway = AdyenGateway::new(test_config(&server)).unwrap();
        let request = ModificationRequest::new("TestMerchant", "ORDER1", "PSP123");

        let err = gateway.cancel(&request).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 401"));
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[tokio::test]
    async fn test_capture() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Payment/v30/capture"))
            .and(body_json(json!({
                "merchantAccount": "TestMerchant",
                "modificationAmount": {"value": 12.5, "currency": "EUR"},
                "reference": "ORDER1",
                "originalReference": "PSP123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pspReference": "8825408195409505",
                "response": "[capture-received]"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = AdyenGateway::new(test_config(&server)).unwrap();
        let request = ModificationRequest::new("TestMerchant", "ORDER1", "PSP123")
            .with_amount(Amount::new(12.5, Currency::EUR));

        let response = gateway.capture(&request).await.unwrap();
        assert!(response.is_received());
    }

    #[tokio::test]
    async fn test_refund_routes_to_refund_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Payment/v30/refund"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pspReference": "8825408195409506",
                "response": "[refund-received]"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = AdyenGateway::new(test_config(&server)).unwrap();
        let request = ModificationRequest::new("TestMerchant", "ORDER1", "PSP123")
            .with_amount(Amount::new(5.0, Currency::EUR));

        let response = gateway.refund(&request).await.unwrap();
        assert_eq!(response.response, "[refund-received]");
    }

    #[tokio::test]
    async fn test_network_error() {
        let config = AdyenConfig::new("user", "pass", "token", "TestMerchant")
            .with_api_base_url("http://127.0.0.1:1");
        let gateway = AdyenGateway::new(config).unwrap();
        let request = ModificationRequest::new("TestMerchant", "ORDER1", "PSP123");

        let err = gateway.cancel(&request).await.unwrap_err();
        assert!(matches!(err, PaymentError::NetworkError(_)));
    }

    #[tokio::test]
    async fn test_directory_lookup_is_signed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hpp/directory.shtml"))
            .and(body_string_contains("merchantSig="))
            .and(body_string_contains("skinCode=X7hsNDWp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "paymentMethods": [
                    {
                        "brandCode": "ideal",
                        "name": "iDEAL",
                        "issuers": [{"issuerId": "1121", "name": "Test Issuer"}]
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(&server).with_hpp(HMAC_KEY, "X7hsNDWp");
        let gateway = AdyenGateway::new(config).unwrap();

        let lookup = gateway
            .directory_lookup(&lookup_request("X7hsNDWp"))
            .await
            .unwrap();
        assert_eq!(lookup.payment_methods[0].brand_code, "ideal");
    }

    #[tokio::test]
    async fn test_directory_lookup_requires_hmac() {
        let server = MockServer::start().await;
        let gateway = AdyenGateway::new(test_config(&server)).unwrap();

        let err = gateway
            .directory_lookup(&lookup_request("X7hsNDWp"))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("ADYEN_HMAC"));
    }

    #[tokio::test]
    async fn test_hpp_redirect_url() {
        let config = AdyenConfig::new("user", "pass", "token", "TestMerchant")
            .with_hpp(HMAC_KEY, "X7hsNDWp");
        let gateway = AdyenGateway::new(config).unwrap();

        let url = gateway.hpp_redirect_url(&skip_request()).await.unwrap();
        let parsed = Url::parse(&url).unwrap();

        assert_eq!(parsed.path(), "/hpp/skipDetails.shtml");
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("brandCode".to_string(), "ideal".to_string())));
        assert!(pairs.contains(&("issuerId".to_string(), "1121".to_string())));
        assert!(pairs.contains(&("sessionValidity".to_string(), "2024-03-01T13:00:00Z".to_string())));
        assert!(pairs.iter().any(|(k, v)| k == "merchantSig" && !v.is_empty()));
    }

    #[tokio::test]
    async fn test_hpp_redirect_requires_skin_code() {
        let config = AdyenConfig::new("user", "pass", "token", "TestMerchant")
            .with_hpp(HMAC_KEY, "");
        let gateway = AdyenGateway::new(config).unwrap();

        let mut request = skip_request();
        request.skin_code = String::new();

        let err = gateway.hpp_redirect_url(&request).await.unwrap_err();
        assert!(err.to_string().contains("ADYEN_SKINCODE"));
    }

    #[test]
    fn test_client_url() {
        let config = AdyenConfig::new("user", "pass", "10001|KEY", "TestMerchant");
        let gateway = AdyenGateway::new(config).unwrap();
        assert_eq!(
            gateway.client_url(),
            "https://test.adyen.com/hpp/cse/js/10001|KEY.shtml"
        );
        assert_eq!(gateway.provider_name(), "adyen");
    }
}
