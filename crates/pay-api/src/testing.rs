//! Recording gateway double for handler and router tests.

use crate::state::{AppConfig, AppState, LogFormat};
use async_trait::async_trait;
use pay_adyen::AdyenConfig;
use pay_core::{
    AuthoriseRequest, AuthoriseResponse, DirectoryLookupRequest, DirectoryLookupResponse, Issuer,
    ModificationKind, ModificationRequest, ModificationResponse, PaymentError, PaymentGateway,
    PaymentMethod, PaymentResult, SkipHppRequest,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A gateway call as seen by the double
#[derive(Debug, Clone)]
pub enum Call {
    Authorise(AuthoriseRequest),
    Modify(ModificationKind, ModificationRequest),
    DirectoryLookup(DirectoryLookupRequest),
    HppRedirect(SkipHppRequest),
}

/// Records every call and answers with canned responses, or with a provider
/// error when built with [`MockGateway::failing`].
#[derive(Default)]
pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    failure: Option<String>,
}

impl MockGateway {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> PaymentResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(PaymentError::provider("mock", message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    fn client_url(&self) -> String {
        "https://test.adyen.com/hpp/cse/js/10001|KEY.shtml".to_string()
    }

    async fn authorise(&self, request: &AuthoriseRequest) -> PaymentResult<AuthoriseResponse> {
        self.record(Call::Authorise(request.clone()))?;
        Ok(AuthoriseResponse {
            psp_reference: "8815161318854998".to_string(),
            result_code: "Authorised".to_string(),
            auth_code: Some("83152".to_string()),
            ..Default::default()
        })
    }

    async fn modify(
        &self,
        kind: ModificationKind,
        request: &ModificationRequest,
    ) -> PaymentResult<ModificationResponse> {
        self.record(Call::Modify(kind, request.clone()))?;
        Ok(ModificationResponse {
            psp_reference: "8825408195409505".to_string(),
            response: format!("[{}-received]", kind),
            additional_data: None,
        })
    }

    async fn directory_lookup(
        &self,
        request: &DirectoryLookupRequest,
    ) -> PaymentResult<DirectoryLookupResponse> {
        self.record(Call::DirectoryLookup(request.clone()))?;
        Ok(DirectoryLookupResponse {
            payment_methods: vec![PaymentMethod {
                brand_code: "ideal".to_string(),
                name: "iDEAL".to_string(),
                logos: None,
                issuers: vec![Issuer {
                    issuer_id: "1121".to_string(),
                    name: "Test Issuer".to_string(),
                }],
            }],
        })
    }

    async fn hpp_redirect_url(&self, request: &SkipHppRequest) -> PaymentResult<String> {
        self.record(Call::HppRedirect(request.clone()))?;
        Ok("https://test.adyen.com/hpp/skipDetails.shtml?merchantSig=mock".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// App state around the given double, with HPP settings configured
pub fn test_state(gateway: Arc<MockGateway>) -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../static")),
        log_format: LogFormat::Pretty,
    };

    let merchant = AdyenConfig::new("ws@Company.Test", "secret", "10001|KEY", "TestMerchant")
        .with_hpp("4468D978", "X7hsNDWp");

    AppState::with_gateway(config, merchant, gateway)
}
