//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment gateway, merchant settings and server configuration,
//! all built once at startup and never mutated afterwards.

use pay_adyen::{AdyenConfig, AdyenGateway};
use pay_core::{BoxedPaymentGateway, PaymentError, PaymentResult};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Port used when `APPLICATION_PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("APPLICATION_PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                PaymentError::Configuration(format!(
                    "APPLICATION_PORT must be a port number, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_PORT,
        };

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(PaymentError::Configuration(format!(
                    "LOG_FORMAT must be \"pretty\" or \"json\", got {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            log_format,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> PaymentResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                PaymentError::Configuration(format!(
                    "Invalid socket address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway
    pub gateway: BoxedPaymentGateway,
    /// Merchant account, currency and HPP settings
    pub merchant: Arc<AdyenConfig>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Adyen gateway configured from the environment
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let gateway = AdyenGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Adyen: {}", e))?;
        let merchant = gateway.config().clone();

        Ok(Self::with_gateway(config, merchant, Arc::new(gateway)))
    }

    /// Create an AppState around an already built gateway
    pub fn with_gateway(
        config: AppConfig,
        merchant: AdyenConfig,
        gateway: BoxedPaymentGateway,
    ) -> Self {
        Self {
            gateway,
            merchant: Arc::new(merchant),
            config,
        }
    }

    /// Whether hosted payment page requests can be signed
    pub fn hpp_enabled(&self) -> bool {
        self.merchant.hmac_key.is_some() && !self.merchant.skin_code().is_empty()
    }
}
