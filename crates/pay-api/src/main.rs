//! # Adyen Playground RS
//!
//! Demo server for Adyen's test environment: authorise, capture, cancel,
//! refund and hosted payment pages from plain HTML forms.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export ADYEN_CLIENT_TOKEN=10001|...
//! export ADYEN_USERNAME=ws@Company.YourCompany
//! export ADYEN_PASSWORD=...
//! export ADYEN_ACCOUNT=YourMerchantAccount
//!
//! # Hosted payment pages
//! export ADYEN_HMAC=...
//! export ADYEN_SKINCODE=...
//! export ADYEN_SHOPPER_LOCALE=en_GB
//!
//! # Run the server
//! adyen-playground
//! ```

use pay_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize logging
    init_tracing(config.log_format);

    // Print banner
    print_banner();

    // Fails before binding when credentials are missing
    info!("Checking environment variables...");
    let state = AppState::new(config)?;

    let addr = state.config.socket_addr()?;

    info!("Merchant account: {}", state.merchant.merchant_account);
    info!("Payment provider: {}", state.gateway.provider_name());
    if !state.hpp_enabled() {
        warn!("ADYEN_HMAC or ADYEN_SKINCODE not set; /perform_lookup and /perform_hpp will fail");
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Start listening connections on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

fn print_banner() {
    println!(
        r#"
  Adyen Playground RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Test environment demo
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
