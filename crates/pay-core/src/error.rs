//! # Payment Error Types
//!
//! Typed error handling for the playground.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing credentials, missing HPP settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider rejected the call
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Build a provider error for the given provider name
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        PaymentError::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if the error came from startup or gateway configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, PaymentError::Configuration(_))
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = PaymentError::provider("adyen", "Refused");
        assert_eq!(err.to_string(), "Provider error [adyen]: Refused");
    }

    #[test]
    fn test_is_configuration() {
        assert!(PaymentError::Configuration("ADYEN_ACCOUNT not set".into()).is_configuration());
        assert!(!PaymentError::NetworkError("timeout".into()).is_configuration());
    }
}
