//! # API Errors
//!
//! Every failure ends the request with a single `500` and the error's text as
//! a plain-text body.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pay_core::PaymentError;
use thiserror::Error;
use tracing::error;

/// Message returned when a submitted amount is not a number
pub const INVALID_AMOUNT_MESSAGE: &str = "Failed! Can not convert amount to float";

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// `amount` did not parse as a finite float
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,

    /// Body could not be decoded as a URL-encoded form
    #[error("{0}")]
    Form(String),

    /// Gateway call failed; the message is passed through untouched
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::Form(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("Request failed: {}", message);
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
