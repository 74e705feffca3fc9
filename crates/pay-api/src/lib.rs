//! # pay-api
//!
//! HTTP layer for adyen-playground.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - HTML form pages for trying out the Adyen test environment
//! - Form endpoints that forward to the payment gateway
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Payment form |
//! | POST | `/perform_payment` | Authorise |
//! | POST | `/perform_capture` | Capture |
//! | POST | `/perform_cancel` | Cancel |
//! | POST | `/perform_refund` | Refund |
//! | GET | `/perform_lookup` | HPP payment methods |
//! | GET | `/perform_hpp` | Redirect to HPP |
//! | GET | `/static/*` | Static assets |

pub mod error;
pub mod handlers;
pub mod pages;
pub mod requests;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
